/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use crate::{errors::{Result, GrayscopeError}, grid::{Grid, Sequence, IntensitySource}};

/// intensity values of a single grid row, left to right
pub fn sample_row (grid: &Grid, row: u32)->Result<Sequence> {
    Ok( Sequence::new( grid.row( row)?.to_vec()) )
}

/// intensity values of a single grid column, top to bottom
pub fn sample_column (grid: &Grid, col: u32)->Result<Sequence> {
    let (w,h) = grid.dimensions();
    if col >= w {
        return Err( GrayscopeError::OutOfRange( format!("column {} outside of [0,{})", col, w)) )
    }

    let samples = grid.samples();
    let values = (0..h as usize).map( |y| samples[y * w as usize + col as usize]).collect();
    Ok( Sequence::new( values) )
}

/// all samples of the grid in row-major order
pub fn flatten (grid: &Grid)->Sequence {
    Sequence::new( grid.samples().to_vec())
}
