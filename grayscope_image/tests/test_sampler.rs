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

#![allow(unused)]

use grayscope_image::{flatten, sample_column, sample_row, GrayscopeError, Grid, IntensitySource};

// run with "cargo test --test test_sampler -- --nocapture"

fn test_grid ()->Grid {
    // 4 x 3
    Grid::from_raw( 4, 3, vec![
         0,  1,  2,  3,
        10, 11, 12, 13,
        20, 21, 22, 23
    ]).unwrap()
}

#[test]
fn test_sample_row() {
    let grid = test_grid();
    assert_eq!( sample_row( &grid, 0).unwrap().as_slice(), &[0, 1, 2, 3]);
    assert_eq!( sample_row( &grid, 2).unwrap().as_slice(), &[20, 21, 22, 23]);

    let res = sample_row( &grid, 3);
    assert!( matches!( res, Err(GrayscopeError::OutOfRange(_))));
    if let Err(e) = res { println!("{e}") }
}

#[test]
fn test_sample_column() {
    let grid = test_grid();
    assert_eq!( sample_column( &grid, 1).unwrap().as_slice(), &[1, 11, 21]);
    assert!( matches!( sample_column( &grid, 4), Err(GrayscopeError::OutOfRange(_))));
}

#[test]
fn test_flatten() {
    let grid = test_grid();
    let seq = flatten( &grid);
    assert_eq!( seq.len(), 12);
    assert_eq!( &seq[..], grid.samples());
    assert_eq!( seq[4], 10);
}

#[test]
fn test_bounds_checked_get() {
    let grid = test_grid();
    assert_eq!( grid.get( 3, 2).unwrap(), 23);
    assert!( matches!( grid.get( 4, 0), Err(GrayscopeError::OutOfRange(_))));
    assert!( matches!( grid.get( 0, 3), Err(GrayscopeError::OutOfRange(_))));
}

#[test]
fn test_from_raw_mismatch() {
    let res = Grid::from_raw( 3, 3, vec![0; 8]);
    assert!( matches!( res, Err(GrayscopeError::InvalidDimensions(_))));
}
