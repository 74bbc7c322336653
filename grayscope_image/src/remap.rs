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

use grayscope_common::{info, saturate_u8};
use crate::{errors::Result, grid::Grid, stats::compute_min_max_mean};

/// value of every output sample if the input grid is uniform. This is deliberately not derived from the
/// input value so that flat images are recognizable as degenerate
pub const UNIFORM_SENTINEL: u8 = 127;

/// which of the contrast stretch branches was taken
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum StretchOutcome {
    /// input already spans [0,255], output is an unmodified copy
    FullRange,
    /// input range [min,max] was linearly expanded to [0,255]
    Linear { min: u8, max: u8 },
    /// all input samples had `value`, output is filled with UNIFORM_SENTINEL
    Uniform { value: u8 }
}

/// contrast stretch (range expansion) of a grid to the full [0,255] range
pub fn stretch (grid: &Grid)->Result<Grid> {
    stretch_with_outcome( grid).map( |(g,_)| g)
}

pub fn stretch_with_outcome (grid: &Grid)->Result<(Grid,StretchOutcome)> {
    let stats = compute_min_max_mean( grid)?;
    let (mn,mx) = (stats.min, stats.max);

    if mn == 0 && mx == 255 {
        info!("grid already uses full range [0,255], no expansion applied");
        Ok( (grid.clone(), StretchOutcome::FullRange) )

    } else if mx > mn {
        let range = (mx - mn) as f64;
        let expanded = grid.map( |p| saturate_u8( (p - mn) as f64 * 255.0 / range));
        info!("range expansion [{},{}] -> [0,255]", mn, mx);
        Ok( (expanded, StretchOutcome::Linear{ min: mn, max: mx }) )

    } else {
        info!("uniform grid (all samples = {}), filling with {}", mn, UNIFORM_SENTINEL);
        let (w,h) = grid.dimensions();
        Ok( (Grid::filled( w, h, UNIFORM_SENTINEL), StretchOutcome::Uniform{ value: mn }) )
    }
}
