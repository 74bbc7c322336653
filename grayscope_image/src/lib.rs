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

//! pixel statistics visualization of grayscale images.
//! This turns a 2D grid of 8-bit intensity samples into diagnostic plots (intensity profiles and histograms)
//! and implements contrast stretching (range expansion). It mostly wraps the external 'image' and 'imageproc' crates
//!
//! all core operations are synchronous and pure - they borrow their input grids and return newly allocated
//! grids, statistics or canvases

mod errors;
pub use errors::{Result, GrayscopeError};

mod grid;
pub use grid::{Grid, Sequence, Canvas, IntensitySource};

mod sampler;
pub use sampler::{sample_row, sample_column, flatten};

mod stats;
pub use stats::{Statistics, compute_min_max_mean, compute_histogram, compute_statistics, normalize_to_range, DEFAULT_BIN_COUNT};

mod remap;
pub use remap::{stretch, stretch_with_outcome, StretchOutcome, UNIFORM_SENTINEL};

pub mod config;
pub use config::GrayscopeConfig;

pub mod plot;
pub use plot::{PlotRenderer, render_profile, render_histogram, mark_row, load_font, load_default_font};

mod io;
pub use io::{load_grayscale_grid, export_image, ExportImage};

pub mod present;
pub use present::{Presenter, FilePresenter};

pub mod pipeline;
