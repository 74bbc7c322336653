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

//! common macros and utilities shared by the grayscope crates

use tracing_subscriber::EnvFilter;

pub mod macros;
pub mod fs;

mod config;
pub use config::{load_config_path, ConfigError};

// re-exported so that our logging macros resolve without an explicit tracing dependency of the caller
pub use tracing;

const DEFAULT_LOG_FILTER: &'static str = "info";

/// install a global fmt subscriber that is filtered by RUST_LOG (defaulting to 'info').
/// Note this only succeeds if there is no global subscriber set yet - subsequent calls are ignored
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new( DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter( filter)
        .with_target(false)
        .try_init();
}

/// saturating conversion of a rounded f64 into a u8 sample value
#[inline(always)]
pub fn saturate_u8 (x: f64)->u8 {
    if x.is_nan() { 0 } else { x.round().clamp( 0.0, 255.0) as u8 }
}
