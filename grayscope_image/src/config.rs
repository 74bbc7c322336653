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

use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};
use grayscope_common::{load_config_path, ConfigError};
use crate::errors::Result;

/// top level config of the plot renderer. All fields have defaults so that partial RON files are valid, e.g.
/// ```ron
/// (
///     histogram: ( width: 768, font_size: 14.0 ),
///     font: Some("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf")
/// )
/// ```
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GrayscopeConfig {
    pub profile: ProfileConfig,
    pub histogram: HistogramConfig,
    pub marker: MarkerConfig,

    /// TrueType font used for plot annotations. If not set the bundled DejaVuSansMono font is used
    pub font: Option<PathBuf>
}

impl GrayscopeConfig {
    pub fn load<P> (path: P)->Result<Self> where P: AsRef<Path> {
        Ok( load_config_path( path)? )
    }

    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::from_str(s).map_err( ConfigError::from)? )
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub height: u32,
    /// reserved space above and below the plotted value range
    pub margin: u32,
    pub line_color: [u8;3],
    pub background: [u8;3]
}

impl Default for ProfileConfig {
    fn default()->Self {
        ProfileConfig {
            height: 300,
            margin: 20,
            line_color: [0,0,0],
            background: [255,255,255]
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub width: u32,
    pub height: u32,
    pub bin_count: usize,

    /// vertical space not used for the bar range (tallest bar is at `height - reserved_margin`)
    pub reserved_margin: u32,
    /// distance of the zero-count baseline from the bottom edge
    pub baseline_offset: u32,

    pub line_thickness: u32,
    pub line_color: [u8;3],
    pub reference_color: [u8;3],
    pub background: [u8;3],

    pub text_color: [u8;3],
    pub font_size: f32,
    pub text_x: i32,
    /// text baseline of the min/max annotation, measured from the bottom edge
    pub min_max_y_offset: u32,
    /// text baseline of the mean annotation, measured from the top edge
    pub mean_y: i32
}

impl Default for HistogramConfig {
    fn default()->Self {
        HistogramConfig {
            width: 512,
            height: 400,
            bin_count: 256,
            reserved_margin: 50,
            baseline_offset: 25,
            line_thickness: 2,
            line_color: [0,0,0],
            reference_color: [200,200,200],
            background: [255,255,255],
            text_color: [255,0,0],
            font_size: 12.0,
            text_x: 10,
            min_max_y_offset: 10,
            mean_y: 20
        }
    }
}

/// how we mark the selected row in the display image
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub color: [u8;3],
    pub thickness: u32
}

impl Default for MarkerConfig {
    fn default()->Self {
        MarkerConfig { color: [255,0,0], thickness: 2 }
    }
}
