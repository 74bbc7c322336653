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

use anyhow::{Result, anyhow};
use grayscope_common::{define_cli, check_cli, init_tracing, info};
use grayscope_image::{
    load_grayscale_grid, FilePresenter, GrayscopeConfig, PlotRenderer, load_font,
    pipeline::{intensity_profile_view, ProfileLine}
};

define_cli! { ARGS [about="plot the intensity profile along a row (or column) of a grayscale image"] =
    row: Option<u32> [help="image row to sample (default is the middle row)", long, short],
    column: Option<u32> [help="sample a column instead of a row", long, short, conflicts_with="row"],
    out_dir: String [help="directory to store display image and profile plot", long, short, default_value="."],
    config: Option<String> [help="optional RON config file for plot parameters", long],
    font: Option<String> [help="TrueType font file (overrides config and bundled default font)", long],
    src_file: String [help="filename of image to load", default_value="test.jpg"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let config = get_config()?;
    let mut renderer = PlotRenderer::from_config( &config)?;
    if let Some(font) = &ARGS.font { renderer = renderer.with_font( load_font( font)?) }

    let grid = load_grayscale_grid( &ARGS.src_file)?;
    let (w,h) = grid.dimensions();
    info!("loaded {}: {}x{}", ARGS.src_file, w, h);
    if h == 0 { return Err( anyhow!("image {} has no rows", ARGS.src_file)) }

    let line = if let Some(col) = ARGS.column {
        ProfileLine::Column(col)
    } else {
        ProfileLine::Row( ARGS.row.unwrap_or( h/2))
    };

    let view = intensity_profile_view( &renderer, &grid, line)?;
    let mut presenter = FilePresenter::new( &ARGS.out_dir)?;
    view.present( &mut presenter)?;

    Ok(())
}

fn get_config()->Result<GrayscopeConfig> {
    match &ARGS.config {
        Some(path) => Ok( GrayscopeConfig::load( path)? ),
        None => Ok( GrayscopeConfig::default() )
    }
}
