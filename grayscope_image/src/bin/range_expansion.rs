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

use anyhow::Result;
use grayscope_common::{define_cli, check_cli, init_tracing, info};
use grayscope_image::{
    load_grayscale_grid, FilePresenter, GrayscopeConfig, PlotRenderer, StretchOutcome, load_font,
    pipeline::range_expansion_view
};

define_cli! { ARGS [about="contrast stretch a grayscale image and compare histograms of original and expanded image"] =
    out_dir: String [help="directory to store images and histograms", long, short, default_value="."],
    config: Option<String> [help="optional RON config file for plot parameters", long],
    font: Option<String> [help="TrueType font file for histogram annotations (overrides config and bundled default font)", long],
    src_file: String [help="filename of image to expand", default_value="AI_totoro.png"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let config = match &ARGS.config {
        Some(path) => GrayscopeConfig::load( path)?,
        None => GrayscopeConfig::default()
    };
    let mut renderer = PlotRenderer::from_config( &config)?;
    if let Some(font) = &ARGS.font { renderer = renderer.with_font( load_font( font)?) }

    let grid = load_grayscale_grid( &ARGS.src_file)?;
    info!("loaded {}: {}x{} pixels", ARGS.src_file, grid.width(), grid.height());

    let view = range_expansion_view( &renderer, &grid)?;
    match view.outcome {
        StretchOutcome::FullRange => println!("image already uses full range [0,255]"),
        StretchOutcome::Linear{min,max} => println!("expanded range [{},{}] -> [0,255]", min, max),
        StretchOutcome::Uniform{value} => println!("uniform image (all pixels = {})", value)
    }

    let mut presenter = FilePresenter::new( &ARGS.out_dir)?;
    view.present( &grid, &mut presenter)?;

    for path in presenter.presented() {
        println!("saved {}", path.display());
    }

    Ok(())
}
