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

use std::path::{Path,PathBuf};
use image::Rgb;
use grayscope_image::{
    export_image, load_grayscale_grid, stretch, Canvas, FilePresenter, GrayscopeConfig, GrayscopeError, Grid,
    IntensitySource, PlotRenderer, Presenter, StretchOutcome,
    pipeline::{intensity_profile_view, range_expansion_view, ProfileLine}
};

// run with "cargo test --test test_io -- --nocapture"

fn test_dir (name: &str)->PathBuf {
    let dir = std::env::temp_dir().join( format!("grayscope_test_{}_{}", name, std::process::id()));
    std::fs::create_dir_all( &dir).unwrap();
    dir
}

/// a presenter that just keeps labels and canvas sizes
#[derive(Default)]
struct RecordingPresenter {
    presented: Vec<(String,(u32,u32))>
}

impl Presenter for RecordingPresenter {
    fn present (&mut self, canvas: &Canvas, label: &str)->grayscope_image::Result<()> {
        self.presented.push( (label.to_string(), canvas.dimensions()));
        Ok(())
    }
}

#[test]
fn test_export_and_load_grid() {
    let dir = test_dir("grid");
    let path = dir.join("sub/ramp.png");

    let data: Vec<u8> = (0..60).map( |i| (i * 4) as u8).collect();
    let grid = Grid::from_raw( 10, 6, data).unwrap();
    export_image( &grid, &path).unwrap();

    let loaded = load_grayscale_grid( &path).unwrap();
    assert_eq!( loaded, grid);

    std::fs::remove_dir_all( &dir).ok();
}

#[test]
fn test_load_converts_to_gray() {
    let dir = test_dir("rgb");
    let path = dir.join("white.png");

    let canvas = Canvas::from_pixel( 3, 2, Rgb([255,255,255]));
    export_image( &canvas, &path).unwrap();

    let grid = load_grayscale_grid( &path).unwrap();
    assert_eq!( grid.dimensions(), (3,2));
    assert!( grid.samples().iter().all( |&v| v == 255));

    std::fs::remove_dir_all( &dir).ok();
}

#[test]
fn test_load_error() {
    let dir = test_dir("load_err");

    let res = load_grayscale_grid( dir.join("does_not_exist.png"));
    assert!( matches!( res, Err(GrayscopeError::LoadError(_))));

    let path = dir.join("garbage.png");
    std::fs::write( &path, b"this is not an image").unwrap();
    let res = load_grayscale_grid( &path);
    assert!( matches!( res, Err(GrayscopeError::LoadError(_))));
    if let Err(e) = res { println!("{e}") }

    std::fs::remove_dir_all( &dir).ok();
}

#[test]
fn test_write_error() {
    let dir = test_dir("write_err");
    let grid = Grid::filled( 2, 2, 0);

    // unknown extension means no encoder
    let res = export_image( &grid, dir.join("grid.unknown_format"));
    assert!( matches!( res, Err(GrayscopeError::WriteError(_))));

    std::fs::remove_dir_all( &dir).ok();
}

#[test]
fn test_file_presenter() {
    let dir = test_dir("presenter");
    let mut presenter = FilePresenter::new( dir.join("out")).unwrap();

    let canvas = Canvas::from_pixel( 4, 4, Rgb([1,2,3]));
    presenter.present( &canvas, "3. Original Histogram").unwrap();

    let expected = dir.join("out/3_original_histogram.png");
    assert_eq!( presenter.presented(), &[expected.clone()]);
    assert!( expected.is_file());

    std::fs::remove_dir_all( &dir).ok();
}

#[test]
fn test_profile_pipeline() {
    let data: Vec<u8> = (0..8*5).map( |i| (i * 6) as u8).collect();
    let grid = Grid::from_raw( 8, 5, data).unwrap();
    let renderer = PlotRenderer::default();

    let view = intensity_profile_view( &renderer, &grid, ProfileLine::Row(2)).unwrap();
    assert_eq!( view.sequence.as_slice(), grid.row(2).unwrap());
    assert_eq!( view.profile.dimensions(), (8, 300));
    assert_eq!( view.display.as_ref().map( |c| c.dimensions()), Some((8,5)));

    let mut presenter = RecordingPresenter::default();
    view.present( &mut presenter).unwrap();
    assert_eq!( presenter.presented, vec![("display_image".to_string(), (8,5)), ("intensity_profile".to_string(), (8,300))]);

    let view = intensity_profile_view( &renderer, &grid, ProfileLine::Column(7)).unwrap();
    assert_eq!( view.sequence.len(), 5);
    assert!( view.display.is_none());

    assert!( matches!( intensity_profile_view( &renderer, &grid, ProfileLine::Row(5)), Err(GrayscopeError::OutOfRange(_))));
}

#[test]
fn test_profile_pipeline_narrow_grid() {
    let grid = Grid::filled( 1, 3, 10);
    let res = intensity_profile_view( &PlotRenderer::default(), &grid, ProfileLine::Row(0));
    assert!( matches!( res, Err(GrayscopeError::InsufficientData(_))));
}

#[test]
fn test_range_expansion_pipeline() {
    let grid = Grid::from_raw( 4, 1, vec![60, 70, 80, 90]).unwrap();
    let renderer = PlotRenderer::new( &GrayscopeConfig::default());

    let view = range_expansion_view( &renderer, &grid).unwrap();
    assert_eq!( view.outcome, StretchOutcome::Linear{ min: 60, max: 90 });
    assert_eq!( view.expanded, stretch( &grid).unwrap());
    assert_eq!( (view.original_stats.min, view.original_stats.max), (60, 90));
    assert_eq!( (view.expanded_stats.min, view.expanded_stats.max), (0, 255));
    assert_eq!( view.original_stats.histogram.as_ref().map( |h| h.iter().sum::<u32>()), Some(4));
    assert_eq!( view.original_histogram.dimensions(), (512, 400));

    let mut presenter = RecordingPresenter::default();
    view.present( &grid, &mut presenter).unwrap();
    let labels: Vec<&str> = presenter.presented.iter().map( |(l,_)| l.as_str()).collect();
    assert_eq!( labels, vec!["original_image", "expanded_image", "histogram_original", "histogram_expanded"]);
}

#[test]
fn test_load_sample_config() {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join("config/grayscope.ron");
    let config = GrayscopeConfig::load( &path).unwrap();
    println!("{config:?}");
    assert_eq!( config, GrayscopeConfig::default());
}
