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

use std::path::Path;
use image::Rgb;
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use grayscope_common::{fs::filepath_contents, warn};
use crate::{
    config::{GrayscopeConfig, HistogramConfig, MarkerConfig, ProfileConfig},
    errors::{Result, GrayscopeError},
    grid::{Canvas, Grid, IntensitySource},
    stats::{normalize_to_range, Statistics}
};

pub type Point = (i32,i32);
pub type Segment = (Point,Point);

/* #region font resources ************************************************************************************************/

pub fn load_font<P> (path: P)->Result<FontVec> where P: AsRef<Path> {
    let path = path.as_ref();
    if !path.is_file() {
        Err( GrayscopeError::IllegalArgument( format!("font not found: {}", path.display())) )
    } else {
        let data = filepath_contents( &path)?;
        Ok( FontVec::try_from_vec( data)? )
    }
}

const DEFAULT_FONT_NAME: &'static str = "DejaVuSansMono.ttf"; // bundled in grayscope_image/data
const DEFAULT_FONT_DATA: &'static [u8] = include_bytes!("../data/DejaVuSansMono.ttf");

pub fn load_default_font ()->Result<FontVec> {
    Ok( FontVec::try_from_vec( DEFAULT_FONT_DATA.to_vec())? )
}

/* #endregion font resources */

/* #region plot geometry *************************************************************************************************/

/// canvas coordinates are i32 (imageproc), computations are done in i64
fn coord (v: i64)->Result<i32> {
    i32::try_from( v).map_err( |_| GrayscopeError::InvalidDimensions( format!("coordinate {} outside of canvas range", v)))
}

/// vertical canvas position of an intensity value in a profile plot. The canvas origin is top-left, hence larger
/// values map to smaller y. `margin` is reserved both above and below the value range
#[inline]
pub fn profile_y (v: u8, height: u32, margin: u32)->Result<i32> {
    let h = i64::from( height);
    let m = i64::from( margin);
    coord( h - (i64::from( v) * (h - 2*m) / 255) - m)
}

pub fn profile_points (samples: &[u8], height: u32, margin: u32)->Result<Vec<Point>> {
    coord( i64::from( height))?;
    samples.iter().enumerate().map( |(x,&v)| Ok( (coord( x as i64)?, profile_y( v, height, margin)?) )).collect()
}

/// the line segments connecting adjacent profile samples
pub fn profile_segments (samples: &[u8], height: u32, margin: u32)->Result<Vec<Segment>> {
    if samples.len() < 2 {
        return Err( GrayscopeError::InsufficientData( format!("profile needs at least 2 samples, got {}", samples.len())) )
    }
    let points = profile_points( samples, height, margin)?;
    Ok( points.windows(2).map( |p| (p[0], p[1])).collect() )
}

/// the polyline across histogram bin tops. `bins` are normalized into [0, height - reserved_margin] first
pub fn histogram_segments (bins: &[u32], width: u32, height: u32, cfg: &HistogramConfig)->Result<Vec<Segment>> {
    if bins.is_empty() {
        return Err( GrayscopeError::EmptyInput("no histogram bins".into()) )
    }
    if height <= cfg.reserved_margin || height <= cfg.baseline_offset {
        return Err( GrayscopeError::InvalidDimensions( format!("histogram height {} too small for margins", height)) )
    }

    coord( i64::from( width))?;

    // integer division - remainder pixels on the right stay unused
    let bin_w = i64::from( width) / bins.len() as i64;
    if bin_w == 0 {
        return Err( GrayscopeError::InvalidDimensions( format!("histogram width {} < number of bins {}", width, bins.len())) )
    }

    let norm = normalize_to_range( bins, 0.0, (height - cfg.reserved_margin) as f64)?;
    let baseline = i64::from( histogram_baseline( height, cfg)?);
    let bin_top = |i: usize| -> Result<Point> {
        Ok( (coord( bin_w * i as i64)?, coord( baseline - norm[i].round() as i64)?) )
    };

    let mut segments = Vec::with_capacity( bins.len());
    for i in 1..norm.len() {
        segments.push( (bin_top( i-1)?, bin_top( i)?) );
    }

    Ok( segments )
}

#[inline]
pub fn histogram_baseline (height: u32, cfg: &HistogramConfig)->Result<i32> {
    coord( i64::from( height) - i64::from( cfg.baseline_offset))
}

/* #endregion plot geometry */

/* #region drawing primitives ********************************************************************************************/

fn new_canvas (width: u32, height: u32, background: [u8;3])->Result<Canvas> {
    if width == 0 || height == 0 {
        Err( GrayscopeError::InvalidDimensions( format!("empty canvas {}x{}", width, height)) )
    } else {
        Ok( Canvas::from_pixel( width, height, Rgb(background)) )
    }
}

fn draw_segment (canvas: &mut Canvas, seg: Segment, color: [u8;3]) {
    let ((x0,y0),(x1,y1)) = seg;
    draw_line_segment_mut( canvas, (x0 as f32, y0 as f32), (x1 as f32, y1 as f32), Rgb(color));
}

/// approximates a thick line by parallel 1px segments, offset across the dominant direction
fn draw_thick_segment (canvas: &mut Canvas, seg: Segment, thickness: u32, color: [u8;3]) {
    let ((x0,y0),(x1,y1)) = seg;
    let is_flat = (x1 - x0).abs() >= (y1 - y0).abs();
    let t = thickness.max(1) as i32;

    for k in 0..t {
        let d = k - t/2;
        let s = if is_flat { ((x0, y0+d),(x1, y1+d)) } else { ((x0+d, y0),(x1+d, y1)) };
        draw_segment( canvas, s, color);
    }
}

/* #endregion drawing primitives */

/// renders intensity profiles, histograms and row markers according to a `GrayscopeConfig`.
/// Each render call returns a new canvas - the renderer itself is not modified
pub struct PlotRenderer {
    profile: ProfileConfig,
    histogram: HistogramConfig,
    marker: MarkerConfig,
    font: Option<FontVec>
}

impl Default for PlotRenderer {
    fn default()->Self {
        PlotRenderer::new( &GrayscopeConfig::default())
    }
}

impl PlotRenderer {
    /// create renderer with the bundled default font. Use `from_config` to load the configured font instead
    pub fn new (config: &GrayscopeConfig)->Self {
        let font = match load_default_font() {
            Ok(font) => Some(font),
            Err(e) => { warn!("failed to load default font {}: {}", DEFAULT_FONT_NAME, e); None }
        };

        PlotRenderer {
            profile: config.profile.clone(),
            histogram: config.histogram.clone(),
            marker: config.marker.clone(),
            font
        }
    }

    pub fn from_config (config: &GrayscopeConfig)->Result<Self> {
        let renderer = Self::new( config);
        match &config.font {
            Some(path) => Ok( renderer.with_font( load_font( path)?) ),
            None => Ok( renderer )
        }
    }

    pub fn with_font (mut self, font: FontVec)->Self {
        self.font = Some(font);
        self
    }

    pub fn without_font (mut self)->Self {
        self.font = None;
        self
    }

    pub fn has_font (&self)->bool { self.font.is_some() }
    pub fn profile_config (&self)->&ProfileConfig { &self.profile }
    pub fn histogram_config (&self)->&HistogramConfig { &self.histogram }

    /// line plot of a sample sequence on a white canvas, one segment per adjacent sample pair
    pub fn render_profile<S> (&self, sequence: &S, width: u32, height: u32)->Result<Canvas> where S: IntensitySource + ?Sized {
        let cfg = &self.profile;
        let segments = profile_segments( sequence.samples(), height, cfg.margin)?;
        let mut canvas = new_canvas( width, height, cfg.background)?;

        for seg in segments {
            draw_segment( &mut canvas, seg, cfg.line_color);
        }

        Ok( canvas )
    }

    /// histogram polyline with a reference baseline and min/max/mean annotations
    pub fn render_histogram (&self, bins: &[u32], stats: &Statistics, width: u32, height: u32)->Result<Canvas> {
        let cfg = &self.histogram;
        let segments = histogram_segments( bins, width, height, cfg)?;
        let mut canvas = new_canvas( width, height, cfg.background)?;

        for seg in segments {
            draw_thick_segment( &mut canvas, seg, cfg.line_thickness, cfg.line_color);
        }

        let baseline = histogram_baseline( height, cfg)?;
        draw_segment( &mut canvas, ((0, baseline), (coord( i64::from( width))?, baseline)), cfg.reference_color);

        if let Some(font) = &self.font {
            let min_max = format!("Min: {} Max: {}", stats.min, stats.max);
            let mean = format!("Mean: {}", stats.display_mean());
            let y_min_max = coord( i64::from( height) - i64::from( cfg.min_max_y_offset))?;

            self.draw_annotation( &mut canvas, font, cfg.text_x, y_min_max, &min_max);
            self.draw_annotation( &mut canvas, font, cfg.text_x, cfg.mean_y, &mean);
        } else {
            warn!("no font configured, skipping histogram annotations");
        }

        Ok( canvas )
    }

    /// text is positioned by its baseline
    fn draw_annotation (&self, canvas: &mut Canvas, font: &FontVec, x: i32, y_baseline: i32, text: &str) {
        let scale = PxScale::from( self.histogram.font_size);
        let ascent = font.as_scaled( scale).ascent();
        let y_top = y_baseline - ascent.round() as i32;
        draw_text_mut( canvas, Rgb(self.histogram.text_color), x, y_top, scale, font, text);
    }

    /// RGB copy of the grid with a horizontal marker line across `row`
    pub fn mark_row (&self, grid: &Grid, row: u32)->Result<Canvas> {
        if row >= grid.height() {
            return Err( GrayscopeError::OutOfRange( format!("row {} outside of [0,{})", row, grid.height())) )
        }

        let y = coord( i64::from( row))?;
        let x_end = coord( i64::from( grid.width()))?;
        let mut canvas = grid.to_canvas();
        draw_thick_segment( &mut canvas, ((0, y), (x_end, y)), self.marker.thickness, self.marker.color);

        Ok( canvas )
    }
}

/* #region default renderer shortcuts *************************************************************************************/

pub fn render_profile<S> (sequence: &S, width: u32, height: u32)->Result<Canvas> where S: IntensitySource + ?Sized {
    PlotRenderer::default().render_profile( sequence, width, height)
}

pub fn render_histogram (bins: &[u32], stats: &Statistics, width: u32, height: u32)->Result<Canvas> {
    PlotRenderer::default().render_histogram( bins, stats, width, height)
}

pub fn mark_row (grid: &Grid, row: u32)->Result<Canvas> {
    PlotRenderer::default().mark_row( grid, row)
}

/* #endregion default renderer shortcuts */
