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

use grayscope_common::info;
use crate::{
    errors::Result,
    grid::{Canvas, Grid, Sequence},
    plot::PlotRenderer,
    present::Presenter,
    remap::{stretch_with_outcome, StretchOutcome},
    sampler::{sample_column, sample_row},
    stats::{compute_histogram, compute_min_max_mean, Statistics}
};

/* #region intensity profile ************************************************************************************/

/// which line of the grid a profile is taken from
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ProfileLine {
    Row(u32),
    Column(u32)
}

pub struct ProfileView {
    pub line: ProfileLine,
    pub sequence: Sequence,
    /// the grid with the selected row marked (only for row profiles)
    pub display: Option<Canvas>,
    pub profile: Canvas
}

impl ProfileView {
    pub fn present (&self, presenter: &mut impl Presenter)->Result<()> {
        if let Some(display) = &self.display {
            presenter.present( display, "display_image")?;
        }
        presenter.present( &self.profile, "intensity_profile")
    }
}

pub fn intensity_profile_view (renderer: &PlotRenderer, grid: &Grid, line: ProfileLine)->Result<ProfileView> {
    let (sequence, display) = match line {
        ProfileLine::Row(row) => (sample_row( grid, row)?, Some( renderer.mark_row( grid, row)?)),
        ProfileLine::Column(col) => (sample_column( grid, col)?, None)
    };

    let profile = renderer.render_profile( &sequence, sequence.len() as u32, renderer.profile_config().height)?;
    info!("selected {:?} ({} samples)", line, sequence.len());

    Ok( ProfileView { line, sequence, display, profile } )
}

/* #endregion intensity profile */

/* #region range expansion ***************************************************************************************/

pub struct RangeExpansionView {
    pub expanded: Grid,
    pub outcome: StretchOutcome,
    pub original_stats: Statistics,
    pub expanded_stats: Statistics,
    pub original_histogram: Canvas,
    pub expanded_histogram: Canvas
}

impl RangeExpansionView {
    /// original and expanded images followed by their histograms
    pub fn present (&self, original: &Grid, presenter: &mut impl Presenter)->Result<()> {
        presenter.present( &original.to_canvas(), "original_image")?;
        presenter.present( &self.expanded.to_canvas(), "expanded_image")?;
        presenter.present( &self.original_histogram, "histogram_original")?;
        presenter.present( &self.expanded_histogram, "histogram_expanded")
    }
}

pub fn range_expansion_view (renderer: &PlotRenderer, grid: &Grid)->Result<RangeExpansionView> {
    let (expanded, outcome) = stretch_with_outcome( grid)?;

    let (original_stats, original_histogram) = histogram_plot( renderer, grid)?;
    let (expanded_stats, expanded_histogram) = histogram_plot( renderer, &expanded)?;

    info!("original min={} max={} mean={:.2}", original_stats.min, original_stats.max, original_stats.mean);
    info!("expanded min={} max={} mean={:.2}", expanded_stats.min, expanded_stats.max, expanded_stats.mean);

    Ok( RangeExpansionView { expanded, outcome, original_stats, expanded_stats, original_histogram, expanded_histogram } )
}

fn histogram_plot (renderer: &PlotRenderer, grid: &Grid)->Result<(Statistics,Canvas)> {
    let cfg = renderer.histogram_config();

    let mut stats = compute_min_max_mean( grid)?;
    let bins = compute_histogram( grid, cfg.bin_count)?;
    let canvas = renderer.render_histogram( &bins, &stats, cfg.width, cfg.height)?;
    stats.histogram = Some(bins);

    Ok( (stats, canvas) )
}

/* #endregion range expansion */
