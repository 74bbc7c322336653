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

use grayscope_common::debug;
use crate::{errors::{Result, GrayscopeError}, grid::IntensitySource};

pub const DEFAULT_BIN_COUNT: usize = 256;

/// aggregate statistics of a grid or sequence. These are always computed from scratch for the given input
#[derive(Debug,Clone,PartialEq)]
pub struct Statistics {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
    pub histogram: Option<Vec<u32>>
}

impl Statistics {
    /// the mean as it is shown in plot annotations (truncated, not rounded)
    pub fn display_mean (&self)->i64 {
        self.mean.trunc() as i64
    }
}

/// incremental min/max/mean accumulator. We keep an integer sum so that the mean is exact
struct Accumulator {
    min: u8,
    max: u8,
    sum: u64,
    n: usize
}

impl Accumulator {
    fn new ()->Self {
        Accumulator { min: u8::MAX, max: u8::MIN, sum: 0, n: 0 }
    }

    #[inline(always)]
    fn add (&mut self, v: u8) {
        self.n += 1;
        if v < self.min { self.min = v }
        if v > self.max { self.max = v }
        self.sum += v as u64;
    }

    fn mean (&self)->f64 {
        self.sum as f64 / self.n as f64
    }
}

pub fn compute_min_max_mean<S> (input: &S)->Result<Statistics> where S: IntensitySource + ?Sized {
    let samples = input.samples();
    if samples.is_empty() {
        return Err( GrayscopeError::EmptyInput("no samples to compute statistics".into()) )
    }

    let mut acc = Accumulator::new();
    for &v in samples { acc.add(v) }

    let stats = Statistics { min: acc.min, max: acc.max, mean: acc.mean(), histogram: None };
    debug!("statistics of {} samples: min={} max={} mean={:.3}", acc.n, stats.min, stats.max, stats.mean);
    Ok( stats )
}

/// count samples per bin. Bin `i` covers the half-open value range [i*256/bin_count, (i+1)*256/bin_count).
/// Empty input is not an error here - it just produces all-zero bins
pub fn compute_histogram<S> (input: &S, bin_count: usize)->Result<Vec<u32>> where S: IntensitySource + ?Sized {
    if bin_count == 0 || bin_count > 256 {
        return Err( GrayscopeError::IllegalArgument( format!("bin count {} not in [1,256]", bin_count)) )
    }

    let mut bins = vec![0u32; bin_count];
    for &v in input.samples() {
        bins[ v as usize * bin_count / 256] += 1;
    }

    Ok( bins )
}

/// min/max/mean plus a full (one bin per value) histogram
pub fn compute_statistics<S> (input: &S)->Result<Statistics> where S: IntensitySource + ?Sized {
    let mut stats = compute_min_max_mean( input)?;
    stats.histogram = Some( compute_histogram( input, DEFAULT_BIN_COUNT)?);
    Ok( stats )
}

/// linearly map the [min,max] range of `values` onto [target_min,target_max].
/// If all values are the same the result is `target_min` for each of them.
/// Note this is not the policy used by contrast stretching (see `remap::stretch`)
pub fn normalize_to_range<T> (values: &[T], target_min: f64, target_max: f64)->Result<Vec<f64>> where T: Copy + Into<f64> {
    if values.is_empty() {
        return Err( GrayscopeError::EmptyInput("no values to normalize".into()) )
    }

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &v in values {
        let v: f64 = v.into();
        if v < min { min = v }
        if v > max { max = v }
    }

    let range = max - min;
    if range > 0.0 {
        let scale = (target_max - target_min) / range;
        Ok( values.iter().map( |&v| {
            let v: f64 = v.into();
            target_min + (v - min) * scale
        }).collect() )
    } else {
        Ok( vec![target_min; values.len()] )
    }
}
