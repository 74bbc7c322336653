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

use grayscope_image::{
    compute_histogram, compute_min_max_mean, compute_statistics, normalize_to_range, flatten, sample_row,
    GrayscopeError, Grid, Sequence, DEFAULT_BIN_COUNT
};

// run with "cargo test --test test_stats -- --nocapture"

fn ramp_grid (width: u32, height: u32)->Grid {
    let data: Vec<u8> = (0..width*height).map( |i| ((i * 37 + 11) % 256) as u8).collect();
    Grid::from_raw( width, height, data).unwrap()
}

#[test]
fn test_min_max_mean() {
    let seq = Sequence::new( vec![10, 20, 30]);
    let stats = compute_min_max_mean( &seq).unwrap();
    println!("{stats:?}");

    assert_eq!( stats.min, 10);
    assert_eq!( stats.max, 30);
    assert_eq!( stats.mean, 20.0);
    assert!( stats.histogram.is_none());
}

#[test]
fn test_mean_is_not_rounded() {
    let stats = compute_min_max_mean( &[1u8, 2][..]).unwrap();
    assert_eq!( stats.mean, 1.5);
    assert_eq!( stats.display_mean(), 1);

    let stats = compute_min_max_mean( &vec![254u8, 255, 255]).unwrap();
    assert_eq!( stats.display_mean(), 254);
}

#[test]
fn test_grid_and_sequence_agree() {
    let grid = ramp_grid( 17, 9);
    let s1 = compute_min_max_mean( &grid).unwrap();
    let s2 = compute_min_max_mean( &flatten( &grid)).unwrap();
    assert_eq!( s1, s2);
}

#[test]
fn test_empty_input() {
    let res = compute_min_max_mean( &Sequence::new( vec![]));
    assert!( matches!( res, Err(GrayscopeError::EmptyInput(_))));

    let grid = Grid::filled( 0, 0, 0);
    assert!( matches!( compute_min_max_mean( &grid), Err(GrayscopeError::EmptyInput(_))));
    assert!( matches!( compute_statistics( &grid), Err(GrayscopeError::EmptyInput(_))));

    // counting nothing is well defined
    let bins = compute_histogram( &grid, DEFAULT_BIN_COUNT).unwrap();
    assert_eq!( bins.len(), 256);
    assert!( bins.iter().all( |&c| c == 0));
}

#[test]
fn test_histogram_sum() {
    for (w,h) in [(1,1), (2,3), (64,48), (255,7)] {
        let grid = ramp_grid( w, h);
        for bin_count in [1, 2, 3, 16, 100, 256] {
            let bins = compute_histogram( &grid, bin_count).unwrap();
            assert_eq!( bins.len(), bin_count);
            let sum: u32 = bins.iter().sum();
            assert_eq!( sum, w * h, "bin sum for {w}x{h} with {bin_count} bins");
        }
    }
}

#[test]
fn test_histogram_bins() {
    let seq = Sequence::new( vec![0, 0, 7, 255, 128, 127]);

    let bins = compute_histogram( &seq, 256).unwrap();
    assert_eq!( bins[0], 2);
    assert_eq!( bins[7], 1);
    assert_eq!( bins[127], 1);
    assert_eq!( bins[128], 1);
    assert_eq!( bins[255], 1);

    // half-open ranges of width 128
    let bins = compute_histogram( &seq, 2).unwrap();
    assert_eq!( bins, vec![4, 2]);

    // width 32: [0,32) [32,64) .. [224,256)
    let bins = compute_histogram( &seq, 8).unwrap();
    assert_eq!( bins, vec![3, 0, 0, 1, 1, 0, 0, 1]);
}

#[test]
fn test_histogram_order_independent() {
    let a = Sequence::new( vec![5, 200, 5, 17, 99]);
    let b = Sequence::new( vec![99, 5, 17, 5, 200]);
    assert_eq!( compute_histogram( &a, 256).unwrap(), compute_histogram( &b, 256).unwrap());
}

#[test]
fn test_invalid_bin_count() {
    let seq = Sequence::new( vec![1, 2, 3]);
    assert!( matches!( compute_histogram( &seq, 0), Err(GrayscopeError::IllegalArgument(_))));
    assert!( matches!( compute_histogram( &seq, 257), Err(GrayscopeError::IllegalArgument(_))));
}

#[test]
fn test_compute_statistics() {
    let grid = Grid::from_raw( 3, 2, vec![0, 10, 10, 20, 20, 20]).unwrap();
    let stats = compute_statistics( &grid).unwrap();
    let hist = stats.histogram.as_ref().unwrap();

    assert_eq!( (stats.min, stats.max), (0, 20));
    assert!( (stats.mean - 80.0/6.0).abs() < 1e-12);
    assert_eq!( hist.len(), 256);
    assert_eq!( (hist[0], hist[10], hist[20]), (1, 2, 3));
}

#[test]
fn test_normalize_to_range() {
    let norm = normalize_to_range( &[2u32, 4, 6], 0.0, 100.0).unwrap();
    assert_eq!( norm, vec![0.0, 50.0, 100.0]);

    let norm = normalize_to_range( &[10u8, 20], -10.0, 10.0).unwrap();
    assert_eq!( norm, vec![-10.0, 10.0]);
}

#[test]
fn test_normalize_constant() {
    // constant input maps to target_min (unlike the 127 sentinel of contrast stretching)
    let norm = normalize_to_range( &[7u32, 7, 7, 7], 5.0, 350.0).unwrap();
    assert_eq!( norm, vec![5.0; 4]);
}

#[test]
fn test_normalize_empty() {
    let res = normalize_to_range::<u32>( &[], 0.0, 1.0);
    assert!( matches!( res, Err(GrayscopeError::EmptyInput(_))));
}
