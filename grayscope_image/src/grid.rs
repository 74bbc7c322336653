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

use std::ops::Deref;
use image::{GrayImage, Luma, Rgb, RgbImage};
use crate::errors::{Result, GrayscopeError};

/// the rendered output of all plot operations. Each render call allocates its own
pub type Canvas = RgbImage;

/// anything we can compute intensity statistics over
pub trait IntensitySource {
    /// all samples in row-major order
    fn samples (&self)->&[u8];
}

/// an immutable 2D array of 8-bit grayscale intensity samples
#[derive(Debug,Clone,PartialEq)]
pub struct Grid {
    img: GrayImage
}

impl Grid {
    pub fn filled (width: u32, height: u32, v: u8)->Self {
        Grid { img: GrayImage::from_pixel( width, height, Luma([v])) }
    }

    pub fn from_luma8 (img: GrayImage)->Self {
        Grid { img }
    }

    pub fn from_raw (width: u32, height: u32, data: Vec<u8>)->Result<Self> {
        let len = data.len();
        GrayImage::from_raw( width, height, data)
            .map( |img| Grid { img })
            .ok_or_else( || GrayscopeError::InvalidDimensions( format!("{} samples do not match {}x{} grid", len, width, height)))
    }

    /// create a new grid of the same dimensions by applying `f` to each sample
    pub fn map<F> (&self, f: F)->Self where F: Fn(u8)->u8 {
        let mut img = self.img.clone();
        for v in img.iter_mut() { *v = f(*v) }
        Grid { img }
    }

    pub fn width (&self)->u32 { self.img.width() }
    pub fn height (&self)->u32 { self.img.height() }
    pub fn dimensions (&self)->(u32,u32) { self.img.dimensions() }
    pub fn len (&self)->usize { self.img.as_raw().len() }
    pub fn is_empty (&self)->bool { self.len() == 0 }

    /// bounds checked sample accessor
    pub fn get (&self, x: u32, y: u32)->Result<u8> {
        if x < self.width() && y < self.height() {
            Ok( self.img.get_pixel( x, y).0[0] )
        } else {
            Err( GrayscopeError::OutOfRange( format!("pixel ({},{}) outside of {}x{} grid", x, y, self.width(), self.height())) )
        }
    }

    pub fn row (&self, y: u32)->Result<&[u8]> {
        if y < self.height() {
            let w = self.width() as usize;
            let start = y as usize * w;
            Ok( &self.img.as_raw()[start..start+w] )
        } else {
            Err( GrayscopeError::OutOfRange( format!("row {} outside of [0,{})", y, self.height())) )
        }
    }

    pub fn as_luma8 (&self)->&GrayImage { &self.img }
    pub fn into_luma8 (self)->GrayImage { self.img }

    /// gray-to-RGB copy we can draw on
    pub fn to_canvas (&self)->Canvas {
        RgbImage::from_fn( self.width(), self.height(), |x,y| {
            let v = self.img.get_pixel( x, y).0[0];
            Rgb([v,v,v])
        })
    }
}

impl IntensitySource for Grid {
    fn samples (&self)->&[u8] { self.img.as_raw().as_slice() }
}

/// an ordered, read-only list of intensity samples (a row, a column or a flattened grid)
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Sequence (Vec<u8>);

impl Sequence {
    pub fn new (values: Vec<u8>)->Self { Sequence(values) }
    pub fn as_slice (&self)->&[u8] { self.0.as_slice() }
    pub fn into_vec (self)->Vec<u8> { self.0 }
}

impl Deref for Sequence {
    type Target = [u8];
    fn deref (&self)->&[u8] { self.0.as_slice() }
}

impl From<Vec<u8>> for Sequence {
    fn from (values: Vec<u8>)->Self { Sequence(values) }
}

impl IntensitySource for Sequence {
    fn samples (&self)->&[u8] { self.0.as_slice() }
}

impl IntensitySource for [u8] {
    fn samples (&self)->&[u8] { self }
}

impl IntensitySource for Vec<u8> {
    fn samples (&self)->&[u8] { self.as_slice() }
}
