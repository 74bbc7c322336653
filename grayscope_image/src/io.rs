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
use grayscope_common::{fs::ensure_parent_dir, debug};
use crate::{errors::{Result, GrayscopeError}, grid::{Canvas, Grid}};

/// decode any raster format supported by the `image` crate and convert it into an 8-bit grayscale grid
pub fn load_grayscale_grid<P> (path: P)->Result<Grid> where P: AsRef<Path> {
    let path = path.as_ref();
    let img = image::open( path).map_err( |e| GrayscopeError::LoadError( format!("{}: {}", path.display(), e)))?;
    let grid = Grid::from_luma8( img.to_luma8());

    debug!("loaded {} as {}x{} grid", path.display(), grid.width(), grid.height());
    Ok( grid )
}

/// something we can persist as a raster image file. The file format is derived from the path extension
pub trait ExportImage {
    fn export_image (&self, path: &Path)->Result<()>;
}

impl ExportImage for Canvas {
    fn export_image (&self, path: &Path)->Result<()> {
        prepare_output( path)?;
        self.save( path).map_err( |e| write_error( path, e))
    }
}

impl ExportImage for Grid {
    fn export_image (&self, path: &Path)->Result<()> {
        prepare_output( path)?;
        self.as_luma8().save( path).map_err( |e| write_error( path, e))
    }
}

pub fn export_image<I,P> (img: &I, path: P)->Result<()> where I: ExportImage + ?Sized, P: AsRef<Path> {
    img.export_image( path.as_ref())
}

fn prepare_output (path: &Path)->Result<()> {
    ensure_parent_dir( path).map_err( |e| write_error( path, e))
}

fn write_error (path: &Path, e: impl std::fmt::Display)->GrayscopeError {
    GrayscopeError::WriteError( format!("{}: {}", path.display(), e))
}
