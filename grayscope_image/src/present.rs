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
use grayscope_common::{fs::{ensure_writable_dir, label_to_filestem}, info};
use crate::{errors::{Result, GrayscopeError}, grid::Canvas, io::export_image};

/// the receiving end of rendered canvases
pub trait Presenter {
    fn present (&mut self, canvas: &Canvas, label: &str)->Result<()>;
}

/// a presenter that stores each canvas as `<out_dir>/<label>.<ext>`
pub struct FilePresenter {
    out_dir: PathBuf,
    ext: String,
    presented: Vec<PathBuf>
}

impl FilePresenter {
    pub fn new<P> (out_dir: P)->Result<Self> where P: AsRef<Path> {
        let out_dir = out_dir.as_ref().to_path_buf();
        ensure_writable_dir( &out_dir).map_err( |e| GrayscopeError::WriteError( format!("{}: {}", out_dir.display(), e)))?;
        Ok( FilePresenter { out_dir, ext: "png".to_string(), presented: Vec::new() } )
    }

    pub fn with_extension (mut self, ext: &str)->Self {
        self.ext = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn path_for (&self, label: &str)->PathBuf {
        self.out_dir.join( format!("{}.{}", label_to_filestem( label), self.ext))
    }

    /// files written so far, in presentation order
    pub fn presented (&self)->&[PathBuf] {
        self.presented.as_slice()
    }
}

impl Presenter for FilePresenter {
    fn present (&mut self, canvas: &Canvas, label: &str)->Result<()> {
        let path = self.path_for( label);
        export_image( canvas, &path)?;
        info!("{} saved to {}", label, path.display());
        self.presented.push( path);
        Ok(())
    }
}
