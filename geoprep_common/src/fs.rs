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

use std::env;
use std::fs::{self,ReadDir};
use std::io::{self,ErrorKind::*};
use std::path::{Path,PathBuf};

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

/// env var that can be set to override where bundled data files (e.g. the timezone archive) are looked up
pub const DATA_DIR_ENV_VAR: &str = "GEOPREP_DATA";

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// the ordered list of directories we look into for bundled data files:
/// `$GEOPREP_DATA`, `<exe-dir>/../share/geoprep`, the current dir, `./data` and `../data`
pub fn data_dir_candidates () -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    if let Ok(dir) = env::var(DATA_DIR_ENV_VAR) {
        if !dir.is_empty() { dirs.push( PathBuf::from(dir)) }
    }

    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        dirs.push( exe_dir.join("..").join("share").join("geoprep"));
    }

    if let Ok(cwd) = env::current_dir() {
        dirs.push( cwd.clone());
        dirs.push( cwd.join("data"));
        dirs.push( cwd.join("..").join("data"));
    }

    dirs
}

/// look up a bundled data file or directory by its logical name. Returns the first existing match
/// in [`data_dir_candidates`] order
pub fn find_data_file (name: &str) -> Option<PathBuf> {
    find_file_in( &data_dir_candidates(), name)
}

pub fn find_file_in (dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    if name.is_empty() { return None }

    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file() || path.is_dir())
}

/// list all files and directories below `dir` as paths relative to `dir`, depth first.
/// Directories are listed before their contents. This uses an explicit stack so that deep
/// trees do not grow the call stack
pub fn read_dir_recursive (dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() { return Err( io_error!(NotFound, "dir {:?}", dir)) }

    let mut list: Vec<PathBuf> = Vec::new();
    let mut stack: Vec<(ReadDir,PathBuf)> = vec![ (fs::read_dir(dir)?, PathBuf::new()) ];

    while let Some((entries, rel_dir)) = stack.last_mut() {
        match entries.next() {
            Some(entry) => {
                let entry = entry?;
                let rel_path = rel_dir.join( entry.file_name());
                let file_type = entry.file_type()?;
                list.push( rel_path.clone());

                if file_type.is_dir() {
                    let sub_entries = fs::read_dir( entry.path())?;
                    stack.push( (sub_entries, rel_path));
                }
            }
            None => { stack.pop(); }
        }
    }

    Ok(list)
}

/// remove `dir` and everything below it. A non-existing `dir` is not an error.
/// Entries are removed deepest first from the [`read_dir_recursive`] list, i.e. without recursion.
/// Symlinks are removed, not followed
pub fn remove_dir_tree (dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() { return Ok(()) }

    for rel_path in read_dir_recursive(dir)?.iter().rev() {
        let path = dir.join(rel_path);
        if fs::symlink_metadata(&path)?.is_dir() {
            fs::remove_dir(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    fs::remove_dir(dir)
}
