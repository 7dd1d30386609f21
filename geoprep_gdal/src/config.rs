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
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::nodata::NoDataMatch;

pub const DEFAULT_NODATA: f64 = -9999.0;

/// tunables for domain preparation. All fields have defaults so a RON config only needs to
/// list what differs, e.g. `GeoprepConfig( tz_archive: "/opt/data/tz_world.zip" )`
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct GeoprepConfig {
    /// no-data sentinel for bands that do not declare one
    pub default_nodata: f64,

    /// max search distance (in cells) when filling no-data holes
    pub fill_max_search_dist: f64,
    pub fill_smoothing_passes: u32,

    /// how `has_nodata` compares cell values with the sentinel
    pub scan_match: NoDataMatch,
    /// how the post-fill recount compares cell values with the sentinel
    pub count_match: NoDataMatch,

    /// logical name (or path) of the zipped world timezone shapefile
    pub tz_archive: String,
    /// path of the shapefile within the archive
    pub tz_layer_path: String,
    /// index of the feature field that holds the timezone name
    pub tz_name_field: usize,
    pub tz_max_tries: usize,
    /// buffer radius increment per retry in degrees
    pub tz_buffer_step: f64,
    pub tz_buffer_segments: u32,
}

impl Default for GeoprepConfig {
    fn default() -> Self {
        GeoprepConfig {
            default_nodata: DEFAULT_NODATA,
            fill_max_search_dist: 100.0,
            fill_smoothing_passes: 0,
            scan_match: NoDataMatch::Float32,
            count_match: NoDataMatch::Exact,
            tz_archive: "tz_world.zip".into(),
            tz_layer_path: "world/tz_world.shp".into(),
            tz_name_field: 0,
            tz_max_tries: 5,
            tz_buffer_step: 0.2,
            tz_buffer_segments: 30,
        }
    }
}

pub fn load_config (path: impl AsRef<Path>) -> Result<GeoprepConfig> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn load_config_str (s: &str) -> Result<GeoprepConfig> {
    Ok( ron::from_str(s)? )
}
