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

//! timezone lookup by point-in-polygon search on a world timezone layer.
//!
//! Points that fall on polygon boundaries or into gaps between simplified polygons (coast lines,
//! antimeridian) do not match any feature. We therefore retry with buffered points of increasing
//! radius until either a feature matches or we run out of attempts.

use std::path::Path;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use gdal::Dataset;
use gdal::vector::{Geometry, LayerAccess};
use tracing::{debug, warn};

use geoprep_common::fs::find_data_file;
use crate::config::GeoprepConfig;
use crate::errors::{GeoprepError, Result, invalid_input, resource_unavailable};
use crate::srs::{CrsDescriptor, CrsTransform};

/// format of the UTC time stamps we convert into local times
pub const ISO_BASIC_FORMAT: &str = "%Y%m%dT%H%M%S";

/// where and how to look up timezone polygons
#[derive(Debug,Clone)]
pub struct TimezoneDb {
    /// GDAL path of the vector datasource (can be a /vsizip/ path)
    pub path: String,
    pub name_field: usize,
    pub max_tries: usize,
    pub buffer_step: f64,
    pub buffer_segments: u32,
}

/// a successful lookup. `attempt` is 0 if the point itself matched, `n` if it took a buffer
/// of `n * buffer_step` degrees
#[derive(Debug,Clone,PartialEq)]
pub struct TimezoneMatch {
    pub name: String,
    pub attempt: usize,
}

impl TimezoneDb {
    /// locate the zipped timezone shapefile. `tz_archive` can be a path or the name of a file in
    /// one of the data directories
    pub fn from_config (cfg: &GeoprepConfig) -> Result<Self> {
        let archive = Path::new( &cfg.tz_archive);
        let archive = if archive.is_file() {
            archive.to_path_buf()
        } else {
            find_data_file( &cfg.tz_archive).ok_or_else(|| resource_unavailable( format!("timezone archive {} not found", cfg.tz_archive)))?
        };

        let path = format!("/vsizip/{}/{}", archive.display(), cfg.tz_layer_path);
        Ok( Self::with_path( path, cfg) )
    }

    /// use a (not archived) vector datasource with the lookup parameters of `cfg`
    pub fn with_path (path: impl ToString, cfg: &GeoprepConfig) -> Self {
        TimezoneDb {
            path: path.to_string(),
            name_field: cfg.tz_name_field,
            max_tries: cfg.tz_max_tries,
            buffer_step: cfg.tz_buffer_step,
            buffer_segments: cfg.tz_buffer_segments,
        }
    }

    /// find the timezone for point (x,y), which is in WGS84 lon/lat unless a `source` CRS is given.
    /// Returns `Ok(None)` if no attempt matched a feature
    pub fn resolve_detailed (&self, x: f64, y: f64, source: Option<&CrsDescriptor>) -> Result<Option<TimezoneMatch>> {
        let (lon, lat) = match source {
            Some(crs) => CrsTransform::to_wgs84(crs)?.transform_point( x, y)?,
            None => (x, y)
        };
        if !(lon.is_finite() && lat.is_finite()) {
            return Err( invalid_input( format!("invalid timezone query point {lon},{lat}")))
        }

        let point = Geometry::from_wkt( &format!("POINT ({lon} {lat})"))?;

        let ds = Dataset::open( &self.path).map_err(|e| {
            debug!("failed to open timezone datasource {}: {}", self.path, e);
            resource_unavailable( format!("timezone datasource {}: {}", self.path, e))
        })?;
        let mut layer = ds.layer(0).map_err(|e| resource_unavailable( format!("no timezone layer in {}: {}", self.path, e)))?;

        for attempt in 0..self.max_tries {
            let filter = if attempt == 0 {
                point.clone()
            } else {
                point.buffer( self.buffer_step * attempt as f64, self.buffer_segments)?
            };
            layer.set_spatial_filter( &filter);

            let name = match layer.features().next() {
                Some(feature) => Some( feature.field_as_string( self.name_field)?.unwrap_or_default()),
                None => None
            };
            debug!("timezone lookup for {lon},{lat} attempt {attempt}: {:?}", name);

            if let Some(name) = name {
                return Ok( Some( TimezoneMatch { name, attempt }))
            }
        }

        warn!("no timezone found for {lon},{lat} after {} attempts", self.max_tries);
        Ok(None)
    }

    pub fn resolve (&self, x: f64, y: f64, source: Option<&CrsDescriptor>) -> Result<Option<String>> {
        Ok( self.resolve_detailed( x, y, source)?.map(|m| m.name) )
    }

    /// timezone name or an empty string if it could not be determined for whatever reason
    pub fn fetch (&self, x: f64, y: f64, source: Option<&CrsDescriptor>) -> String {
        match self.resolve( x, y, source) {
            Ok(Some(name)) => name,
            Ok(None) => String::new(),
            Err(e) => {
                warn!("timezone lookup for {x},{y} failed: {e}");
                String::new()
            }
        }
    }
}

/// convert UTC time stamps given in ISO basic format ("20250817T143000") into local times
/// of the timezone with the given IANA name
pub fn to_local_times<S: AsRef<str>> (stamps: &[S], tz_name: &str) -> Result<Vec<DateTime<Tz>>> {
    let tz: Tz = tz_name.parse().map_err(|_| GeoprepError::TimeError( format!("unknown timezone '{tz_name}'")))?;

    stamps.iter().map(|s| {
        let s = s.as_ref();
        let naive = NaiveDateTime::parse_from_str( s, ISO_BASIC_FORMAT)
            .map_err(|e| GeoprepError::TimeError( format!("invalid time stamp '{s}': {e}")))?;
        Ok( Utc.from_utc_datetime( &naive).with_timezone( &tz) )
    }).collect()
}
