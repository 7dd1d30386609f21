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

use gdal::Dataset;
use gdal::vector::{Geometry, LayerAccess};
use tracing::{debug, warn};

use crate::errors::{Result, invalid_input, resource_unavailable};

/// is the WKT geometry fully contained in any feature geometry of a vector layer (`layer_name` or
/// the first layer of the datasource). Geometries are assumed to be in the same CRS.
///
/// This is a linear scan without spatial index, i.e. O(features) per call
pub fn try_contains (wkt: &str, path: &str, layer_name: Option<&str>) -> Result<bool> {
    if wkt.trim().is_empty() { return Err( invalid_input("empty WKT geometry")) }
    let geom = Geometry::from_wkt(wkt).map_err(|e| invalid_input( format!("malformed WKT '{wkt}': {e}")))?;

    let ds = Dataset::open(path).map_err(|e| resource_unavailable( format!("datasource {path}: {e}")))?;
    let mut layer = match layer_name {
        Some(name) => ds.layer_by_name(name),
        None => ds.layer(0)
    }.map_err(|e| resource_unavailable( format!("layer {:?} of {path}: {e}", layer_name)))?;

    for feature in layer.features() {
        if let Some(fg) = feature.geometry() {
            if fg.contains( &geom) {
                debug!("{wkt} contained in feature {:?} of {path}", feature.fid());
                return Ok(true)
            }
        }
    }
    Ok(false)
}

/// boolean form of [`try_contains`] that treats any error as "not contained"
pub fn contains (wkt: &str, path: &str, layer_name: Option<&str>) -> bool {
    match try_contains( wkt, path, layer_name) {
        Ok(b) => b,
        Err(e) => {
            warn!("containment test failed: {e}");
            false
        }
    }
}
