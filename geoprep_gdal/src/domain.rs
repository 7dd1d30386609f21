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

use std::fmt;
use gdal::Dataset;
use tracing::warn;

use geoprep_common::{geo::{GeoPoint, LonLatBounds}, utm::{UtmZone, utm_zone}};
use crate::errors::Result;
use crate::raster_geometry::{Corners, raster_bounds, raster_center, raster_corners};
use crate::timezone::TimezoneDb;

/// metadata a simulation domain is set up from
#[derive(Debug,Clone,PartialEq)]
pub struct DomainInfo {
    pub center: GeoPoint,
    pub bounds: LonLatBounds,
    pub corners: Corners,
    pub utm_zone: Option<UtmZone>,
    /// None if there was no timezone db or the lookup did not find a zone
    pub timezone: Option<String>,
}

/// derive all domain metadata of a raster dataset. Geometry failures are errors, a failed timezone
/// lookup is only logged
pub fn domain_info (ds: &Dataset, tz_db: Option<&TimezoneDb>) -> Result<DomainInfo> {
    let center = raster_center(ds)?;
    let bounds = raster_bounds(ds)?;
    let corners = raster_corners(ds)?;
    let utm_zone = utm_zone( center.lon, center.lat);

    let timezone = tz_db.and_then(|db| {
        match db.resolve( center.lon, center.lat, None) {
            Ok(tz) => tz,
            Err(e) => { warn!("timezone lookup for domain center {center} failed: {e}"); None }
        }
    });

    Ok( DomainInfo { center, bounds, corners, utm_zone, timezone } )
}

impl fmt::Display for DomainInfo {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "center:   {}", self.center)?;
        writeln!(f, "bounds:   {}", self.bounds)?;
        let labels = ["NE", "SE", "SW", "NW"];
        for (i,label) in labels.iter().enumerate() {
            let (x,y) = self.corners.projected[i];
            let (lon,lat) = self.corners.geographic[i];
            writeln!(f, "{label}:       ({x:.3},{y:.3}) -> ({lon:.6},{lat:.6})")?;
        }
        match &self.utm_zone {
            Some(z) => writeln!(f, "utm zone: {} (EPSG:{})", z, z.epsg())?,
            None => writeln!(f, "utm zone: -")?
        }
        write!(f, "timezone: {}", self.timezone.as_deref().unwrap_or("-"))
    }
}
