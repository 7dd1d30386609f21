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
use serde::{Deserialize, Serialize};

/// normalize longitude degrees into [-180,180)
pub fn normalize_lon (lon_deg: f64) -> f64 {
    // rem_euclid can round up to 360 for tiny negative offsets
    let lon = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    if lon >= 180.0 { -180.0 } else { lon }
}

/// a geographic position in degrees. Note there is no CRS attached - callers have to know
/// which datum these coordinates refer to (usually WGS84)
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct GeoPoint {
    #[serde(alias="longitude", alias="x")]
    pub lon: f64,

    #[serde(alias="latitude", alias="y")]
    pub lat: f64,
}

impl GeoPoint {
    pub fn from_lon_lat (lon: f64, lat: f64) -> Self { GeoPoint { lon, lat } }

    pub fn is_finite (&self) -> bool { self.lon.is_finite() && self.lat.is_finite() }

    pub fn as_tuple (&self) -> (f64,f64) { (self.lon, self.lat) }
}

impl From<(f64,f64)> for GeoPoint {
    fn from (p: (f64,f64)) -> Self { GeoPoint { lon: p.0, lat: p.1 } }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6},{:.6})", self.lon, self.lat)
    }
}

/// geographic bounds in degrees, kept in the (north,east,south,west) order domain setup uses.
/// east can be smaller than west if the bounds cross the antimeridian
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct LonLatBounds {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

impl LonLatBounds {
    pub fn new (north: f64, east: f64, south: f64, west: f64) -> Self {
        LonLatBounds { north, east, south, west }
    }

    pub fn to_nesw_array (&self) -> [f64;4] {
        [self.north, self.east, self.south, self.west]
    }

    pub fn crosses_antimeridian (&self) -> bool {
        normalize_lon(self.east) < normalize_lon(self.west)
    }

    /// east-west extent in degrees, corrected for antimeridian wraparound
    pub fn width_deg (&self) -> f64 {
        let w = normalize_lon(self.east) - normalize_lon(self.west);
        if w < 0.0 { w + 360.0 } else { w }
    }

    pub fn height_deg (&self) -> f64 {
        self.north - self.south
    }

    pub fn center (&self) -> GeoPoint {
        let lon = normalize_lon( normalize_lon(self.west) + self.width_deg() / 2.0);
        GeoPoint { lon, lat: (self.north + self.south) / 2.0 }
    }

    pub fn contains (&self, p: &GeoPoint) -> bool {
        if p.lat < self.south || p.lat > self.north { return false }
        let dx = normalize_lon(p.lon) - normalize_lon(self.west);
        let dx = if dx < 0.0 { dx + 360.0 } else { dx };
        dx <= self.width_deg()
    }
}

impl fmt::Display for LonLatBounds {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[n:{:.6}, e:{:.6}, s:{:.6}, w:{:.6}]", self.north, self.east, self.south, self.west)
    }
}
