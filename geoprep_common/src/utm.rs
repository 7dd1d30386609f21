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

//! UTM zone resolution.
//!
//! There are two numbering schemes in use by domain setup code: the EPSG code of the
//! WGS84 / UTM projection (32600 + zone for the northern, 32700 + zone for the southern
//! hemisphere) and the plain zone number 1..60. The two legacy resolvers also differ in
//! how they treat the Norway and Svalbard exceptions, which is why both are kept as
//! separate functions. New code should use [`utm_zone`], which returns a [`UtmZone`] that
//! can be converted into either scheme.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::{floor, geo::normalize_lon};

pub const EPSG_UTM_NORTH_BASE: u32 = 32600;
pub const EPSG_UTM_SOUTH_BASE: u32 = 32700;

#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq,Eq,Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// latitude 0 counts as north
    pub fn for_lat (lat_deg: f64) -> Self {
        if lat_deg < 0.0 { Hemisphere::South } else { Hemisphere::North }
    }

    pub fn epsg_base (&self) -> u32 {
        match self {
            Hemisphere::North => EPSG_UTM_NORTH_BASE,
            Hemisphere::South => EPSG_UTM_SOUTH_BASE,
        }
    }
}

/// a UTM zone number in 1..=60 plus the hemisphere
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq,Eq,Hash)]
pub struct UtmZone {
    number: u32,
    hemisphere: Hemisphere,
}

impl UtmZone {
    pub fn new (number: u32, hemisphere: Hemisphere) -> Option<Self> {
        if number >= 1 && number <= 60 { Some( UtmZone { number, hemisphere }) } else { None }
    }

    /// parse a WGS84 / UTM EPSG code (32601..=32660, 32701..=32760)
    pub fn from_epsg (epsg: u32) -> Option<Self> {
        match epsg {
            32601..=32660 => Some( UtmZone { number: epsg - EPSG_UTM_NORTH_BASE, hemisphere: Hemisphere::North }),
            32701..=32760 => Some( UtmZone { number: epsg - EPSG_UTM_SOUTH_BASE, hemisphere: Hemisphere::South }),
            _ => None
        }
    }

    pub fn number (&self) -> u32 { self.number }
    pub fn hemisphere (&self) -> Hemisphere { self.hemisphere }
    pub fn is_north (&self) -> bool { self.hemisphere == Hemisphere::North }

    /// the EPSG code of the respective WGS84 / UTM projection
    pub fn epsg (&self) -> u32 { self.hemisphere.epsg_base() + self.number }

    pub fn central_meridian (&self) -> f64 { -180.0 + (self.number as f64)*6.0 - 3.0 }
}

impl fmt::Display for UtmZone {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, if self.is_north() {'N'} else {'S'})
    }
}

/// get the UTM zone for a given lon/lat (degrees). Returns None for non-finite or out of range latitudes.
///
/// The longitude is normalized into [-180,180). Both -180 and 180 are put into zone 60. The regular
/// 6 degree zones are overridden for the south-west coast of Norway (zone 32 for lat [56,64), lon [3,12))
/// and for Svalbard (lat [72,84): zones 31,33,35,37 for lon [0,9),[9,21),[21,33),[33,42))
pub fn utm_zone (lon_deg: f64, lat_deg: f64) -> Option<UtmZone> {
    if !lon_deg.is_finite() || !lat_deg.is_finite() || lat_deg < -90.0 || lat_deg > 90.0 { return None }

    let number = zone_number_with_exceptions( normalize_lon(lon_deg), lat_deg);
    Some( UtmZone { number, hemisphere: Hemisphere::for_lat(lat_deg) } )
}

fn zone_number_with_exceptions (lon: f64, lat: f64) -> u32 {
    if lon == -180.0 { // that is 180 before normalization
        return 60
    }

    if lat >= 56.0 && lat < 64.0 && lon >= 3.0 && lon < 12.0 {
        return 32
    }

    if lat >= 72.0 && lat < 84.0 {
        if lon >= 0.0 && lon < 9.0 { return 31 }
        if lon >= 9.0 && lon < 21.0 { return 33 }
        if lon >= 21.0 && lon < 33.0 { return 35 }
        if lon >= 33.0 && lon < 42.0 { return 37 }
    }

    ((floor( (lon + 180.0) / 6.0) as u32) + 1).clamp(1, 60)
}

/// the EPSG code form of the UTM zone (e.g. 32612), suitable for `SpatialRef::from_epsg(..)`.
/// This follows the same rules as [`utm_zone`]. Non-finite input yields the zone 60 code.
pub fn utm_zone_epsg (lon_deg: f64, lat_deg: f64) -> u32 {
    let lon = if lon_deg.is_finite() { normalize_lon(lon_deg) } else { -180.0 };
    Hemisphere::for_lat(lat_deg).epsg_base() + zone_number_with_exceptions( lon, lat_deg)
}

/// the plain zone number form (1..=60) with its own, narrower Norway/Svalbard exception table.
/// Returns None if the longitude is outside of [-180,360).
///
/// Note this does not agree with [`utm_zone`] for some points around the exception areas, e.g.
/// (lon 2.5, lat 58) is 32 here and 31 there, (lon 35, lat 75) is 36 here and 37 there, and
/// (lon 7, lat 71.5) is 31 here and 32 there. Do not mix both within one domain.
pub fn utm_zone_number (lon_deg: f64, lat_deg: f64) -> Option<u32> {
    if !lon_deg.is_finite() || !lat_deg.is_finite() || lon_deg < -180.0 || lon_deg >= 360.0 { return None }

    // handle special cases (Svalbard/Norway)
    if lat_deg > 55.0 && lat_deg < 64.0 && lon_deg > 2.0 && lon_deg < 6.0 {
        return Some(32)
    }

    if lat_deg > 71.0 {
        if lon_deg >= 6.0 && lon_deg < 9.0 {
            return Some(31)
        }
        if (lon_deg >= 9.0 && lon_deg < 12.0) || (lon_deg >= 18.0 && lon_deg < 21.0) {
            return Some(33)
        }
        if (lon_deg >= 21.0 && lon_deg < 24.0) || (lon_deg >= 30.0 && lon_deg < 33.0) {
            return Some(35)
        }
    }

    let lon = if lon_deg > 180.0 { normalize_lon(lon_deg) } else { lon_deg };
    Some( (((lon + 180.0) / 6.0).trunc() as u32 % 60) + 1 )
}

/// convert a plain zone number into the EPSG form for the hemisphere of the given latitude
pub fn zone_number_to_epsg (zone: u32, lat_deg: f64) -> Option<u32> {
    UtmZone::new( zone, Hemisphere::for_lat(lat_deg)).map(|z| z.epsg())
}

/// convert an EPSG form into the plain zone number
pub fn epsg_to_zone_number (epsg: u32) -> Option<u32> {
    UtmZone::from_epsg(epsg).map(|z| z.number())
}
