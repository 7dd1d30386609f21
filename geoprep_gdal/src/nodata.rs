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

//! no-data detection, counting and interpolation fill.
//!
//! Detection and counting use two different equality policies on purpose: `has_nodata` by default
//! compares in single precision (rasters are mostly float32 sourced) whereas the post-fill recount
//! compares exact doubles. Both are configurable through [`GeoprepConfig`].

use std::{ffi::c_int, fmt, ptr::null_mut, str::FromStr};
use gdal::Dataset;
use gdal::raster::RasterBand;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{checked_band, ok_ce_none};
use crate::config::GeoprepConfig;
use crate::errors::{Result, invalid_input};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum NoDataMatch {
    /// cast both values to f32 before comparing
    Float32,
    /// f64 equality
    Exact,
}

impl NoDataMatch {
    /// a NaN sentinel matches NaN cells under both policies
    #[inline]
    pub fn matches (&self, v: f64, nodata: f64) -> bool {
        if nodata.is_nan() {
            v.is_nan()
        } else {
            match self {
                NoDataMatch::Float32 => (v as f32) == (nodata as f32),
                NoDataMatch::Exact => v == nodata
            }
        }
    }
}

impl FromStr for NoDataMatch {
    type Err = String;

    fn from_str (s: &str) -> std::result::Result<Self,Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "float32" | "f32" => Ok(NoDataMatch::Float32),
            "exact" | "f64" => Ok(NoDataMatch::Exact),
            _ => Err( format!("unknown no-data match policy: {s} (expected float32 or exact)"))
        }
    }
}

impl fmt::Display for NoDataMatch {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataMatch::Float32 => write!(f, "float32"),
            NoDataMatch::Exact => write!(f, "exact"),
        }
    }
}

/// the declared no-data value of a band or `default` if it has none
pub fn band_nodata_or_default (band: &RasterBand, default: f64) -> f64 {
    band.no_data_value().unwrap_or(default)
}

/// does band `band_index` (1-based) contain any cell equal to its no-data value, using the
/// `scan_match` policy of the config
pub fn has_nodata (ds: &Dataset, band_index: usize, cfg: &GeoprepConfig) -> Result<bool> {
    has_nodata_with( ds, band_index, cfg.default_nodata, cfg.scan_match)
}

/// row-by-row scan that stops at the first matching cell
pub fn has_nodata_with (ds: &Dataset, band_index: usize, default_nodata: f64, policy: NoDataMatch) -> Result<bool> {
    let band = checked_band( ds, band_index)?;
    let nodata = band_nodata_or_default( &band, default_nodata);
    let (w,h) = band.size();

    let mut row: Vec<f64> = vec![0.0; w];
    for y in 0..h {
        band.read_into_slice( (0, y as isize), (w,1), (w,1), &mut row, None)?;
        if row.iter().any(|v| policy.matches(*v, nodata)) {
            return Ok(true)
        }
    }
    Ok(false)
}

/// number of cells equal to the no-data value of band `band_index`
pub fn count_nodata (ds: &Dataset, band_index: usize, default_nodata: f64, policy: NoDataMatch) -> Result<usize> {
    let band = checked_band( ds, band_index)?;
    let nodata = band_nodata_or_default( &band, default_nodata);
    let (w,h) = band.size();

    let mut row: Vec<f64> = vec![0.0; w];
    let mut count = 0;
    for y in 0..h {
        band.read_into_slice( (0, y as isize), (w,1), (w,1), &mut row, None)?;
        count += row.iter().filter(|v| policy.matches(**v, nodata)).count();
    }
    Ok(count)
}

/// fill no-data holes of band `band_index` by inverse distance interpolation from valid neighbors and
/// return the number of no-data cells left afterwards (recounted with the `count_match` policy).
///
/// Holes are what the band mask reports as invalid, i.e. a band without a declared no-data value
/// is not modified. The dataset has to be writable.
pub fn fill_nodata (ds: &mut Dataset, band_index: usize, cfg: &GeoprepConfig) -> Result<usize> {
    if cfg.fill_max_search_dist <= 0.0 {
        return Err( invalid_input( format!("fill search distance has to be positive: {}", cfg.fill_max_search_dist)))
    }

    {
        let band = checked_band( ds, band_index)?;

        let res = unsafe {
            gdal_sys::GDALFillNodata( band.c_rasterband(), null_mut(), cfg.fill_max_search_dist, 0,
                                      cfg.fill_smoothing_passes as c_int, null_mut(), None, null_mut())
        };
        ok_ce_none(res)?;
    }

    let remaining = count_nodata( ds, band_index, cfg.default_nodata, cfg.count_match)?;
    debug!("filled band {}, {} no-data cells remaining", band_index, remaining);
    Ok(remaining)
}
