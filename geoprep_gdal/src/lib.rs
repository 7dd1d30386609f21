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

//! simulation domain preparation from GDAL raster and vector datasets: CRS transformation,
//! raster geometry, grid conversion, no-data handling and spatial (timezone) lookup.

pub mod errors;
pub mod config;
pub mod srs;
pub mod raster_geometry;
pub mod grid;
pub mod nodata;
pub mod timezone;
pub mod contain;
pub mod domain;
pub mod warp;

use std::path::Path;
use gdal::{DatasetOptions, GdalOpenFlags, errors::CplErrType};
use gdal_sys::CPLErr;
use static_init::constructor;

// re-exported so that users don't need their own gdal dependency
pub use gdal::{self, Dataset, DriverManager, GeoTransform};
pub use gdal::raster::RasterBand;

pub use errors::{GeoprepError, Result};
pub use config::{GeoprepConfig, load_config};
pub use srs::{CrsDescriptor, CrsTransform, transform_point};
pub use raster_geometry::{RasterGeometry, Corners, raster_center, raster_bounds, raster_corners, dataset_utm_zone,
    test_srs, is_geographic, point_to_lon_lat, point_from_lon_lat, layer_point_to_lon_lat, band_min_max};
pub use grid::{Grid, to_grid};
pub use nodata::{NoDataMatch, has_nodata, has_nodata_with, count_nodata, fill_nodata};
pub use timezone::{TimezoneDb, TimezoneMatch, to_local_times};
pub use contain::{contains, try_contains};
pub use domain::{DomainInfo, domain_info};
pub use warp::warp_to_utm;

use crate::errors::{invalid_input, last_gdal_error};

#[constructor(0)]
extern "C" fn _initialize_gdal() {
    gdal::config::set_error_handler(no_error_output);
}

// errors are reported through return values, not on the console
fn no_error_output (_cpl_et: CplErrType, _ec: i32, _msg: &str) {}

pub fn ok_ce_none (res: CPLErr::Type) -> Result<()> {
    if res == CPLErr::CE_None { Ok(()) } else { Err(last_gdal_error()) }
}

/// get a raster band by its 1-based index, failing with InvalidInput if there is no such band
pub fn checked_band (ds: &Dataset, band_index: usize) -> Result<RasterBand<'_>> {
    let n = ds.raster_count();
    if band_index < 1 || band_index > n as usize {
        return Err( invalid_input( format!("no raster band {band_index} (dataset has {n})")))
    }
    Ok( ds.rasterband(band_index)? )
}

pub fn open_update<P:AsRef<Path>> (path: P) -> Result<Dataset> {
    let dso = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_UPDATE,
        allowed_drivers: None,
        open_options: None,
        sibling_files: None
    };
    Ok( Dataset::open_ex(path, dso)? )
}
