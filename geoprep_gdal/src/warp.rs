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

use std::{ffi::{CString, c_int}, path::Path, ptr::null_mut};
use gdal::{Dataset, DriverManager, GeoTransform};
use gdal_sys::{GDALCreateGenImgProjTransformer, GDALDestroyGenImgProjTransformer, GDALGenImgProjTransform,
    GDALReprojectImage, GDALResampleAlg, GDALSuggestedWarpOutput};
use tracing::info;

use geoprep_common::{fs::ensure_dir, utm::{utm_zone_number, zone_number_to_epsg}};
use crate::ok_ce_none;
use crate::errors::{Result, invalid_input, last_gdal_error};
use crate::raster_geometry::raster_center;
use crate::srs::CrsDescriptor;

/// max error in pixels for the approximated warp transformation
const WARP_MAX_ERROR: f64 = 0.125;

fn c_string (s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| invalid_input( format!("string with interior nul: {s}")))
}

/// reproject all bands of `src` into a GeoTIFF at `path` that uses the (WGS84) UTM zone of the
/// source center. Output size and geotransform are what GDAL suggests for the source extent.
/// The returned dataset is the newly created file
pub fn warp_to_utm (src: &Dataset, path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let src_wkt = src.projection();
    if src_wkt.trim().is_empty() { return Err( invalid_input("source dataset has no CRS")) }
    let n_bands = src.raster_count();
    if n_bands < 1 { return Err( invalid_input("source dataset has no raster bands")) }

    let center = raster_center(src)?;
    let epsg = utm_zone_number( center.lon, center.lat)
        .and_then(|zone| zone_number_to_epsg( zone, center.lat))
        .ok_or_else(|| invalid_input( format!("no UTM zone for {center}")))?;
    let dst_wkt = CrsDescriptor::Epsg(epsg).to_spatial_ref()?.to_wkt()?;

    let c_src_wkt = c_string( &src_wkt)?;
    let c_dst_wkt = c_string( &dst_wkt)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        ensure_dir(dir)?;
    }
    let c_path = c_string( path.to_str().ok_or_else(|| invalid_input( format!("invalid path {path:?}")))?)?;

    let mut geo_transform: GeoTransform = [0.0; 6];
    let mut n_pixels: c_int = 0;
    let mut n_lines: c_int = 0;

    unsafe {
        let h_transform = GDALCreateGenImgProjTransformer( src.c_dataset(), c_src_wkt.as_ptr(), null_mut(), c_dst_wkt.as_ptr(), 0, 0.0, 1);
        if h_transform.is_null() { return Err( last_gdal_error()) }

        let res = GDALSuggestedWarpOutput( src.c_dataset(), Some(GDALGenImgProjTransform), h_transform,
                                           geo_transform.as_mut_ptr(), &mut n_pixels, &mut n_lines);
        GDALDestroyGenImgProjTransformer( h_transform);
        ok_ce_none(res)?;
    }

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut dst = unsafe {
        let data_type = gdal_sys::GDALGetRasterDataType( src.rasterband(1)?.c_rasterband());
        let h_ds = gdal_sys::GDALCreate( driver.c_driver(), c_path.as_ptr(), n_pixels, n_lines, n_bands as c_int, data_type, null_mut());
        if h_ds.is_null() { return Err( last_gdal_error()) }
        Dataset::from_c_dataset(h_ds)
    };
    dst.set_projection( &dst_wkt)?;
    dst.set_geo_transform( &geo_transform)?;

    for i in 1..=n_bands {
        if let Some(nd) = src.rasterband(i)?.no_data_value() {
            dst.rasterband(i)?.set_no_data_value( Some(nd))?;
        }
    }

    let res = unsafe {
        GDALReprojectImage( src.c_dataset(), c_src_wkt.as_ptr(), dst.c_dataset(), c_dst_wkt.as_ptr(),
                            GDALResampleAlg::GRA_Bilinear, 0.0, WARP_MAX_ERROR, None, null_mut(), null_mut())
    };
    ok_ce_none(res)?;

    info!("warped dataset into EPSG:{} ({} x {}) at {:?}", epsg, n_pixels, n_lines, path);
    Ok(dst)
}
