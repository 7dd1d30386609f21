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

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use geoprep_gdal::{Dataset, DriverManager, GeoTransform, gdal::raster::Buffer, gdal::spatial_ref::SpatialRef};

pub const UTM_GT: GeoTransform = [500000.0, 30.0, 0.0, 4500000.0, 0.0, -30.0];

pub fn wkt_of_epsg (epsg: u32) -> String {
    SpatialRef::from_epsg(epsg).unwrap().to_wkt().unwrap()
}

/// create a single band f64 MEM dataset with cell values from `f(x,y)` (y being the source row)
pub fn mem_dataset<F> (w: usize, h: usize, gt: GeoTransform, epsg: Option<u32>, nodata: Option<f64>, f: F) -> Dataset
    where F: Fn(usize,usize)->f64
{
    let driver = DriverManager::get_driver_by_name("MEM").unwrap();
    let mut ds = driver.create_with_band_type::<f64,_>( "", w, h, 1).unwrap();
    ds.set_geo_transform( &gt).unwrap();
    if let Some(epsg) = epsg {
        ds.set_projection( &wkt_of_epsg(epsg)).unwrap();
    }

    let mut data: Vec<f64> = Vec::with_capacity( w*h);
    for y in 0..h {
        for x in 0..w {
            data.push( f(x,y));
        }
    }

    {
        let mut band = ds.rasterband(1).unwrap();
        if nodata.is_some() {
            band.set_no_data_value( nodata).unwrap();
        }
        let mut buf = Buffer::new( (w,h), data);
        band.write( (0,0), (w,h), &mut buf).unwrap();
    }
    ds
}

/// 100x100 UTM zone 11N dataset with 30m cells
pub fn utm_dataset () -> Dataset {
    mem_dataset( 100, 100, UTM_GT, Some(32611), None, |x,y| (x + y) as f64)
}

/// a GeoJSON layer "zones" with two timezone polygons separated by a 0.5 deg gap:
/// "Test/West" (0,0)-(10,10) and "Test/East" (10.5,0)-(20,10)
pub fn write_zones (dir: &Path) -> PathBuf {
    let path = dir.join("zones.geojson");
    let fc = serde_json::json!({
        "type": "FeatureCollection",
        "name": "zones",
        "features": [
            {
                "type": "Feature",
                "properties": { "TZID": "Test/West" },
                "geometry": { "type": "Polygon", "coordinates": [[[0.0,0.0],[10.0,0.0],[10.0,10.0],[0.0,10.0],[0.0,0.0]]] }
            },
            {
                "type": "Feature",
                "properties": { "TZID": "Test/East" },
                "geometry": { "type": "Polygon", "coordinates": [[[10.5,0.0],[20.0,0.0],[20.0,10.0],[10.5,10.0],[10.5,0.0]]] }
            }
        ]
    });
    std::fs::write( &path, serde_json::to_string_pretty(&fc).unwrap()).unwrap();
    path
}

/// write a GeoJSON point layer "sites" in UTM zone 11N coordinates (named crs member)
pub fn write_projected_points (dir: &Path) -> PathBuf {
    let path = dir.join("sites.geojson");
    let fc = serde_json::json!({
        "type": "FeatureCollection",
        "name": "sites",
        "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:EPSG::32611" } },
        "features": [
            {
                "type": "Feature",
                "properties": { "NAME": "origin" },
                "geometry": { "type": "Point", "coordinates": [500000.0, 4500000.0] }
            }
        ]
    });
    std::fs::write( &path, serde_json::to_string_pretty(&fc).unwrap()).unwrap();
    path
}
