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

mod common;

use geoprep_gdal::*;
use geoprep_common::utm::Hemisphere;
use common::{mem_dataset, utm_dataset, write_projected_points, UTM_GT};

// run with "cargo test --test test_raster_geometry -- --nocapture"

#[test]
fn test_center() {
    let ds = utm_dataset();
    let geom = RasterGeometry::from_dataset( &ds).unwrap();
    assert_eq!( geom.center_projected(), (501500.0, 4498500.0));

    let center = raster_center( &ds).unwrap();
    println!("center: {center}");
    let (lon,lat) = point_to_lon_lat( &ds, 501500.0, 4498500.0, "WGS84").unwrap();
    assert!( (center.lon - lon).abs() < 1e-12 && (center.lat - lat).abs() < 1e-12);
    assert!( center.lon > -117.0 && center.lon < -116.9);

    let (x,y) = point_from_lon_lat( &ds, center.lon, center.lat, "WGS84").unwrap();
    assert!( (x - 501500.0).abs() < 1e-4 && (y - 4498500.0).abs() < 1e-4);

    // odd sizes use integer halves
    let ds = mem_dataset( 5, 3, UTM_GT, Some(32611), None, |_,_| 0.0);
    let geom = RasterGeometry::from_dataset( &ds).unwrap();
    assert_eq!( geom.center_projected(), (500060.0, 4499970.0));
}

#[test]
fn test_bounds() {
    let ds = utm_dataset();
    let b = raster_bounds( &ds).unwrap();
    println!("bounds: {b}");
    assert!( b.north > b.south);
    assert!( b.east >= b.west);
    assert!( !b.crosses_antimeridian());
    assert!( b.contains( &raster_center( &ds).unwrap()));

    // geographic raster straddling the antimeridian
    let gt = [179.0, 0.02, 0.0, 10.0, 0.0, -0.02];
    let ds = mem_dataset( 100, 50, gt, Some(4326), None, |_,_| 0.0);
    let b = raster_bounds( &ds).unwrap();
    assert!( b.north > b.south);
    assert!( (b.width_deg() - 2.0).abs() < 1e-6);
}

#[test]
fn test_rotated_bounds() {
    // north and west stay on the origin pixel even if rows and columns are skewed
    let gt = [500000.0, 30.0, 5.0, 4500000.0, 4.0, -30.0];
    let ds = mem_dataset( 100, 100, gt, Some(32611), None, |_,_| 0.0);
    let b = raster_bounds( &ds).unwrap();

    let (east, north) = point_to_lon_lat( &ds, 503000.0, 4500000.0, "WGS84").unwrap();
    let (west, south) = point_to_lon_lat( &ds, 500000.0, 4497000.0, "WGS84").unwrap();
    assert!( (b.north - north).abs() < 1e-9 && (b.east - east).abs() < 1e-9);
    assert!( (b.south - south).abs() < 1e-9 && (b.west - west).abs() < 1e-9);

    let (_, north_ne) = point_to_lon_lat( &ds, 503000.0, 4500400.0, "WGS84").unwrap();
    assert!( b.north < north_ne);
}

#[test]
fn test_corners() {
    let ds = utm_dataset();
    let c = raster_corners( &ds).unwrap();
    assert_eq!( c.projected, [(503000.0,4500000.0), (503000.0,4497000.0), (500000.0,4497000.0), (500000.0,4500000.0)]);

    assert!( c.ne().lat > c.se().lat);
    assert!( c.nw().lat > c.sw().lat);
    assert!( c.ne().lon > c.nw().lon);
    assert!( c.se().lon > c.sw().lon);
    assert!( (c.nw().lon + 117.0).abs() < 1e-9); // on the central meridian

    let b = raster_bounds( &ds).unwrap();
    assert!( (b.north - c.ne().lat).abs() < 1e-9);
    assert!( (b.east - c.ne().lon).abs() < 1e-9);
    assert!( (b.south - c.sw().lat).abs() < 1e-9);
    assert!( (b.west - c.sw().lon).abs() < 1e-9);
}

#[test]
fn test_missing_crs() {
    let ds = mem_dataset( 10, 10, UTM_GT, None, None, |_,_| 1.0);
    assert!( matches!( raster_center( &ds), Err(GeoprepError::InvalidInput(_))));
    assert!( matches!( raster_bounds( &ds), Err(GeoprepError::InvalidInput(_))));
    assert!( matches!( raster_corners( &ds), Err(GeoprepError::InvalidInput(_))));
    assert!( dataset_utm_zone( &ds).is_err());
    assert!( !test_srs( &ds));
}

#[test]
fn test_zone_and_srs() {
    let ds = utm_dataset();
    let zone = dataset_utm_zone( &ds).unwrap();
    assert_eq!( zone.number(), 11);
    assert_eq!( zone.hemisphere(), Hemisphere::North);
    assert_eq!( zone.epsg(), 32611);

    assert!( test_srs( &ds));
    assert!( !is_geographic( &ds).unwrap());

    let geo = mem_dataset( 10, 10, [-117.5, 0.1, 0.0, 41.0, 0.0, -0.1], Some(4326), None, |_,_| 0.0);
    assert!( is_geographic( &geo).unwrap());
    assert_eq!( dataset_utm_zone( &geo).unwrap().epsg(), 32611);
}

#[test]
fn test_min_max() {
    let ds = utm_dataset();
    assert_eq!( band_min_max( &ds, 1).unwrap(), (0.0, 198.0));
    assert!( matches!( band_min_max( &ds, 2), Err(GeoprepError::InvalidInput(_))));
}

#[test]
fn test_domain_info() {
    let ds = utm_dataset();
    let info = domain_info( &ds, None).unwrap();
    println!("{info}");
    assert_eq!( info.utm_zone.map(|z| z.epsg()), Some(32611));
    assert_eq!( info.timezone, None);
    assert_eq!( info.center, raster_center( &ds).unwrap());
}

#[test]
fn test_warp_to_utm() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("utm.tif");

    let src = mem_dataset( 50, 50, [-117.5, 0.02, 0.0, 41.0, 0.0, -0.02], Some(4326), Some(-9999.0), |x,y| (x*y) as f64);
    let dst = warp_to_utm( &src, &path).unwrap();

    assert!( path.is_file());
    assert_eq!( dst.raster_count(), 1);
    assert_eq!( dst.spatial_ref().unwrap().auth_code().unwrap(), 32611);
    assert!( test_srs( &dst));
    assert_eq!( dst.rasterband(1).unwrap().no_data_value(), Some(-9999.0));
}

#[test]
fn test_layer_point_to_lon_lat() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_projected_points( tmp.path());
    let ds = Dataset::open( &path).unwrap();
    let layer = ds.layer(0).unwrap();

    let (lon,lat) = layer_point_to_lon_lat( &layer, 500000.0, 4500000.0, "WGS84").unwrap();
    println!("layer point: {lon},{lat}");
    assert!( (lon + 117.0).abs() < 1e-9); // central meridian of zone 11, i.e. lon comes first
    assert!( lat > 40.0 && lat < 41.0);

    let utm = utm_dataset();
    let (lon_r,lat_r) = point_to_lon_lat( &utm, 500000.0, 4500000.0, "WGS84").unwrap();
    assert!( (lon - lon_r).abs() < 1e-9 && (lat - lat_r).abs() < 1e-9);
}
