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

use geoprep_common::approx_eq;
use geoprep_gdal::{CrsDescriptor, CrsTransform, GeoprepError, transform_point};

// run with "cargo test --test test_srs -- --nocapture"

#[test]
fn test_round_trip() {
    let utm = CrsDescriptor::Epsg(32611);
    let to_utm = CrsTransform::from_wgs84( &utm).unwrap();
    let to_geo = to_utm.inverse().unwrap();

    for (lon,lat) in [(-117.0, 40.0), (-116.2, 43.6), (-119.9, 35.1)] {
        let (x,y) = to_utm.transform_point( lon, lat).unwrap();
        let (lon1,lat1) = to_geo.transform_point( x, y).unwrap();
        println!("({lon},{lat}) -> ({x:.3},{y:.3}) -> ({lon1},{lat1})");
        assert!( approx_eq( lon, lon1, 1e-6));
        assert!( approx_eq( lat, lat1, 1e-6));
    }
}

#[test]
fn test_axis_order() {
    // EPSG:4326 is lat,lon in authority order - we always want lon,lat
    let (x,y) = transform_point( &CrsDescriptor::Epsg(4326), &CrsDescriptor::Epsg(32611), -117.0, 40.0).unwrap();
    assert!( (x - 500000.0).abs() < 1e-3, "central meridian easting expected, got {x}");
    assert!( y > 4_400_000.0 && y < 4_500_000.0);

    let (lon,lat) = transform_point( &CrsDescriptor::Epsg(32611), &"EPSG:4326".into(), 500000.0, 4_428_000.0).unwrap();
    assert!( (lon + 117.0).abs() < 1e-9);
    assert!( lat > 39.9 && lat < 40.1);
}

#[test]
fn test_wkt_source() {
    let wkt = common::wkt_of_epsg(32611);
    let trans = CrsTransform::to_wgs84( &CrsDescriptor::Wkt(wkt)).unwrap();
    let (lon,lat) = trans.transform_point( 501500.0, 4498500.0).unwrap();
    assert!( lon > -117.0 && lon < -116.9);
    assert!( lat > 40.5 && lat < 40.7);

    let mut pts = [(500000.0, 4500000.0), (503000.0, 4497000.0)];
    trans.transform_points( &mut pts).unwrap();
    assert!( (pts[0].0 + 117.0).abs() < 1e-9);
    assert!( pts[1].0 > pts[0].0 && pts[1].1 < pts[0].1);
}

#[test]
fn test_construction_failures() {
    assert!( matches!( CrsTransform::to_wgs84( &CrsDescriptor::Wkt("".into())), Err(GeoprepError::InvalidInput(_))));
    assert!( matches!( CrsTransform::to_wgs84( &CrsDescriptor::Wkt("PROJCS[garbage".into())), Err(GeoprepError::SrsConstruction(_))));
    assert!( matches!( CrsTransform::to_wgs84( &CrsDescriptor::Epsg(999999)), Err(GeoprepError::SrsConstruction(_))));
    assert!( matches!( CrsTransform::to_wgs84( &CrsDescriptor::Epsg(0)), Err(GeoprepError::InvalidInput(_))));
}

#[test]
fn test_transform_failure() {
    let to_utm = CrsTransform::from_wgs84( &CrsDescriptor::Epsg(32611)).unwrap();
    assert!( to_utm.transform_point( f64::NAN, 40.0).is_err());

    let mut xs = [1.0, 2.0];
    let mut ys = [1.0];
    assert!( matches!( to_utm.transform_coords( &mut xs, &mut ys), Err(GeoprepError::InvalidInput(_))));
}
