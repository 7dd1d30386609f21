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
use common::{mem_dataset, UTM_GT};

// run with "cargo test --test test_nodata -- --nocapture"

const ND: f64 = -9999.0;
const HOLES: [(usize,usize);3] = [(2,2), (5,6), (7,3)];

fn with_holes (x: usize, y: usize) -> f64 {
    if HOLES.contains( &(x,y)) { ND } else { 100.0 + (x + y) as f64 }
}

#[test]
fn test_scan_and_fill() {
    let mut ds = mem_dataset( 10, 10, UTM_GT, Some(32611), Some(ND), with_holes);
    let cfg = GeoprepConfig::default();

    assert!( has_nodata( &ds, 1, &cfg).unwrap());
    let k = count_nodata( &ds, 1, cfg.default_nodata, NoDataMatch::Exact).unwrap();
    assert_eq!( k, HOLES.len());

    let remaining = fill_nodata( &mut ds, 1, &cfg).unwrap();
    println!("{k} no-data cells before fill, {remaining} after");
    assert!( remaining <= k);
    assert_eq!( remaining, 0);
    assert!( !has_nodata( &ds, 1, &cfg).unwrap());

    let (min,max) = band_min_max( &ds, 1).unwrap();
    assert!( min >= 100.0 && max <= 118.0);
}

#[test]
fn test_no_holes() {
    let mut ds = mem_dataset( 8, 8, UTM_GT, Some(32611), Some(ND), |x,y| (x*y) as f64);
    let cfg = GeoprepConfig::default();

    assert!( !has_nodata( &ds, 1, &cfg).unwrap());
    assert_eq!( count_nodata( &ds, 1, ND, NoDataMatch::Float32).unwrap(), 0);
    assert_eq!( fill_nodata( &mut ds, 1, &cfg).unwrap(), 0);
}

#[test]
fn test_undeclared_nodata() {
    // no declared no-data value, so the configured default is used for scanning
    let ds = mem_dataset( 4, 4, UTM_GT, None, None, |x,y| if x == 3 && y == 0 { ND } else { 1.0 });
    assert!( has_nodata( &ds, 1, &GeoprepConfig::default()).unwrap());

    let cfg = GeoprepConfig { default_nodata: -1.0, ..GeoprepConfig::default() };
    assert!( !has_nodata( &ds, 1, &cfg).unwrap());
}

#[test]
fn test_match_policy() {
    let almost = ND - 1e-5;
    let ds = mem_dataset( 4, 4, UTM_GT, None, Some(ND), |x,y| if x == 1 && y == 1 { almost } else { 0.0 });

    assert!( has_nodata_with( &ds, 1, ND, NoDataMatch::Float32).unwrap());
    assert!( !has_nodata_with( &ds, 1, ND, NoDataMatch::Exact).unwrap());
    assert_eq!( count_nodata( &ds, 1, ND, NoDataMatch::Float32).unwrap(), 1);
    assert_eq!( count_nodata( &ds, 1, ND, NoDataMatch::Exact).unwrap(), 0);
}

#[test]
fn test_nan_nodata() {
    let ds = mem_dataset( 3, 3, UTM_GT, None, Some(f64::NAN), |x,_| if x == 2 { f64::NAN } else { 5.0 });
    assert!( has_nodata( &ds, 1, &GeoprepConfig::default()).unwrap());
    assert_eq!( count_nodata( &ds, 1, ND, NoDataMatch::Exact).unwrap(), 3);
}

#[test]
fn test_invalid_band() {
    let mut ds = mem_dataset( 3, 3, UTM_GT, None, Some(ND), |_,_| 0.0);
    let cfg = GeoprepConfig::default();
    assert!( matches!( has_nodata( &ds, 2, &cfg), Err(GeoprepError::InvalidInput(_))));
    assert!( matches!( fill_nodata( &mut ds, 0, &cfg), Err(GeoprepError::InvalidInput(_))));

    let cfg = GeoprepConfig { fill_max_search_dist: 0.0, ..GeoprepConfig::default() };
    assert!( matches!( fill_nodata( &mut ds, 1, &cfg), Err(GeoprepError::InvalidInput(_))));
}
