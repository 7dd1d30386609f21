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

//! pure Rust building blocks for simulation domain preparation that do not depend on GDAL:
//! geographic points and bounds, UTM zone resolution, data file lookup and string helpers

pub mod macros;
pub mod geo;
pub mod utm;
pub mod fs;
pub mod strings;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn floor(x:f64) -> f64 { x.floor() }

/// float comparison with an absolute tolerance
#[inline]
pub fn approx_eq (a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
