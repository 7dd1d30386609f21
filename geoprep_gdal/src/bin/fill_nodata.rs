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

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use geoprep_common::{check_cli, define_cli};
use geoprep_gdal::{GeoprepConfig, NoDataMatch, fill_nodata, has_nodata, load_config, open_update};

define_cli! { ARGS [about="fill no-data cells of a GDAL raster band in place"] =
    config: Option<String> [help="pathname of RON config file", long],
    band: usize [help="band to fill", long, default_value="1"],
    max_dist: Option<f64> [help="maximum pixel distance to fill from (default 100)", long],
    smooth: Option<u32> [help="number of smoothing iterations (default 0)", long],
    count_match: Option<NoDataMatch> [help="no-data comparison for the remaining count: float32 or exact", long],
    path: String [help="filename of dataset to fill"]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let mut cfg = match &ARGS.config {
        Some(path) => load_config(path)?,
        None => GeoprepConfig::default()
    };
    if let Some(max_dist) = ARGS.max_dist { cfg.fill_max_search_dist = max_dist }
    if let Some(smooth) = ARGS.smooth { cfg.fill_smoothing_passes = smooth }
    if let Some(count_match) = ARGS.count_match { cfg.count_match = count_match }

    let mut ds = open_update( &ARGS.path)?;

    if !has_nodata( &ds, ARGS.band, &cfg)? {
        println!("band {} of {} has no no-data cells", ARGS.band, ARGS.path);
        return Ok(())
    }

    let remaining = fill_nodata( &mut ds, ARGS.band, &cfg)?;
    println!("{remaining} no-data cells remaining in band {} of {}", ARGS.band, ARGS.path);

    Ok(())
}
