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

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use geoprep_common::{check_cli, define_cli};
use geoprep_gdal::{CrsDescriptor, GeoprepConfig, TimezoneDb, load_config, to_local_times};

define_cli! { ARGS [about="find the timezone of a point"] =
    config: Option<String> [help="pathname of RON config file", long],
    srs: Option<String> [help="CRS of the point if not WGS84 lon/lat (WKT or EPSG:<code>)", long],
    db: Option<String> [help="vector datasource to use instead of the bundled timezone archive", long],
    times: Vec<String> [help="UTC time stamps (YYYYMMDDTHHMMSS) to convert into local time", long],
    x: f64 [help="longitude or easting", allow_hyphen_values=true],
    y: f64 [help="latitude or northing", allow_hyphen_values=true]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let cfg = match &ARGS.config {
        Some(path) => load_config(path)?,
        None => GeoprepConfig::default()
    };

    let tz_db = match &ARGS.db {
        Some(path) => TimezoneDb::with_path( path, &cfg),
        None => TimezoneDb::from_config( &cfg)?
    };
    let srs = ARGS.srs.as_deref().map( CrsDescriptor::parse);

    let m = tz_db.resolve_detailed( ARGS.x, ARGS.y, srs.as_ref())?
        .ok_or_else(|| anyhow!("no timezone found for {},{}", ARGS.x, ARGS.y))?;
    println!("{} (attempt {})", m.name, m.attempt);

    if !ARGS.times.is_empty() {
        for (utc, local) in ARGS.times.iter().zip( to_local_times( &ARGS.times, &m.name)?) {
            println!("{utc} -> {}", local.to_rfc3339());
        }
    }

    Ok(())
}
