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

use std::path::{Path, PathBuf};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use geoprep_common::{check_cli, define_cli, strings::sanitize_name};
use geoprep_gdal::{Dataset, GeoprepConfig, TimezoneDb, domain_info, load_config, to_grid};

define_cli! { ARGS [about="show simulation domain metadata of a raster dataset"] =
    config: Option<String> [help="pathname of RON config file", long],
    no_tz: bool [help="do not look up the timezone", long],
    grid: Option<String> [help="write band as ESRI ASCII grid to this file or directory", long],
    band: usize [help="band to convert into a grid", long, default_value="1"],
    path: String [help="filename of raster dataset"]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let cfg = match &ARGS.config {
        Some(path) => load_config(path)?,
        None => GeoprepConfig::default()
    };

    let ds = Dataset::open( Path::new( &ARGS.path))?;

    let tz_db = if ARGS.no_tz { None } else { TimezoneDb::from_config( &cfg).ok() };
    let info = domain_info( &ds, tz_db.as_ref())?;
    println!("{info}");

    if let Some(grid_path) = &ARGS.grid {
        let grid = to_grid( &ds, ARGS.band, &cfg)?;
        let grid_path = ascii_grid_path( Path::new(grid_path), Path::new(&ARGS.path));
        grid.write_ascii( &grid_path)?;
        println!("grid {} x {} written to {:?}", grid.ncols, grid.nrows, grid_path);
    }

    Ok(())
}

// a directory gets a file named after the dataset
fn ascii_grid_path (grid_path: &Path, ds_path: &Path) -> PathBuf {
    if grid_path.is_dir() {
        let stem = ds_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_else(|| "grid".into());
        grid_path.join( format!("{}.asc", sanitize_name(&stem)))
    } else {
        grid_path.to_path_buf()
    }
}
