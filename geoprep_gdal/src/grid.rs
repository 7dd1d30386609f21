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

use std::{fs::File, io::{BufWriter, Write}, path::Path};
use gdal::{Dataset, GeoTransform};
use ndarray::Array2;
use tracing::debug;

use geoprep_common::fs::ensure_dir;
use crate::checked_band;
use crate::config::GeoprepConfig;
use crate::errors::Result;
use crate::nodata::band_nodata_or_default;

/// relative tolerance for considering cells square
pub const SQUARE_CELL_TOLERANCE: f64 = 1e-6;

const DEFAULT_GEO_TRANSFORM: GeoTransform = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// a dense simulation grid. Row 0 is the southern most row, i.e. `data[[0,0]]` is the
/// lower left (south-west for north-up sources) cell
#[derive(Debug,Clone,PartialEq)]
pub struct Grid {
    pub ncols: usize,
    pub nrows: usize,
    /// lower left corner x in grid CRS
    pub xll: f64,
    /// lower left corner y in grid CRS
    pub yll: f64,
    pub cell_size: f64,
    pub cell_height: f64,
    pub no_data: f64,
    pub default_value: f64,
    /// [row,col] values
    pub data: Array2<f64>,
    /// CRS of the grid as reported by the source, not validated
    pub prj: Option<String>,
}

impl Grid {
    /// a grid with square cells that is filled with `no_data`
    pub fn new (ncols: usize, nrows: usize, xll: f64, yll: f64, cell_size: f64, no_data: f64) -> Self {
        Grid {
            ncols, nrows, xll, yll, cell_size,
            cell_height: cell_size,
            no_data,
            default_value: no_data,
            data: Array2::from_elem( (nrows, ncols), no_data),
            prj: None
        }
    }

    pub fn get (&self, row: usize, col: usize) -> Option<f64> {
        self.data.get( (row,col)).copied()
    }

    pub fn set (&mut self, row: usize, col: usize, v: f64) -> bool {
        if let Some(cell) = self.data.get_mut( (row,col)) {
            *cell = v;
            true
        } else {
            false
        }
    }

    pub fn is_square_cells (&self) -> bool {
        let w = self.cell_size.abs();
        let h = self.cell_height.abs();
        (w - h).abs() <= SQUARE_CELL_TOLERANCE * w.max(h)
    }

    pub fn count_no_data (&self) -> usize {
        self.data.iter().filter(|v| **v == self.no_data).count()
    }

    /// write as ESRI ASCII grid (north row first). If the grid has a CRS it is written into
    /// a `.prj` file next to it
    pub fn write_ascii (&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            ensure_dir(dir)?;
        }
        let mut w = BufWriter::new( File::create(path)?);

        writeln!( w, "ncols        {}", self.ncols)?;
        writeln!( w, "nrows        {}", self.nrows)?;
        writeln!( w, "xllcorner    {}", self.xll)?;
        writeln!( w, "yllcorner    {}", self.yll)?;
        writeln!( w, "cellsize     {}", self.cell_size)?;
        writeln!( w, "NODATA_value {}", self.no_data)?;

        for r in (0..self.nrows).rev() {
            let mut first = true;
            for v in self.data.row(r).iter() {
                if first { first = false } else { write!( w, " ")? }
                write!( w, "{v}")?;
            }
            writeln!(w)?;
        }
        w.flush()?;

        if let Some(prj) = self.prj.as_ref().filter(|s| !s.trim().is_empty()) {
            std::fs::write( path.with_extension("prj"), prj)?;
        }
        Ok(())
    }
}

/// read band `band_index` of a dataset into a [`Grid`].
///
/// Source rows are read from the last one up, source row `i` ending up as grid row `H-1-i`. The
/// lower left corner is `(gt[0], gt[3] + H*gt[5])`. Missing georeferencing does not fail the
/// conversion: without CRS `prj` is unset, without geotransform GDAL's default (unit pixels at the
/// origin) is used
pub fn to_grid (ds: &Dataset, band_index: usize, cfg: &GeoprepConfig) -> Result<Grid> {
    let band = checked_band( ds, band_index)?;

    let (w, h) = ds.raster_size();
    let gt: GeoTransform = ds.geo_transform().unwrap_or( DEFAULT_GEO_TRANSFORM);
    let projection = ds.projection();
    let xll = gt[0];
    let yll = gt[3] + (h as f64) * gt[5];

    let no_data = band_nodata_or_default( &band, cfg.default_nodata);

    let mut grid = Grid::new( w, h, xll, yll, gt[1], no_data);
    grid.cell_height = gt[5].abs();
    if !grid.is_square_cells() {
        debug!("non-square cells {} x {} in grid conversion", gt[1], gt[5]);
    }

    let mut row: Vec<f64> = vec![0.0; w];
    for i in (0..h).rev() {
        band.read_into_slice( (0, i as isize), (w,1), (w,1), &mut row, None)?;
        let tgt = h - 1 - i;
        for (cell, v) in grid.data.row_mut(tgt).iter_mut().zip( row.iter()) {
            *cell = *v;
        }
    }

    grid.prj = if projection.trim().is_empty() { None } else { Some(projection) };
    Ok(grid)
}
