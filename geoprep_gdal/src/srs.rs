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

//! coordinate reference system descriptors and source->target coordinate transformations.
//!
//! All spatial references created here use the traditional GIS axis order (x/easting/longitude
//! first). GDAL >= 3 otherwise uses the authority order for some geographic CRS definitions
//! (e.g. EPSG:4326 is lat,lon) which silently swaps coordinates. Do not create `SpatialRef`
//! objects for transformations anywhere else.

use std::fmt;
use gdal::spatial_ref::{CoordTransform, SpatialRef};
use tracing::debug;

use crate::errors::{Result, invalid_input, srs_construction, transform_failed};

/// what we accept to describe a CRS
#[derive(Debug,Clone,PartialEq)]
pub enum CrsDescriptor {
    /// OGC well-known text (what GDAL datasets report as projection)
    Wkt(String),
    Epsg(u32),
    /// a well known geographic CRS name such as "WGS84", "NAD83" or "EPSG:4326"
    WellKnown(String),
}

impl CrsDescriptor {
    pub fn wgs84 () -> Self { CrsDescriptor::WellKnown("WGS84".into()) }

    /// interpret user input: "EPSG:<code>", a well known geographic CRS name or WKT
    pub fn parse (s: &str) -> Self {
        let s = s.trim();
        if let Some(code) = s.strip_prefix("EPSG:").or_else(|| s.strip_prefix("epsg:")) {
            if let Ok(code) = code.parse::<u32>() {
                return CrsDescriptor::Epsg(code)
            }
        }
        match s.to_ascii_uppercase().as_str() {
            "WGS84" | "WGS72" | "NAD27" | "NAD83" | "CRS84" => CrsDescriptor::WellKnown(s.to_string()),
            _ => CrsDescriptor::Wkt(s.to_string())
        }
    }

    pub fn is_empty (&self) -> bool {
        match self {
            CrsDescriptor::Wkt(s) | CrsDescriptor::WellKnown(s) => s.trim().is_empty(),
            CrsDescriptor::Epsg(code) => *code == 0
        }
    }

    /// create a SpatialRef with traditional GIS axis order.
    /// Empty descriptors are rejected - we never guess a CRS
    pub fn to_spatial_ref (&self) -> Result<SpatialRef> {
        if self.is_empty() { return Err( invalid_input("empty CRS descriptor")) }

        let srs = match self {
            CrsDescriptor::Wkt(wkt) => SpatialRef::from_wkt(wkt),
            CrsDescriptor::Epsg(code) => SpatialRef::from_epsg(*code),
            CrsDescriptor::WellKnown(name) => SpatialRef::from_definition(name),
        }.map_err(|e| {
            debug!("failed to create spatial reference from {}: {}", self, e);
            srs_construction( format!("{}: {}", self, e))
        })?;

        set_traditional_axis_order( &srs);
        Ok(srs)
    }
}

impl From<&str> for CrsDescriptor {
    fn from (s: &str) -> Self { CrsDescriptor::parse(s) }
}

impl fmt::Display for CrsDescriptor {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsDescriptor::Wkt(wkt) => {
                let head: String = wkt.chars().take(40).collect();
                if head.len() < wkt.len() { write!(f, "WKT \"{head}..\"") } else { write!(f, "WKT \"{head}\"") }
            }
            CrsDescriptor::Epsg(code) => write!(f, "EPSG:{code}"),
            CrsDescriptor::WellKnown(name) => write!(f, "{name}"),
        }
    }
}

/// force (x,y) == (lon,lat) / (easting,northing) order on a SpatialRef.
/// This is idempotent and has to be applied to source and target of each transformation
pub fn set_traditional_axis_order (srs: &SpatialRef) {
    unsafe {
        gdal_sys::OSRSetAxisMappingStrategy( srs.to_c_hsrs(), gdal_sys::OSRAxisMappingStrategy::OAMS_TRADITIONAL_GIS_ORDER);
    }
}

/// a source->target coordinate transformation. All native objects are released when this is dropped
pub struct CrsTransform {
    source: SpatialRef,
    target: SpatialRef,
    transform: CoordTransform,
}

impl CrsTransform {
    pub fn new (source: &CrsDescriptor, target: &CrsDescriptor) -> Result<Self> {
        let source = source.to_spatial_ref()?;
        let target = target.to_spatial_ref()?;
        Self::from_spatial_refs( source, target)
    }

    /// transformation from an arbitrary CRS into WGS84 lon/lat degrees
    pub fn to_wgs84 (source: &CrsDescriptor) -> Result<Self> {
        Self::new( source, &CrsDescriptor::wgs84())
    }

    /// transformation from WGS84 lon/lat degrees into an arbitrary CRS
    pub fn from_wgs84 (target: &CrsDescriptor) -> Result<Self> {
        Self::new( &CrsDescriptor::wgs84(), target)
    }

    /// note this (re)sets the axis order of the provided SpatialRefs
    pub fn from_spatial_refs (source: SpatialRef, target: SpatialRef) -> Result<Self> {
        set_traditional_axis_order( &source);
        set_traditional_axis_order( &target);

        let transform = CoordTransform::new( &source, &target).map_err(|e| {
            debug!("failed to create coordinate transformation: {}", e);
            srs_construction( format!("coordinate transformation: {}", e))
        })?;

        Ok( CrsTransform { source, target, transform } )
    }

    pub fn source (&self) -> &SpatialRef { &self.source }
    pub fn target (&self) -> &SpatialRef { &self.target }

    /// the target->source transformation
    pub fn inverse (&self) -> Result<Self> {
        Self::from_spatial_refs( self.target.clone(), self.source.clone())
    }

    pub fn transform_point (&self, x: f64, y: f64) -> Result<(f64,f64)> {
        let mut xs = [x];
        let mut ys = [y];
        self.transform_coords( &mut xs, &mut ys)?;
        Ok( (xs[0], ys[0]) )
    }

    /// transform coordinate arrays in place. Fails if any of the points cannot be transformed,
    /// in which case the array contents are unspecified
    pub fn transform_coords (&self, xs: &mut [f64], ys: &mut [f64]) -> Result<()> {
        if xs.len() != ys.len() { return Err( invalid_input("different number of x and y coordinates")) }
        let mut zs: [f64;0] = [];

        self.transform.transform_coords( xs, ys, &mut zs).map_err(|e| transform_failed( e.to_string()))?;

        if xs.iter().chain( ys.iter()).all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err( transform_failed("non-finite result"))
        }
    }

    pub fn transform_points (&self, pts: &mut [(f64,f64)]) -> Result<()> {
        let mut xs: Vec<f64> = pts.iter().map(|p| p.0).collect();
        let mut ys: Vec<f64> = pts.iter().map(|p| p.1).collect();
        self.transform_coords( &mut xs, &mut ys)?;

        for (p, (x, y)) in pts.iter_mut().zip( xs.into_iter().zip(ys)) {
            *p = (x,y);
        }
        Ok(())
    }
}

/// one-shot convenience to transform a single point
pub fn transform_point (source: &CrsDescriptor, target: &CrsDescriptor, x: f64, y: f64) -> Result<(f64,f64)> {
    CrsTransform::new( source, target)?.transform_point( x, y)
}
