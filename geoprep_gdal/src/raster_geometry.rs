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

//! derive domain geometry (center, bounds, corners, UTM zone) from a raster's affine geotransform and CRS.
//! All geographic results are WGS84 lon/lat degrees.

use gdal::{Dataset, GeoTransform};
use gdal::vector::LayerAccess;
use tracing::debug;

use geoprep_common::{geo::{GeoPoint, LonLatBounds}, utm::{UtmZone, utm_zone}};
use crate::checked_band;
use crate::errors::{Result, invalid_input, srs_construction};
use crate::srs::{CrsDescriptor, CrsTransform};

/// the georeferencing part of a raster dataset
#[derive(Debug,Clone,PartialEq)]
pub struct RasterGeometry {
    pub width: usize,
    pub height: usize,
    pub geo_transform: GeoTransform,
    /// WKT, empty if the dataset has no CRS
    pub projection: String,
}

impl RasterGeometry {
    pub fn from_dataset (ds: &Dataset) -> Result<Self> {
        let (width, height) = ds.raster_size();
        let geo_transform = ds.geo_transform().map_err(|e| invalid_input( format!("dataset has no geotransform: {e}")))?;
        let projection = ds.projection();

        Ok( RasterGeometry { width, height, geo_transform, projection } )
    }

    /// the dataset CRS, failing if there is none
    pub fn crs (&self) -> Result<CrsDescriptor> {
        if self.projection.trim().is_empty() {
            Err( invalid_input("dataset has no CRS"))
        } else {
            Ok( CrsDescriptor::Wkt( self.projection.clone()))
        }
    }

    pub fn to_geo (&self, px: f64, py: f64) -> (f64,f64) {
        pixel_to_geo( &self.geo_transform, px, py)
    }

    /// center in dataset CRS coordinates. Note this uses integer pixel halves
    pub fn center_projected (&self) -> (f64,f64) {
        self.to_geo( (self.width / 2) as f64, (self.height / 2) as f64)
    }

    pub fn pixel_width (&self) -> f64 { self.geo_transform[1] }
    pub fn pixel_height (&self) -> f64 { self.geo_transform[5] }

    /// NE, SE, SW, NW corners in dataset CRS coordinates
    pub fn corners_projected (&self) -> [(f64,f64);4] {
        let w = self.width as f64;
        let h = self.height as f64;
        [ self.to_geo( w, 0.0), self.to_geo( w, h), self.to_geo( 0.0, h), self.to_geo( 0.0, 0.0) ]
    }
}

/// map pixel coordinates through an affine geotransform
#[inline]
pub fn pixel_to_geo (gt: &GeoTransform, px: f64, py: f64) -> (f64,f64) {
    ( gt[0] + px*gt[1] + py*gt[2], gt[3] + px*gt[4] + py*gt[5] )
}

/// corner coordinates in NE, SE, SW, NW order
#[derive(Debug,Clone,PartialEq)]
pub struct Corners {
    pub projected: [(f64,f64);4],
    /// lon/lat degrees
    pub geographic: [(f64,f64);4],
}

impl Corners {
    pub fn ne (&self) -> GeoPoint { self.geographic[0].into() }
    pub fn se (&self) -> GeoPoint { self.geographic[1].into() }
    pub fn sw (&self) -> GeoPoint { self.geographic[2].into() }
    pub fn nw (&self) -> GeoPoint { self.geographic[3].into() }
}

fn to_wgs84 (geom: &RasterGeometry) -> Result<CrsTransform> {
    CrsTransform::to_wgs84( &geom.crs()?)
}

/// WGS84 lon/lat of the pixel center (W/2,H/2)
pub fn raster_center (ds: &Dataset) -> Result<GeoPoint> {
    let geom = RasterGeometry::from_dataset(ds)?;
    let (x,y) = geom.center_projected();
    let (lon,lat) = to_wgs84( &geom)?.transform_point( x, y)?;
    Ok( GeoPoint::from_lon_lat( lon, lat))
}

/// WGS84 bounding box. East is the x of pixel (W,0), north and west are the y and x of pixel (0,0),
/// south is the y of pixel (0,H). The east/north and west/south pairs are each transformed as one
/// point. This only differs from the (W,0)/(0,H) corners for rotated geotransforms
pub fn raster_bounds (ds: &Dataset) -> Result<LonLatBounds> {
    let geom = RasterGeometry::from_dataset(ds)?;
    let trans = to_wgs84( &geom)?;

    let (x_w, y_n) = geom.to_geo( 0.0, 0.0);
    let (x_e, _) = geom.to_geo( geom.width as f64, 0.0);
    let (_, y_s) = geom.to_geo( 0.0, geom.height as f64);

    let (east, north) = trans.transform_point( x_e, y_n)?;
    let (west, south) = trans.transform_point( x_w, y_s)?;

    Ok( LonLatBounds::new( north, east, south, west))
}

/// corners in dataset CRS and WGS84 coordinates. Fails if any of the corners can't be transformed
pub fn raster_corners (ds: &Dataset) -> Result<Corners> {
    let geom = RasterGeometry::from_dataset(ds)?;
    let projected = geom.corners_projected();

    let mut geographic = projected;
    to_wgs84( &geom)?.transform_points( &mut geographic)?;

    Ok( Corners { projected, geographic } )
}

/// UTM zone of the dataset center
pub fn dataset_utm_zone (ds: &Dataset) -> Result<UtmZone> {
    let center = raster_center(ds)?;
    utm_zone( center.lon, center.lat).ok_or_else(|| invalid_input( format!("no UTM zone for center {center}")))
}

/// can the dataset CRS be transformed into WGS84
pub fn test_srs (ds: &Dataset) -> bool {
    let projection = ds.projection();
    if projection.trim().is_empty() {
        return false
    }

    match CrsTransform::to_wgs84( &CrsDescriptor::Wkt(projection)) {
        Ok(_) => true,
        Err(e) => { debug!("dataset CRS not usable: {e}"); false }
    }
}

pub fn is_geographic (ds: &Dataset) -> Result<bool> {
    let geom = RasterGeometry::from_dataset(ds)?;
    Ok( geom.crs()?.to_spatial_ref()?.is_geographic() )
}

/// transform a point in dataset CRS coordinates into lon/lat of the given geographic datum (e.g. "WGS84")
pub fn point_to_lon_lat (ds: &Dataset, x: f64, y: f64, datum: &str) -> Result<(f64,f64)> {
    let geom = RasterGeometry::from_dataset(ds)?;
    CrsTransform::new( &geom.crs()?, &CrsDescriptor::WellKnown(datum.to_string()))?.transform_point( x, y)
}

/// transform lon/lat of the given geographic datum into dataset CRS coordinates
pub fn point_from_lon_lat (ds: &Dataset, lon: f64, lat: f64, datum: &str) -> Result<(f64,f64)> {
    let geom = RasterGeometry::from_dataset(ds)?;
    CrsTransform::new( &CrsDescriptor::WellKnown(datum.to_string()), &geom.crs()?)?.transform_point( lon, lat)
}

/// transform a point in layer CRS coordinates into lon/lat of the given geographic datum
pub fn layer_point_to_lon_lat<L: LayerAccess> (layer: &L, x: f64, y: f64, datum: &str) -> Result<(f64,f64)> {
    let source = layer.spatial_ref().ok_or_else(|| srs_construction("layer has no spatial reference"))?;
    let target = CrsDescriptor::WellKnown(datum.to_string()).to_spatial_ref()?;
    CrsTransform::from_spatial_refs( source, target)?.transform_point( x, y)
}

/// exact (non approximated) min/max of a band
pub fn band_min_max (ds: &Dataset, band_index: usize) -> Result<(f64,f64)> {
    let band = checked_band( ds, band_index)?;
    let mm = band.compute_raster_min_max(false)?;
    Ok( (mm.min, mm.max) )
}
