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

use std::ffi::CStr;
use thiserror::Error;
use gdal::errors::GdalError;

pub type Result<T> = std::result::Result<T, GeoprepError>;

#[derive(Error,Debug)]
pub enum GeoprepError {

    /// missing or empty dataset attributes, CRS descriptors or WKT geometries
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// a spatial reference or coordinate transformation could not be built
    #[error("SRS construction failed: {0}")]
    SrsConstruction(String),

    /// a coordinate transformation rejected its input (e.g. point outside projection domain)
    #[error("coordinate transformation failed: {0}")]
    Transform(String),

    /// bundled data or a target datasource could not be opened
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// error reported by a GDAL C function we call directly
    #[error("CPL error {0}")]
    CplError(String),

    #[error("time conversion failed: {0}")]
    TimeError(String),

    // pass through for GDAL errors
    #[error("GDAL error {0}")]
    GdalError( #[from] GdalError),

    // pass through for IO errors
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),
}

pub fn invalid_input<S: ToString> (msg: S) -> GeoprepError {
    GeoprepError::InvalidInput(msg.to_string())
}

pub fn srs_construction<S: ToString> (msg: S) -> GeoprepError {
    GeoprepError::SrsConstruction(msg.to_string())
}

pub fn transform_failed<S: ToString> (msg: S) -> GeoprepError {
    GeoprepError::Transform(msg.to_string())
}

pub fn resource_unavailable<S: ToString> (msg: S) -> GeoprepError {
    GeoprepError::ResourceUnavailable(msg.to_string())
}

/// turn the thread local last CPL error into a GeoprepError
pub fn last_gdal_error () -> GeoprepError {
    let msg = unsafe {
        let p_msg = gdal_sys::CPLGetLastErrorMsg();
        if p_msg.is_null() {
            String::from("unknown GDAL error")
        } else {
            String::from_utf8_lossy( CStr::from_ptr(p_msg).to_bytes()).to_string()
        }
    };
    let err_no = unsafe { gdal_sys::CPLGetLastErrorNo() };
    unsafe { gdal_sys::CPLErrorReset(); }

    GeoprepError::CplError( format!("[{err_no}] {msg}"))
}
