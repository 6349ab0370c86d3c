#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geoquill-core`.

pub mod catalog;
pub mod elements;
pub mod error;
pub mod ewkb;
pub mod types;

pub use error::{GeoQuillError, Result};
pub use types::{Geography, Geometry, Raster, SpatialType};
