#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geoquill-diesel`.

pub mod expression_methods;
pub mod functions;
pub mod prelude;
pub mod types;

pub use expression_methods::{
    GeographyExpressionMethods, GeometryExpressionMethods, RasterExpressionMethods,
};
pub use types::{Geography, Geometry, Raster};
