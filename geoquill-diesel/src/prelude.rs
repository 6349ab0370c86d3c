//! Convenience re-exports for geoquill-diesel.
//!
//! ```rust,ignore
//! use geoquill_diesel::prelude::*;
//! ```

pub use crate::expression_methods::{
    GeographyExpressionMethods, GeometryExpressionMethods, RasterExpressionMethods,
};
pub use crate::functions::*;
pub use crate::types::{Geography, Geometry, Raster};
