//! Convenience re-exports for geoquill-sql.
//!
//! ```rust,ignore
//! use geoquill_sql::prelude::*;
//! ```

pub use crate::compiler::Compiled;
pub use crate::ddl::{CreateTable, DropTable};
pub use crate::error::SqlError;
pub use crate::expr::{arg, func, Expr};
pub use crate::schema::{Column, ColumnType, Table};
pub use crate::statement::{DerivedTable, Insert, Select};
pub use crate::value::Value;

pub use geoquill_core::elements::{RasterElement, WkbElement, WktElement};
pub use geoquill_core::types::{Geography, Geometry, GeometryTypeName, Raster, SpatialType};
