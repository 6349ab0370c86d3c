#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geoquill-sql`.

pub mod compiler;
pub mod ddl;
pub mod error;
pub mod expr;
pub mod prelude;
pub mod schema;
pub mod statement;
pub mod value;

pub use compiler::Compiled;
pub use error::{Result, SqlError};
pub use expr::{arg, func, Expr};
pub use schema::{Column, ColumnType, Table};
pub use statement::{DerivedTable, Insert, Select};
pub use value::Value;
