//! CREATE / DROP TABLE rendering, including `AddGeometryColumn` management
//! mode.
//!
//! A geometry column built with `management(true)` is not declared inline:
//! it is added after table creation through the PostGIS management function,
//! and dropped through `DropGeometryColumn` before the table goes away. The
//! tri-state `use_typmod` flag is forwarded verbatim when set.

use std::fmt::Write as _;

use geoquill_core::types::{Geometry, SpatialType};

use crate::compiler::quote_ident;
use crate::schema::{Column, Table};

fn managed_geometry(column: &Column) -> Option<&Geometry> {
    match column.ty().spatial() {
        Some(SpatialType::Geometry(descriptor)) if descriptor.management() => Some(descriptor),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CreateTable<'a> {
    table: &'a Table,
}

impl<'a> CreateTable<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// Statements in execution order: `CREATE TABLE` without the managed
    /// columns, then one `AddGeometryColumn` per managed column.
    pub fn to_statements(&self) -> Vec<String> {
        let mut column_defs = Vec::new();
        let mut managed = Vec::new();
        for column in self.table.columns() {
            match managed_geometry(column) {
                Some(descriptor) => managed.push((column, descriptor)),
                None => column_defs.push(format!(
                    "{} {}",
                    quote_ident(column.name()),
                    column.ty().col_spec()
                )),
            }
        }

        let mut statements = vec![format!(
            "CREATE TABLE {} ({})",
            quote_ident(self.table.name()),
            column_defs.join(", ")
        )];
        for (column, descriptor) in managed {
            // management without a geometry type is rejected at construction
            let Some(type_name) = descriptor.geometry_type() else {
                continue;
            };
            let mut statement = format!(
                "SELECT AddGeometryColumn('{}', '{}', {}, '{}', {}",
                self.table.name(),
                column.name(),
                descriptor.srid(),
                type_name,
                descriptor.dimension()
            );
            if let Some(use_typmod) = descriptor.use_typmod() {
                let _ = write!(statement, ", {use_typmod}");
            }
            statement.push(')');
            statements.push(statement);
        }
        statements
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DropTable<'a> {
    table: &'a Table,
}

impl<'a> DropTable<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// Statements in execution order: one `DropGeometryColumn` per managed
    /// column, then `DROP TABLE`.
    pub fn to_statements(&self) -> Vec<String> {
        let mut statements = Vec::new();
        for column in self.table.columns() {
            if managed_geometry(column).is_some() {
                statements.push(format!(
                    "SELECT DropGeometryColumn('{}', '{}')",
                    self.table.name(),
                    column.name()
                ));
            }
        }
        statements.push(format!("DROP TABLE {}", quote_ident(self.table.name())));
        statements
    }
}
