//! Tables and columns as the compiler sees them.
//!
//! A [`Table`] is declarative schema metadata, not a live database object.
//! Spatial behavior — DDL typmods, bind wrapping, result wrapping — is
//! attached to the column's [`ColumnType`] and travels with every
//! [`ColumnRef`] handed out, which is what lets a derived subquery re-apply
//! the right serializer to a re-selected column.

use geoquill_core::types::{Geography, Geometry, Raster, SpatialType};

use crate::error::{Result, SqlError};
use crate::expr::{ColumnRef, Source};

/// Type of a table column: one of the spatial descriptors or a plain type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Spatial(SpatialType),
    Integer,
    BigInt,
    Double,
    Text,
    Bytes,
    Bool,
}

impl ColumnType {
    pub fn geometry(descriptor: Geometry) -> Self {
        ColumnType::Spatial(SpatialType::Geometry(descriptor))
    }

    pub fn geography(descriptor: Geography) -> Self {
        ColumnType::Spatial(SpatialType::Geography(descriptor))
    }

    pub fn raster(descriptor: Raster) -> Self {
        ColumnType::Spatial(SpatialType::Raster(descriptor))
    }

    pub fn spatial(&self) -> Option<&SpatialType> {
        match self {
            ColumnType::Spatial(spatial) => Some(spatial),
            _ => None,
        }
    }

    /// Literal DDL type string for this column type.
    pub fn col_spec(&self) -> String {
        match self {
            ColumnType::Spatial(spatial) => spatial.col_spec(),
            ColumnType::Integer => "integer".to_string(),
            ColumnType::BigInt => "bigint".to_string(),
            ColumnType::Double => "double precision".to_string(),
            ColumnType::Text => "text".to_string(),
            ColumnType::Bytes => "bytea".to_string(),
            ColumnType::Bool => "boolean".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    ty: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &ColumnType {
        &self.ty
    }
}

/// Declarative table metadata.
///
/// # Example
///
/// ```
/// use geoquill_core::types::Geometry;
/// use geoquill_sql::schema::{ColumnType, Table};
///
/// let mut table = Table::new("features");
/// table.add_column("id", ColumnType::Integer);
/// table.add_column(
///     "geom",
///     ColumnType::geometry(Geometry::builder().srid(4326).build().unwrap()),
/// );
/// assert!(table.col("geom").is_ok());
/// assert!(table.col("missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(&mut self, name: impl Into<String>, ty: ColumnType) -> &mut Self {
        self.columns.push(Column::new(name, ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Qualified reference to a column, carrying its type.
    pub fn col(&self, name: &str) -> Result<ColumnRef> {
        let column = self
            .column(name)
            .ok_or_else(|| SqlError::UnknownColumn(name.to_string()))?;
        Ok(ColumnRef::new(
            self.name.clone(),
            column.name().to_string(),
            column.ty().clone(),
            Source::table(self.name.clone()),
        ))
    }
}
