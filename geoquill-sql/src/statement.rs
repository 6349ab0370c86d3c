//! SELECT and INSERT statement builders.
//!
//! The builders apply the type-driven hooks: bind parameters are wrapped in
//! the column type's from-text constructor, and spatial projections are
//! wrapped in the type's client serializer — once, at the outermost SELECT,
//! however deeply the column travels through derived tables.

use crate::compiler::{quote_ident, Compiled, Compiler};
use crate::error::{Result, SqlError};
use crate::expr::{bind_wrap, ColumnRef, Expr, Source};
use crate::schema::{Column, Table};
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    projection: Vec<Expr>,
    predicates: Vec<Expr>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every column of `table`.
    pub fn from_table(table: &Table) -> Self {
        let mut select = Self::new();
        for column in table.columns() {
            // col() cannot fail for names the table itself lists
            if let Ok(column_ref) = table.col(column.name()) {
                select.projection.push(column_ref.expr());
            }
        }
        select
    }

    pub fn column(mut self, expr: impl Into<Expr>) -> Self {
        self.projection.push(expr.into());
        self
    }

    /// Project a literal SQL fragment, e.g. `select.raw("foo")`.
    pub fn raw(mut self, sql: impl Into<String>) -> Self {
        self.projection.push(Expr::Raw(sql.into()));
        self
    }

    pub fn where_(mut self, predicate: Expr) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Turn this SELECT into a derived table. Projected columns keep their
    /// types, so re-selecting them re-applies the client serializer.
    pub fn alias(self, name: impl Into<String>) -> DerivedTable {
        let columns = self
            .projection
            .iter()
            .filter_map(|expr| match expr {
                Expr::Column(column) => Some(Column::new(column.name(), column.ty().clone())),
                _ => None,
            })
            .collect();
        DerivedTable {
            name: name.into(),
            columns,
            select: self,
        }
    }

    pub fn compile(&self) -> Compiled {
        let mut ctx = Compiler::new();
        let mut sql = String::new();
        self.render(&mut sql, &mut ctx, true);
        tracing::trace!(%sql, "compiled SELECT");
        ctx.finish(sql)
    }

    pub(crate) fn render(&self, out: &mut String, ctx: &mut Compiler, top_level: bool) {
        out.push_str("SELECT ");
        for (i, expr) in self.projection.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            render_projection(expr, out, ctx, top_level);
        }

        let mut sources = Vec::new();
        for expr in self.projection.iter().chain(&self.predicates) {
            expr.collect_sources(&mut sources);
        }
        if !sources.is_empty() {
            out.push_str(" FROM ");
            for (i, source) in sources.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_source(source, out, ctx);
            }
        }

        if !self.predicates.is_empty() {
            out.push_str(" WHERE ");
            for (i, predicate) in self.predicates.iter().enumerate() {
                if i > 0 {
                    out.push_str(" AND ");
                }
                predicate.render(out, ctx);
            }
        }
    }
}

fn render_projection(expr: &Expr, out: &mut String, ctx: &mut Compiler, top_level: bool) {
    match expr {
        Expr::Column(column) => match expr.result_wrap_function() {
            Some(function) => {
                if top_level {
                    out.push_str(function);
                    out.push('(');
                    expr.render(out, ctx);
                    out.push(')');
                } else {
                    expr.render(out, ctx);
                }
                out.push_str(" AS ");
                out.push_str(&quote_ident(column.name()));
            }
            None => expr.render(out, ctx),
        },
        Expr::Function(call) => {
            // the call's label claims the first counter slot, so its bound
            // arguments number from _2
            let label = ctx.next_anonymous(&call.rendered_name);
            match expr.result_wrap_function() {
                Some(function) if top_level => {
                    out.push_str(function);
                    out.push('(');
                    expr.render(out, ctx);
                    out.push(')');
                }
                _ => expr.render(out, ctx),
            }
            out.push_str(" AS ");
            out.push_str(&quote_ident(&label));
        }
        Expr::CompositeField { field, .. } => {
            match expr.result_wrap_function() {
                Some(function) if top_level => {
                    out.push_str(function);
                    out.push('(');
                    expr.render(out, ctx);
                    out.push(')');
                }
                _ => expr.render(out, ctx),
            }
            out.push_str(" AS ");
            out.push_str(&quote_ident(field));
        }
        _ => expr.render(out, ctx),
    }
}

fn render_source(source: &Source, out: &mut String, ctx: &mut Compiler) {
    match source {
        Source::Table { name } => out.push_str(&quote_ident(name)),
        Source::Derived { alias, select } => {
            out.push('(');
            select.render(out, ctx, false);
            out.push(')');
            out.push_str(" AS ");
            out.push_str(&quote_ident(alias));
        }
    }
}

/// A named subquery whose columns keep their spatial types.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTable {
    name: String,
    columns: Vec<Column>,
    select: Select,
}

impl DerivedTable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn col(&self, name: &str) -> Result<ColumnRef> {
        let column = self
            .columns
            .iter()
            .find(|column| column.name() == name)
            .ok_or_else(|| SqlError::UnknownColumn(name.to_string()))?;
        Ok(ColumnRef::new(
            self.name.clone(),
            column.name().to_string(),
            column.ty().clone(),
            Source::derived(self.name.clone(), self.select.clone()),
        ))
    }

    /// Re-select every projected column from this derived table.
    pub fn select(&self) -> Select {
        let mut select = Select::new();
        for column in &self.columns {
            if let Ok(column_ref) = self.col(column.name()) {
                select = select.column(column_ref);
            }
        }
        select
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table_name: String,
    columns: Vec<Column>,
    assignments: Vec<(String, Expr)>,
}

impl Insert {
    pub fn new(table: &Table) -> Self {
        Self {
            table_name: table.name().to_string(),
            columns: table.columns().to_vec(),
            assignments: Vec::new(),
        }
    }

    /// Assign a value to a column. The bind is keyed by the bare column name
    /// and wrapped in the column type's from-text constructor.
    pub fn value(mut self, column: &str, value: impl Into<Value>) -> Result<Self> {
        let schema_column = self
            .columns
            .iter()
            .find(|candidate| candidate.name() == column)
            .ok_or_else(|| SqlError::UnknownColumn(column.to_string()))?;
        let bind = Expr::Bind {
            hint: Some(column.to_string()),
            numbered: false,
            value: value.into(),
        };
        let expr = bind_wrap(schema_column.ty(), bind);
        self.assignments.push((column.to_string(), expr));
        Ok(self)
    }

    pub fn compile(&self) -> Compiled {
        let mut ctx = Compiler::new();
        let mut sql = String::new();
        sql.push_str("INSERT INTO ");
        sql.push_str(&quote_ident(&self.table_name));
        sql.push_str(" (");
        for (i, (column, _)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&quote_ident(column));
        }
        sql.push_str(") VALUES (");
        for (i, (_, expr)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            expr.render(&mut sql, &mut ctx);
        }
        sql.push(')');
        tracing::trace!(%sql, "compiled INSERT");
        ctx.finish(sql)
    }
}
