//! SQL expression tree and registry-driven spatial function dispatch.

use geoquill_core::catalog::{self, FunctionSpec, ReturnKind};
use geoquill_core::types::SpatialType;

use crate::error::{Result, SqlError};
use crate::schema::ColumnType;
use crate::statement::Select;
use crate::value::Value;

/// Where a column reference comes from: a base table or a derived table.
///
/// Carried on every [`ColumnRef`] so statements can reconstruct their FROM
/// list from the expressions alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table { name: String },
    Derived { alias: String, select: Box<Select> },
}

impl Source {
    pub(crate) fn table(name: String) -> Self {
        Source::Table { name }
    }

    pub(crate) fn derived(alias: String, select: Select) -> Self {
        Source::Derived {
            alias,
            select: Box::new(select),
        }
    }

    /// Name a column reference qualifies itself with.
    pub(crate) fn qualifier(&self) -> &str {
        match self {
            Source::Table { name } => name,
            Source::Derived { alias, .. } => alias,
        }
    }
}

/// Qualified reference to a column of a known type.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub(crate) qualifier: String,
    pub(crate) name: String,
    pub(crate) ty: ColumnType,
    pub(crate) source: Source,
}

impl ColumnRef {
    pub(crate) fn new(qualifier: String, name: String, ty: ColumnType, source: Source) -> Self {
        Self {
            qualifier,
            name,
            ty,
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &ColumnType {
        &self.ty
    }

    pub fn expr(self) -> Expr {
        Expr::Column(self)
    }

    /// Dispatch a registered spatial function with this column as receiver.
    pub fn apply(self, name: &str, args: Vec<Expr>) -> Result<Expr> {
        self.expr().apply(name, args)
    }

    /// Equality predicate; the bound value is wrapped per the column's type.
    pub fn eq(self, value: impl Into<Expr>) -> Expr {
        self.expr().eq(value)
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        value.expr()
    }
}

/// A dispatched spatial function call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Name as emitted in SQL (unprefixed under legacy dispatch).
    pub(crate) rendered_name: String,
    pub(crate) spec: &'static FunctionSpec,
    pub(crate) args: Vec<Expr>,
    /// Caller-supplied override for the result's spatial type.
    pub(crate) result_type: Option<SpatialType>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Bind {
        /// Base for the generated parameter key (column or function name).
        hint: Option<String>,
        /// Numbered keys (`geom_1`) for predicates and call arguments;
        /// un-numbered keys (`geom`) for INSERT assignments.
        numbered: bool,
        value: Value,
    },
    Function(FunctionCall),
    /// `(base).field` access into a composite-returning call.
    CompositeField {
        base: Box<Expr>,
        field: String,
        returns: ReturnKind,
    },
    /// Type-driven wrapper: `function(inner)`.
    Wrap {
        function: &'static str,
        inner: Box<Expr>,
    },
    Raw(String),
    Eq {
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Dispatch a registered spatial function with this expression as the
    /// first argument.
    ///
    /// Resolution is registry-driven and fails closed: a name the registry
    /// does not know is an [`SqlError::UnknownFunction`], which is what makes
    /// `geom.apply("Buffer", …)` invalid while `geom.apply("ST_Buffer", …)`
    /// is valid. When the receiver column was built with
    /// `use_st_prefix = false`, a legacy unprefixed name resolves through its
    /// `ST_`-prefixed registry entry and is emitted as given.
    pub fn apply(self, name: &str, args: Vec<Expr>) -> Result<Expr> {
        let spec = match catalog::lookup(name) {
            Some(spec) => spec,
            None if !self.use_st_prefix() => {
                let prefixed = format!("ST_{name}");
                catalog::lookup(&prefixed)
                    .ok_or_else(|| SqlError::UnknownFunction(name.to_string()))?
            }
            None => return Err(SqlError::UnknownFunction(name.to_string())),
        };

        let got = args.len() + 1;
        if got < usize::from(spec.min_args) || got > usize::from(spec.max_args) {
            return Err(SqlError::WrongArgumentCount {
                name: spec.name,
                min: spec.min_args,
                max: spec.max_args,
                got,
            });
        }

        let mut call_args = Vec::with_capacity(got);
        call_args.push(self);
        call_args.extend(args.into_iter().map(|arg| arg.with_hint(name)));

        Ok(Expr::Function(FunctionCall {
            rendered_name: name.to_string(),
            spec,
            args: call_args,
            result_type: None,
        }))
    }

    /// Override the spatial type of a dispatched call's result, changing the
    /// serializer wrapped around it on selection. No-op on other expressions.
    pub fn with_type(mut self, ty: impl Into<SpatialType>) -> Expr {
        if let Expr::Function(call) = &mut self {
            call.result_type = Some(ty.into());
        }
        self
    }

    /// Access a named sub-field of a composite-returning call.
    pub fn field(self, field: &str) -> Result<Expr> {
        let Expr::Function(call) = &self else {
            return Err(SqlError::NotComposite);
        };
        let ReturnKind::Composite(fields) = call.spec.returns else {
            return Err(SqlError::NotComposite);
        };
        let matched = fields
            .iter()
            .find(|candidate| candidate.name == field)
            .ok_or_else(|| SqlError::UnknownField {
                function: call.rendered_name.clone(),
                field: field.to_string(),
            })?;
        let returns = matched.returns;
        Ok(Expr::CompositeField {
            base: Box::new(self),
            field: field.to_string(),
            returns,
        })
    }

    /// Equality predicate. A bare bound value is named after the receiving
    /// column and wrapped in the column type's from-text constructor.
    pub fn eq(self, value: impl Into<Expr>) -> Expr {
        let mut right = value.into();
        if let (Expr::Column(column), Expr::Bind { hint, .. }) = (&self, &mut right) {
            if hint.is_none() {
                *hint = Some(column.name.clone());
            }
        }
        let right = match &self {
            Expr::Column(column) => bind_wrap(&column.ty, right),
            _ => right,
        };
        Expr::Eq {
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Client serializer to wrap around this expression when it is delivered
    /// to the result, decided by its spatial type.
    pub(crate) fn result_wrap_function(&self) -> Option<&'static str> {
        match self {
            Expr::Column(column) => column
                .ty
                .spatial()
                .and_then(SpatialType::column_function),
            Expr::Function(call) => match &call.result_type {
                Some(ty) => ty.column_function(),
                None => kind_wrap(call.spec.returns),
            },
            Expr::CompositeField { returns, .. } => kind_wrap(*returns),
            _ => None,
        }
    }

    fn use_st_prefix(&self) -> bool {
        match self {
            Expr::Column(column) => column
                .ty
                .spatial()
                .map(SpatialType::use_st_prefix)
                .unwrap_or(true),
            _ => true,
        }
    }

    fn with_hint(mut self, hint: &str) -> Expr {
        if let Expr::Bind { hint: slot, .. } = &mut self {
            if slot.is_none() {
                *slot = Some(hint.to_string());
            }
        }
        self
    }

    /// Collect the FROM sources this expression mentions, first occurrence
    /// order, deduplicated by qualifier.
    pub(crate) fn collect_sources(&self, sources: &mut Vec<Source>) {
        match self {
            Expr::Column(column) => {
                let seen = sources
                    .iter()
                    .any(|source| source.qualifier() == column.source.qualifier());
                if !seen {
                    sources.push(column.source.clone());
                }
            }
            Expr::Function(call) => {
                for arg in &call.args {
                    arg.collect_sources(sources);
                }
            }
            Expr::CompositeField { base, .. } => base.collect_sources(sources),
            Expr::Wrap { inner, .. } => inner.collect_sources(sources),
            Expr::Eq { left, right } => {
                left.collect_sources(sources);
                right.collect_sources(sources);
            }
            Expr::Bind { .. } | Expr::Raw(_) => {}
        }
    }
}

fn kind_wrap(kind: ReturnKind) -> Option<&'static str> {
    match kind {
        ReturnKind::Geometry => Some("ST_AsEWKB"),
        ReturnKind::Geography => Some("ST_AsBinary"),
        _ => None,
    }
}

/// Wrap a bound value in the type's from-text constructor (pass-through for
/// raster and plain columns).
pub(crate) fn bind_wrap(ty: &ColumnType, expr: Expr) -> Expr {
    match ty.spatial().and_then(SpatialType::bind_function) {
        Some(function) => Expr::Wrap {
            function,
            inner: Box::new(expr),
        },
        None => expr,
    }
}

/// A bound-value argument for function dispatch.
pub fn arg(value: impl Into<Value>) -> Expr {
    Expr::Bind {
        hint: None,
        numbered: true,
        value: value.into(),
    }
}

/// Dispatch a registered spatial function without a receiver column, e.g.
/// `func("ST_Dump", vec![geom.expr()])`.
pub fn func(name: &str, args: Vec<Expr>) -> Result<Expr> {
    let spec =
        catalog::lookup(name).ok_or_else(|| SqlError::UnknownFunction(name.to_string()))?;
    let got = args.len();
    if got < usize::from(spec.min_args) || got > usize::from(spec.max_args) {
        return Err(SqlError::WrongArgumentCount {
            name: spec.name,
            min: spec.min_args,
            max: spec.max_args,
            got,
        });
    }
    let args = args
        .into_iter()
        .map(|arg| arg.with_hint(name))
        .collect();
    Ok(Expr::Function(FunctionCall {
        rendered_name: name.to_string(),
        spec,
        args,
        result_type: None,
    }))
}

macro_rules! expr_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    arg(value)
                }
            }
        )*
    };
}

expr_from_value!(&str, String, i32, i64, f64, bool, Vec<u8>, Value);
