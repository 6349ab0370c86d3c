//! Statement compilation context: parameter naming, identifier quoting,
//! expression rendering.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use crate::expr::Expr;
use crate::value::Value;

/// A fully compiled statement: SQL text plus named bind parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub sql: String,
    pub params: BTreeMap<String, Value>,
}

/// Per-statement compilation state.
///
/// Anonymous labels and numbered parameter keys share one per-name counter,
/// so a dispatched `ST_Buffer` call labeled `ST_Buffer_1` hands its bound
/// argument the key `ST_Buffer_2`.
#[derive(Debug, Default)]
pub(crate) struct Compiler {
    counters: HashMap<String, u32>,
    params: BTreeMap<String, Value>,
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Next anonymous name derived from `base`: `base_1`, `base_2`, …
    pub(crate) fn next_anonymous(&mut self, base: &str) -> String {
        let counter = self.counters.entry(base.to_string()).or_insert(0);
        *counter += 1;
        format!("{base}_{counter}")
    }

    fn add_numbered_param(&mut self, base: &str, value: Value) -> String {
        let key = self.next_anonymous(base);
        self.params.insert(key.clone(), value);
        key
    }

    fn add_named_param(&mut self, name: &str, value: Value) -> String {
        self.params.insert(name.to_string(), value);
        name.to_string()
    }

    pub(crate) fn finish(self, sql: String) -> Compiled {
        Compiled {
            sql,
            params: self.params,
        }
    }
}

// Words that force quoting even when lowercase.
const RESERVED_WORDS: &[&str] = &[
    "all", "and", "any", "as", "asc", "between", "by", "case", "cast", "check", "column",
    "create", "cross", "default", "delete", "desc", "distinct", "drop", "else", "end", "except",
    "exists", "foreign", "from", "group", "having", "in", "index", "inner", "insert",
    "intersect", "into", "is", "join", "left", "like", "limit", "natural", "not", "null",
    "offset", "on", "or", "order", "outer", "primary", "references", "right", "select", "set",
    "some", "table", "then", "union", "unique", "update", "user", "using", "values", "when",
    "where", "with",
];

/// Quote an identifier unless it is a safe lowercase name.
pub(crate) fn quote_ident(name: &str) -> String {
    let safe_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    let starts_alpha = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
    if safe_chars && starts_alpha && !RESERVED_WORDS.contains(&name) {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

impl Expr {
    /// Render this expression, assigning parameter keys as binds are reached.
    pub(crate) fn render(&self, out: &mut String, ctx: &mut Compiler) {
        match self {
            Expr::Column(column) => {
                out.push_str(&quote_ident(&column.qualifier));
                out.push('.');
                out.push_str(&quote_ident(&column.name));
            }
            Expr::Bind {
                hint,
                numbered,
                value,
            } => {
                let base = hint.as_deref().unwrap_or("param");
                let key = if *numbered {
                    ctx.add_numbered_param(base, value.clone())
                } else {
                    ctx.add_named_param(base, value.clone())
                };
                let _ = write!(out, ":{key}");
            }
            Expr::Function(call) => {
                out.push_str(&call.rendered_name);
                out.push('(');
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.render(out, ctx);
                }
                out.push(')');
            }
            Expr::CompositeField { base, field, .. } => {
                out.push('(');
                base.render(out, ctx);
                out.push_str(").");
                out.push_str(field);
            }
            Expr::Wrap { function, inner } => {
                out.push_str(function);
                out.push('(');
                inner.render(out, ctx);
                out.push(')');
            }
            Expr::Raw(sql) => out.push_str(sql),
            Expr::Eq { left, right } => {
                left.render(out, ctx);
                out.push_str(" = ");
                right.render(out, ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_rules() {
        assert_eq!(quote_ident("geom"), "geom");
        assert_eq!(quote_ident("name"), "name");
        assert_eq!(quote_ident("table"), "\"table\"");
        assert_eq!(quote_ident("ST_Buffer_1"), "\"ST_Buffer_1\"");
        assert_eq!(quote_ident("1geom"), "\"1geom\"");
        assert_eq!(quote_ident("_hidden"), "_hidden");
    }

    #[test]
    fn anonymous_counters_are_per_name() {
        let mut ctx = Compiler::new();
        assert_eq!(ctx.next_anonymous("ST_Buffer"), "ST_Buffer_1");
        assert_eq!(ctx.next_anonymous("ST_Buffer"), "ST_Buffer_2");
        assert_eq!(ctx.next_anonymous("geom"), "geom_1");
    }
}
