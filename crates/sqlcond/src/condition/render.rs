//! Rendering a [`Condition`] into SQL text and ordered arguments.

use super::Condition;
use crate::clause::Clause;
use crate::config::RenderConfig;
use crate::error::{CondError, CondResult};
use crate::expand::TOKEN;
use crate::placeholder::{Dialect, Placeholder};
use crate::value::Value;
use tokio_postgres::types::ToSql;

const LOG_SQL_MAX_BYTES: usize = 200;

/// Output of [`Condition::render`].
///
/// `args()[i]` belongs to the i-th parameter marker in `sql()`, reading left
/// to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    sql: String,
    args: Vec<Value>,
}

impl Rendered {
    /// The rendered fragment, starting at the first JOIN/WHERE/... keyword.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Get parameter references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// True when the condition rendered nothing.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

impl Condition {
    /// Render into a SQL fragment and its argument list.
    ///
    /// Parts are emitted as JOIN, WHERE, GROUP BY, HAVING, ORDER BY, LIMIT,
    /// OFFSET, separated by single spaces. Every generic `?` is replaced by
    /// `placeholder.next_marker()`, so pass a fresh placeholder (or one whose
    /// offset continues a statement's own numbering).
    ///
    /// Returns the first recorded builder error without rendering anything.
    pub fn render(&self, placeholder: &mut Placeholder) -> CondResult<Rendered> {
        if let Some(err) = &self.error {
            tracing::debug!(target: "sqlcond::render", error = %err, "render refused");
            return Err(err.clone());
        }

        let mut segments: Vec<String> = Vec::new();
        let mut args: Vec<Value> = Vec::new();

        for join in &self.join_clauses {
            segments.push(join.template().to_string());
            args.extend_from_slice(join.args());
        }
        if !self.where_clauses.is_empty() {
            segments.push(format!("WHERE {}", and_chain(&self.where_clauses, &mut args)));
        }
        if !self.group.is_empty() {
            segments.push(format!("GROUP BY {}", self.group.join(", ")));
        }
        if !self.having_clauses.is_empty() {
            segments.push(format!("HAVING {}", and_chain(&self.having_clauses, &mut args)));
        }
        if !self.order.is_empty() {
            segments.push(format!("ORDER BY {}", self.order.join(", ")));
        }
        if self.limit > 0 {
            segments.push(format!("LIMIT {}", self.limit));
        }
        if self.offset > 0 {
            segments.push(format!("OFFSET {}", self.offset));
        }

        let sql = substitute(&segments.join(" "), placeholder);
        tracing::debug!(
            target: "sqlcond::render",
            sql = %truncate_sql_bytes(&sql, LOG_SQL_MAX_BYTES),
            arg_count = args.len(),
            "condition rendered"
        );
        Ok(Rendered { sql, args })
    }

    /// Render with a fresh placeholder for `dialect`.
    pub fn render_for(&self, dialect: Dialect) -> CondResult<Rendered> {
        self.render(&mut dialect.placeholder())
    }

    /// Render according to a [`RenderConfig`], enforcing its argument limit.
    pub fn render_with(&self, config: &RenderConfig) -> CondResult<Rendered> {
        let rendered = self.render(&mut config.placeholder())?;
        if let Some(max) = config.max_args {
            if rendered.args.len() > max {
                return Err(CondError::TooManyArgs {
                    args: rendered.args.len(),
                    max,
                });
            }
        }
        Ok(rendered)
    }
}

fn and_chain(clauses: &[Clause], args: &mut Vec<Value>) -> String {
    let mut parts = Vec::with_capacity(clauses.len());
    for clause in clauses {
        parts.push(clause.template());
        args.extend_from_slice(clause.args());
    }
    parts.join(" AND ")
}

/// Replace every generic token, left to right, with the dialect marker.
fn substitute(template: &str, placeholder: &mut Placeholder) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    for ch in template.chars() {
        if ch == TOKEN {
            placeholder.write_next(&mut out);
        } else {
            out.push(ch);
        }
    }
    out
}

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
