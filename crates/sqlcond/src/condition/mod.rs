//! Condition aggregate.
//!
//! A [`Condition`] collects JOIN, WHERE, GROUP BY, HAVING, ORDER BY, LIMIT and
//! OFFSET parts through `set_*` calls and renders them into one SQL fragment
//! plus a flat argument list.
//!
//! ## Errors
//!
//! Builder methods always return `&mut Self` so calls can be chained. The first
//! validation error is kept on the condition (later calls still run but never
//! replace it) and is returned by [`Condition::render`].
//!
//! ## Reuse
//!
//! `Clone` is a deep copy of every list (clauses themselves are immutable and
//! shared). Keep a baseline condition untouched, clone it per request and add
//! request-scoped parts to the clone, or fold them in with [`Condition::merge`].
//!
//! # Example
//!
//! ```ignore
//! use sqlcond::{args, Condition, JoinType, Placeholder};
//!
//! let mut cond = Condition::new();
//! cond.set_join(JoinType::Left, "roles r", "r.id = u.role_id", args![])
//!     .set_where("u.id IN (?)", args![vec![1, 2, 3]])
//!     .set_where("u.status = ?", args!["active"])
//!     .set_order(["-u.created_at"])
//!     .set_limit(20);
//!
//! let rendered = cond.render(&mut Placeholder::dollar())?;
//! assert_eq!(
//!     rendered.sql(),
//!     "LEFT JOIN roles r ON r.id = u.role_id WHERE u.id IN ($1, $2, $3) AND u.status = $4 ORDER BY u.created_at DESC LIMIT 20"
//! );
//! ```

mod render;

pub use render::Rendered;

use crate::arg::Arg;
use crate::clause::Clause;
use crate::error::CondError;
use crate::expand::{TOKEN, expand, expand_parts};
use std::fmt;
use std::str::FromStr;

/// JOIN flavours accepted by [`Condition::set_join`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Left,
    Right,
    Inner,
    /// Takes neither an ON condition nor arguments.
    Cross,
}

impl JoinType {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Inner => "INNER",
            JoinType::Cross => "CROSS",
        }
    }
}

impl AsRef<str> for JoinType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinType {
    type Err = CondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [JoinType::Left, JoinType::Right, JoinType::Inner, JoinType::Cross]
            .into_iter()
            .find(|j| j.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CondError::JoinType(s.to_string()))
    }
}

/// Parts of a condition that [`Condition::reset`] can clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Where,
    Having,
    Join,
    Limit,
    Offset,
    Group,
    Order,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Where,
        Category::Having,
        Category::Join,
        Category::Limit,
        Category::Offset,
        Category::Group,
        Category::Order,
    ];
}

/// Programmatic WHERE/HAVING/JOIN/GROUP/ORDER/LIMIT/OFFSET builder.
///
/// Not synchronized: share an unmodified baseline across threads and mutate
/// clones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    where_clauses: Vec<Clause>,
    having_clauses: Vec<Clause>,
    join_clauses: Vec<Clause>,
    /// 0 = unset
    limit: u64,
    /// 0 = unset
    offset: u64,
    group: Vec<String>,
    /// Each entry ends in " ASC" or " DESC".
    order: Vec<String>,
    error: Option<CondError>,
}

impl Condition {
    /// Create an empty condition.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, method: &'static str, err: CondError) {
        if let Some(first) = &self.error {
            tracing::trace!(
                target: "sqlcond::condition",
                method,
                error = %err,
                first = %first,
                "condition error ignored, earlier error kept"
            );
            return;
        }
        tracing::debug!(target: "sqlcond::condition", method, error = %err, "condition error recorded");
        self.error = Some(err);
    }

    // ==================== Clauses ====================

    /// Add a WHERE clause, AND-chained with the others.
    ///
    /// Each `?` in `template` takes one argument; a sequence argument expands
    /// its `?` into one marker per element.
    pub fn set_where<I>(&mut self, template: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        match expand(template, args) {
            Ok(clause) => self.where_clauses.push(clause),
            Err(err) => self.record("set_where", err),
        }
        self
    }

    /// Add a HAVING clause, AND-chained with the others.
    pub fn set_having<I>(&mut self, template: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        match expand(template, args) {
            Ok(clause) => self.having_clauses.push(clause),
            Err(err) => self.record("set_having", err),
        }
        self
    }

    /// Add a JOIN clause: `<TYPE> JOIN <table> ON <template>`.
    ///
    /// `join` is a [`JoinType`] or its name (`"left"`, `"INNER"`, ...).
    /// A CROSS join must be given an empty template and no arguments. An empty
    /// template on other join types omits the `ON` part.
    pub fn set_join<J, I>(&mut self, join: J, table: &str, template: &str, args: I) -> &mut Self
    where
        J: AsRef<str>,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        if table.trim().is_empty() {
            self.record("set_join", CondError::JoinTable);
            return self;
        }
        if table.contains(TOKEN) {
            let err = CondError::arg_mismatch(table, table.matches(TOKEN).count(), 0);
            self.record("set_join", err);
            return self;
        }
        let join_type = match join.as_ref().parse::<JoinType>() {
            Ok(join_type) => join_type,
            Err(err) => {
                self.record("set_join", err);
                return self;
            }
        };

        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        if join_type == JoinType::Cross {
            if !template.is_empty() || !args.is_empty() {
                self.record("set_join", CondError::CrossJoin);
            } else {
                self.join_clauses
                    .push(Clause::new(format!("CROSS JOIN {table}"), Vec::new()));
            }
            return self;
        }

        match expand_parts(template, args) {
            Ok((on, values)) => {
                let sql = if on.is_empty() {
                    format!("{join_type} JOIN {table}")
                } else {
                    format!("{join_type} JOIN {table} ON {on}")
                };
                self.join_clauses.push(Clause::new(sql, values));
            }
            Err(err) => self.record("set_join", err),
        }
        self
    }

    // ==================== Pagination ====================

    /// Set LIMIT; 0 leaves it unset.
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Set OFFSET; 0 leaves it unset.
    pub fn set_offset(&mut self, offset: u64) -> &mut Self {
        self.offset = offset;
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    pub fn paginate(&mut self, page: u64, per_page: u64) -> &mut Self {
        let page = page.max(1);
        let size = per_page.max(1);
        self.limit = size;
        self.offset = (page - 1).saturating_mul(size);
        self
    }

    // ==================== Grouping & ordering ====================

    /// Replace the GROUP BY column list.
    ///
    /// No columns, or a single empty column, records
    /// [`CondError::EmptyValue`] and leaves GROUP BY empty.
    pub fn set_group<I>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.group.clear();
        match collect_columns("set_group", cols) {
            Ok(cols) => self.group = cols,
            Err(err) => self.record("set_group", err),
        }
        self
    }

    /// Replace the ORDER BY column list.
    ///
    /// Columns ending in ` ASC`/` DESC` (any case) keep their direction, a
    /// leading `-` means descending, anything else is ascending. Empty input is
    /// treated like [`set_group`](Self::set_group).
    pub fn set_order<I>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.order.clear();
        match collect_columns("set_order", cols) {
            Ok(cols) => match cols.iter().map(|c| normalize_order(c)).collect::<Option<Vec<_>>>() {
                Some(order) => self.order = order,
                None => self.record("set_order", CondError::EmptyValue("set_order")),
            },
            Err(err) => self.record("set_order", err),
        }
        self
    }

    // ==================== Reuse ====================

    /// Clear the given categories, or every category when `categories` is empty.
    ///
    /// A recorded error is kept.
    pub fn reset(&mut self, categories: &[Category]) -> &mut Self {
        let categories = if categories.is_empty() {
            &Category::ALL[..]
        } else {
            categories
        };
        for category in categories {
            match category {
                Category::Where => self.where_clauses.clear(),
                Category::Having => self.having_clauses.clear(),
                Category::Join => self.join_clauses.clear(),
                Category::Limit => self.limit = 0,
                Category::Offset => self.offset = 0,
                Category::Group => self.group.clear(),
                Category::Order => self.order.clear(),
            }
        }
        self
    }

    /// Fold `other` into this condition.
    ///
    /// GROUP BY, ORDER BY, LIMIT and OFFSET are taken from `other` when set
    /// there. WHERE, HAVING and JOIN clauses of `other` are appended after this
    /// condition's own. An error from `other` is adopted only if none is
    /// recorded here yet.
    pub fn merge(&mut self, other: &Condition) -> &mut Self {
        if !other.group.is_empty() {
            self.group = other.group.clone();
        }
        if !other.order.is_empty() {
            self.order = other.order.clone();
        }
        if other.limit > 0 {
            self.limit = other.limit;
        }
        if other.offset > 0 {
            self.offset = other.offset;
        }
        self.where_clauses.extend(other.where_clauses.iter().cloned());
        self.having_clauses.extend(other.having_clauses.iter().cloned());
        self.join_clauses.extend(other.join_clauses.iter().cloned());
        if self.error.is_none() {
            self.error = other.error.clone();
        }
        self
    }

    // ==================== Accessors ====================

    /// The first recorded error, if any.
    pub fn error(&self) -> Option<&CondError> {
        self.error.as_ref()
    }

    pub fn where_clauses(&self) -> &[Clause] {
        &self.where_clauses
    }

    pub fn having_clauses(&self) -> &[Clause] {
        &self.having_clauses
    }

    pub fn join_clauses(&self) -> &[Clause] {
        &self.join_clauses
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn group(&self) -> &[String] {
        &self.group
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// True when nothing would be rendered.
    pub fn is_empty(&self) -> bool {
        self.where_clauses.is_empty()
            && self.having_clauses.is_empty()
            && self.join_clauses.is_empty()
            && self.group.is_empty()
            && self.order.is_empty()
            && self.limit == 0
            && self.offset == 0
    }
}

/// Collect GROUP/ORDER columns, rejecting empty input and stray `?` tokens.
fn collect_columns<I>(method: &'static str, cols: I) -> Result<Vec<String>, CondError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let cols: Vec<String> = cols.into_iter().map(|c| c.as_ref().to_string()).collect();
    if cols.is_empty() || (cols.len() == 1 && cols[0].is_empty()) {
        return Err(CondError::EmptyValue(method));
    }
    // A token here would render a marker with no argument behind it.
    if let Some(col) = cols.iter().find(|c| c.contains(TOKEN)) {
        return Err(CondError::arg_mismatch(
            col.as_str(),
            col.matches(TOKEN).count(),
            0,
        ));
    }
    Ok(cols)
}

/// `None` when nothing is left of the column once its direction is stripped.
fn normalize_order(col: &str) -> Option<String> {
    let (head, dir) = if let Some(head) = strip_suffix_ignore_case(col, " ASC") {
        (head, "ASC")
    } else if let Some(head) = strip_suffix_ignore_case(col, " DESC") {
        (head, "DESC")
    } else if let Some(head) = col.strip_prefix('-') {
        (head, "DESC")
    } else {
        (col, "ASC")
    };
    if head.trim().is_empty() {
        return None;
    }
    Some(format!("{head} {dir}"))
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}
