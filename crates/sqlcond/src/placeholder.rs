//! Dialect placeholder markers.
//!
//! Conditions are built with the generic `?` token. At render time every token
//! is replaced by [`Placeholder::next_marker`]: either a fixed marker (`?` for
//! MySQL/SQLite) or a numbered one (`$1, $2, ...` for Postgres).

use serde::Deserialize;
use std::borrow::Cow;

/// How a target dialect marks a parameter slot.
///
/// The counter advances on every [`next_marker`](Self::next_marker) call, so a
/// placeholder should not be reused across unrelated renders. Use
/// [`reset`](Self::reset) or build a fresh value per statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    numbered: bool,
    marker: Cow<'static, str>,
    counter: usize,
}

impl Placeholder {
    /// A fixed marker repeated for every slot.
    pub fn fixed(marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            numbered: false,
            marker: marker.into(),
            counter: 0,
        }
    }

    /// A marker followed by an ascending 1-based index.
    pub fn numbered(marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            numbered: true,
            marker: marker.into(),
            counter: 0,
        }
    }

    /// `?` markers (MySQL, SQLite).
    pub fn question() -> Self {
        Self::fixed("?")
    }

    /// `$1, $2, ...` markers (Postgres).
    pub fn dollar() -> Self {
        Self::numbered("$")
    }

    /// Start numbering after `offset`, e.g. `with_offset(2)` makes the first marker `$3`.
    ///
    /// Has no visible effect on fixed markers.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.counter = offset;
        self
    }

    pub fn is_numbered(&self) -> bool {
        self.numbered
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Number of markers handed out so far (including any starting offset).
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Reset the counter to zero.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Produce the marker for the next parameter slot.
    pub fn next_marker(&mut self) -> String {
        self.counter += 1;
        if self.numbered {
            format!("{}{}", self.marker, self.counter)
        } else {
            self.marker.to_string()
        }
    }

    pub(crate) fn write_next(&mut self, out: &mut String) {
        self.counter += 1;
        out.push_str(&self.marker);
        if self.numbered {
            out.push_str(&self.counter.to_string());
        }
    }
}

/// Supported placeholder dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    #[serde(alias = "mariadb")]
    MySql,
    Sqlite,
}

impl Dialect {
    /// A fresh placeholder for this dialect.
    pub fn placeholder(self) -> Placeholder {
        match self {
            Dialect::Postgres => Placeholder::dollar(),
            Dialect::MySql | Dialect::Sqlite => Placeholder::question(),
        }
    }
}
