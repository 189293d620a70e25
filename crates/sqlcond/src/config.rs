//! Render configuration.

use crate::placeholder::{Dialect, Placeholder};
use serde::Deserialize;

/// Maximum number of bind parameters in one Postgres statement.
pub const POSTGRES_MAX_PARAMS: usize = 65535;

/// Configuration for [`Condition::render_with`](crate::Condition::render_with).
///
/// Deserializable so a host application can keep it in its own config file:
///
/// ```toml
/// dialect = "postgres"
/// start_index = 2
/// max_args = 65535
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Placeholder dialect (default: Postgres).
    pub dialect: Dialect,
    /// Numbered markers start after this index. `2` makes the first marker `$3`.
    pub start_index: usize,
    /// Upper bound on rendered bind arguments. `None` means unbounded (default).
    pub max_args: Option<usize>,
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Continue numbering after `start_index` existing parameters.
    ///
    /// Useful for UPDATE where SET params come first.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Reject renders with more than `max` bind arguments.
    pub fn with_max_args(mut self, max: usize) -> Self {
        self.max_args = Some(max);
        self
    }

    /// A fresh placeholder for this configuration.
    pub fn placeholder(&self) -> Placeholder {
        self.dialect.placeholder().with_offset(self.start_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let config = RenderConfig::new()
            .with_dialect(Dialect::MySql)
            .with_start_index(3)
            .with_max_args(10);
        assert_eq!(config.dialect, Dialect::MySql);
        assert_eq!(config.placeholder().counter(), 3);
        assert_eq!(config.max_args, Some(10));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"dialect":"sqlite"}"#).unwrap();
        assert_eq!(config, RenderConfig::new().with_dialect(Dialect::Sqlite));

        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }
}
