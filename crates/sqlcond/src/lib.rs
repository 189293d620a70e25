//! # sqlcond
//!
//! A dialect-agnostic condition builder for SQL statements.
//!
//! ## Features
//!
//! - **Generic placeholders**: write templates with `?`, render them as `?` or
//!   `$1, $2, ...` depending on the target dialect
//! - **Sequence expansion**: `id IN (?)` with a `Vec` expands to `id IN (?, ?, ?)`
//! - **Ordered arguments**: the i-th rendered argument always belongs to the
//!   i-th marker, across JOIN, WHERE and HAVING
//! - **Deferred errors**: builder calls chain freely; the first error is
//!   returned by `render`
//! - **Reuse**: clone a cached baseline and [`merge`](Condition::merge)
//!   request-scoped additions into it
//!
//! ## Example
//!
//! ```ignore
//! use sqlcond::{args, Condition, Placeholder};
//!
//! let mut cond = Condition::new();
//! cond.set_where("id IN (?)", args![vec![1, 2, 3]])
//!     .set_where("b = ?", args![4])
//!     .set_order(["name", "-created_at"])
//!     .set_limit(10);
//!
//! let rendered = cond.render(&mut Placeholder::dollar())?;
//! assert_eq!(
//!     rendered.sql(),
//!     "WHERE id IN ($1, $2, $3) AND b = $4 ORDER BY name ASC, created_at DESC LIMIT 10"
//! );
//! assert_eq!(rendered.args().len(), 4);
//!
//! // Bind directly with tokio-postgres
//! let sql = format!("SELECT * FROM t {}", rendered.sql());
//! let rows = client.query(&sql, &rendered.params_ref()).await?;
//! ```

pub mod arg;
pub mod clause;
pub mod condition;
pub mod config;
pub mod error;
pub mod expand;
pub mod placeholder;
pub mod value;

pub use arg::Arg;
pub use clause::Clause;
pub use condition::{Category, Condition, JoinType, Rendered};
pub use config::{POSTGRES_MAX_PARAMS, RenderConfig};
pub use error::{CondError, CondResult};
pub use expand::{TOKEN, expand};
pub use placeholder::{Dialect, Placeholder};
pub use value::Value;
