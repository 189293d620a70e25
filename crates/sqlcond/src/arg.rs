//! Argument shapes accepted by the `set_*` builder methods.
//!
//! Each `?` in a template is matched with exactly one [`Arg`]. A scalar keeps
//! its single `?`; a sequence expands it into one `?` per element.
//!
//! ```ignore
//! use sqlcond::{args, Condition};
//!
//! let mut cond = Condition::new();
//! cond.set_where("status = ? AND id IN (?)", args!["active", vec![1, 2, 3]]);
//! ```

use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// One argument matched to one placeholder token.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Binds a single value.
    Scalar(Value),
    /// Expands the token into `?, ?, ...` and binds every element.
    Seq(Vec<Value>),
}

impl Arg {
    /// Build a sequence argument from any iterable of values.
    pub fn seq<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Arg::Seq(values.into_iter().map(Into::into).collect())
    }

    /// Number of bind values this argument contributes.
    pub fn len(&self) -> usize {
        match self {
            Arg::Scalar(_) => 1,
            Arg::Seq(values) => values.len(),
        }
    }

    /// Returns `true` for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Scalar(v)
    }
}

macro_rules! impl_scalar_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::Scalar(v.into())
                }
            }
        )*
    };
}

impl_scalar_arg!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    &str,
    &String,
    serde_json::Value,
    Uuid,
    NaiveDateTime,
    DateTime<Utc>,
    NaiveDate,
);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        Arg::Scalar(v.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::seq(values)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Arg {
    fn from(values: &[T]) -> Self {
        Arg::seq(values.iter().cloned())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Arg {
    fn from(values: [T; N]) -> Self {
        Arg::seq(values)
    }
}

/// Build a `Vec<Arg>` from arguments of mixed shapes.
///
/// ```ignore
/// let a = sqlcond::args![1, "x", vec![2, 3]];
/// assert_eq!(a.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
