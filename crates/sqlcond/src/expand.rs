//! Argument expansion.
//!
//! Turns one `(template, args)` pair into a [`Clause`]: each `?` is paired with
//! the argument at the same position, and a sequence argument of length N
//! replaces its `?` with N comma-separated `?` tokens while its elements are
//! spliced into the flattened argument list at that position.

use crate::arg::Arg;
use crate::clause::Clause;
use crate::error::{CondError, CondResult};
use crate::value::Value;

/// Generic placeholder token used in templates before dialect substitution.
pub const TOKEN: char = '?';

const SEQ_SEPARATOR: &str = ", ";

/// Expand a template and its arguments into a [`Clause`].
///
/// Fails with [`CondError::ArgCountMismatch`] when the number of `?` tokens
/// differs from the number of arguments, or when a sequence argument is empty.
pub fn expand<I>(template: &str, args: I) -> CondResult<Clause>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
    let (sql, values) = expand_parts(template, args)?;
    Ok(Clause::new(sql, values))
}

pub(crate) fn expand_parts(template: &str, args: Vec<Arg>) -> CondResult<(String, Vec<Value>)> {
    let placeholders = template.matches(TOKEN).count();
    if placeholders != args.len() {
        return Err(CondError::arg_mismatch(template, placeholders, args.len()));
    }

    // `IN ()` is not valid SQL; count only arguments that bind something.
    if args.iter().any(Arg::is_empty) {
        let binding = args.iter().filter(|a| !a.is_empty()).count();
        return Err(CondError::arg_mismatch(template, placeholders, binding));
    }

    let flat_len: usize = args.iter().map(Arg::len).sum();
    let mut sql = String::with_capacity(template.len() + flat_len * (SEQ_SEPARATOR.len() + 1));
    let mut values = Vec::with_capacity(flat_len);

    // `split` yields exactly `placeholders + 1` pieces.
    let mut pieces = template.split(TOKEN);
    if let Some(head) = pieces.next() {
        sql.push_str(head);
    }
    for (arg, tail) in args.into_iter().zip(pieces) {
        match arg {
            Arg::Scalar(v) => {
                sql.push(TOKEN);
                values.push(v);
            }
            Arg::Seq(vs) => {
                for (i, v) in vs.into_iter().enumerate() {
                    if i > 0 {
                        sql.push_str(SEQ_SEPARATOR);
                    }
                    sql.push(TOKEN);
                    values.push(v);
                }
            }
        }
        sql.push_str(tail);
    }

    Ok((sql, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn ints(vals: &[i32]) -> Vec<Value> {
        vals.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn scalar_keeps_single_token() {
        let clause = expand("b = ?", args![4i32]).unwrap();
        assert_eq!(clause.template(), "b = ?");
        assert_eq!(clause.args(), ints(&[4]).as_slice());
    }

    #[test]
    fn sequence_expands_in_place() {
        let clause = expand("id IN (?)", args![vec![1i32, 2, 3]]).unwrap();
        assert_eq!(clause.template(), "id IN (?, ?, ?)");
        assert_eq!(clause.args(), ints(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn two_sequences_keep_relative_order() {
        let clause = expand(
            "a IN (?) AND b IN (?)",
            args![vec![1i32, 2], vec![3i32, 4, 5]],
        )
        .unwrap();
        assert_eq!(clause.template(), "a IN (?, ?) AND b IN (?, ?, ?)");
        assert_eq!(clause.args(), ints(&[1, 2, 3, 4, 5]).as_slice());
    }

    #[test]
    fn mixed_scalars_and_sequences() {
        let clause = expand(
            "x = ? AND a IN (?) AND y > ? AND b IN (?)",
            args![10i32, vec![1i32], 20i32, vec![2i32, 3]],
        )
        .unwrap();
        assert_eq!(
            clause.template(),
            "x = ? AND a IN (?) AND y > ? AND b IN (?, ?)"
        );
        assert_eq!(clause.args(), ints(&[10, 1, 20, 2, 3]).as_slice());
    }

    #[test]
    fn token_at_both_ends() {
        let clause = expand("?=?", args![vec![1i32, 2], 3i32]).unwrap();
        assert_eq!(clause.template(), "?, ?=?");
        assert_eq!(clause.args().len(), 3);
    }

    #[test]
    fn no_tokens_no_args() {
        let clause = expand("deleted_at IS NULL", args![]).unwrap();
        assert_eq!(clause.template(), "deleted_at IS NULL");
        assert!(clause.args().is_empty());
    }

    #[test]
    fn count_mismatch_names_template_and_counts() {
        let err = expand("a = ? AND b = ?", args![1i32]).unwrap_err();
        assert_eq!(err, CondError::arg_mismatch("a = ? AND b = ?", 2, 1));
        assert!(err.to_string().contains("a = ? AND b = ?"));

        let err = expand("a = 1", args![1i32]).unwrap_err();
        assert_eq!(err, CondError::arg_mismatch("a = 1", 0, 1));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = expand("id IN (?)", args![Vec::<i32>::new()]).unwrap_err();
        assert_eq!(err, CondError::arg_mismatch("id IN (?)", 1, 0));

        let err = expand("a IN (?) AND b IN (?)", args![vec![1i32], Vec::<i32>::new()])
            .unwrap_err();
        assert_eq!(err, CondError::arg_mismatch("a IN (?) AND b IN (?)", 2, 1));
    }

    #[test]
    fn token_count_matches_args_for_many_shapes() {
        for n in 1..8usize {
            for m in 1..8usize {
                let a: Vec<i32> = (0..n as i32).collect();
                let b: Vec<i32> = (100..100 + m as i32).collect();
                let clause = expand("a IN (?) OR c = ? OR b IN (?)", args![a.clone(), 7i32, b.clone()])
                    .unwrap();
                assert_eq!(clause.template().matches(TOKEN).count(), clause.args().len());

                let mut expected = ints(&a);
                expected.push(Value::Int(7));
                expected.extend(ints(&b));
                assert_eq!(clause.args(), expected.as_slice());
            }
        }
    }
}
