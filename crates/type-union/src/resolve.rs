//! The strictness modes and the pure resolution policy.

use std::fmt;

use thiserror::Error;

use crate::outcome::TrialOutcome;
use crate::union::TypeUnion;

/// The strictness mode of a resolver, mirroring the JSON Schema combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionKind {
    /// The value must match exactly one of the two candidate types.
    OneOf,
    /// The value must match at least one candidate type.
    AnyOf,
    /// The value must independently match both candidate types.
    AllOf,
}

impl UnionKind {
    /// The schema-facing combinator name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneOf => "oneOf",
            Self::AnyOf => "anyOf",
            Self::AllOf => "allOf",
        }
    }
}

impl fmt::Display for UnionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn fmt_cause<E: fmt::Display>(cause: &Option<E>) -> String {
    match cause {
        Some(cause) => cause.to_string(),
        None => "rejected as invalid or absent".to_string(),
    }
}

fn fmt_either_cause<'a, E: fmt::Display>(left: &'a Option<E>, right: &'a Option<E>) -> String {
    fmt_cause(if left.is_some() { left } else { right })
}

/// Why a resolution failed.
///
/// `E` is the host framework's decode error. A cause is `None` when that
/// side decoded successfully but lost out to the mode rule or to an
/// acceptance predicate; causes are never silently dropped otherwise.
#[derive(Debug, Error)]
pub enum UnionError<E: fmt::Debug + fmt::Display> {
    /// `oneOf` saw both sides match; the schema author meant `anyOf`.
    #[error("value matches both {left} and {right} where oneOf was specified; use anyOf for that scenario")]
    AmbiguousMatch {
        /// Display name of the left candidate type.
        left: String,
        /// Display name of the right candidate type.
        right: String,
    },

    /// `allOf` saw only one side match.
    #[error("value matches only {matched} while allOf was specified; it did not match {unmatched}: {}", fmt_either_cause(.left_cause, .right_cause))]
    IncompleteIntersection {
        /// Display name of the side that matched.
        matched: String,
        /// Display name of the side that did not.
        unmatched: String,
        /// The left side's decode error; set only when the left side failed.
        left_cause: Option<E>,
        /// The right side's decode error; set only when the right side failed.
        right_cause: Option<E>,
    },

    /// Neither side was usable, under any mode.
    #[error("value cannot be deserialized as either {left} ({}) or {right} ({}) where {kind} was specified", fmt_cause(.left_cause), fmt_cause(.right_cause))]
    NoMatch {
        /// The strictness mode that was in effect.
        kind: UnionKind,
        /// Display name of the left candidate type.
        left: String,
        /// Display name of the right candidate type.
        right: String,
        /// The left side's decode error, if the decode raised.
        left_cause: Option<E>,
        /// The right side's decode error, if the decode raised.
        right_cause: Option<E>,
    },
}

impl<E: fmt::Debug + fmt::Display> UnionError<E> {
    /// The aggregated underlying causes, `(left, right)`. A side is `None`
    /// when it decoded successfully or was only rejected by a predicate.
    pub fn causes(&self) -> (Option<&E>, Option<&E>) {
        match self {
            Self::AmbiguousMatch { .. } => (None, None),
            Self::IncompleteIntersection {
                left_cause,
                right_cause,
                ..
            }
            | Self::NoMatch {
                left_cause,
                right_cause,
                ..
            } => (left_cause.as_ref(), right_cause.as_ref()),
        }
    }
}

/// Applies the strictness decision table to two trial outcomes.
///
/// | left usable | right usable | oneOf       | anyOf  | allOf  |
/// |-------------|--------------|-------------|--------|--------|
/// | yes         | yes          | error       | `Both` | `Both` |
/// | yes         | no           | `Left`      | `Left` | error  |
/// | no          | yes          | `Right`     | `Right`| error  |
/// | no          | no           | error       | error  | error  |
///
/// `left_name`/`right_name` label the candidate types in error messages.
pub fn resolve_union<L, R, E: fmt::Debug + fmt::Display>(
    kind: UnionKind,
    left: TrialOutcome<L, E>,
    right: TrialOutcome<R, E>,
    left_name: &str,
    right_name: &str,
) -> Result<TypeUnion<L, R>, UnionError<E>> {
    let (left_value, left_cause) = left.into_parts();
    let (right_value, right_cause) = right.into_parts();
    match (left_value, right_value) {
        (Some(left), Some(right)) => match kind {
            UnionKind::OneOf => Err(UnionError::AmbiguousMatch {
                left: left_name.to_string(),
                right: right_name.to_string(),
            }),
            UnionKind::AnyOf | UnionKind::AllOf => Ok(TypeUnion::Both(left, right)),
        },
        (Some(left), None) => match kind {
            UnionKind::AllOf => Err(UnionError::IncompleteIntersection {
                matched: left_name.to_string(),
                unmatched: right_name.to_string(),
                left_cause: None,
                right_cause,
            }),
            UnionKind::OneOf | UnionKind::AnyOf => Ok(TypeUnion::Left(left)),
        },
        (None, Some(right)) => match kind {
            UnionKind::AllOf => Err(UnionError::IncompleteIntersection {
                matched: right_name.to_string(),
                unmatched: left_name.to_string(),
                left_cause,
                right_cause: None,
            }),
            UnionKind::OneOf | UnionKind::AnyOf => Ok(TypeUnion::Right(right)),
        },
        (None, None) => Err(UnionError::NoMatch {
            kind,
            left: left_name.to_string(),
            right: right_name.to_string(),
            left_cause,
            right_cause,
        }),
    }
}
