//! The union value produced by a successful resolution.

use std::fmt;

/// A value that legally takes one of two shapes, or both at once.
///
/// `Left` and `Right` hold exactly one side; `Both` holds one value of each
/// side, each independently valid. Equality is structural per-variant:
/// cross-variant comparisons are always unequal, so `Left(x)` never equals
/// `Both(x, y)`.
///
/// A union value is only ever built by resolution; there is no variant for
/// "absent". When neither side is usable the resolution fails outright.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeUnion<L, R> {
    /// The value matched only the left candidate type.
    Left(L),
    /// The value matched only the right candidate type.
    Right(R),
    /// The value matched both candidate types.
    Both(L, R),
}

impl<L, R> TypeUnion<L, R> {
    /// True iff this is the `Left` variant.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// True iff this is the `Right` variant.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// True iff this is the `Both` variant.
    pub fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    /// The left value if this is `Left`, and definitely `None` otherwise
    /// (including for `Both`).
    pub fn as_left(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    /// The right value if this is `Right`, and definitely `None` otherwise
    /// (including for `Both`).
    pub fn as_right(&self) -> Option<&R> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    /// Both values if this is `Both`, `None` otherwise.
    pub fn as_both(&self) -> Option<(&L, &R)> {
        match self {
            Self::Both(left, right) => Some((left, right)),
            _ => None,
        }
    }

    /// Consuming form of [`as_left`](Self::as_left).
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    /// Consuming form of [`as_right`](Self::as_right).
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    /// Consuming form of [`as_both`](Self::as_both).
    pub fn into_both(self) -> Option<(L, R)> {
        match self {
            Self::Both(left, right) => Some((left, right)),
            _ => None,
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for TypeUnion<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(f, "Left[{value}]"),
            Self::Right(value) => write!(f, "Right[{value}]"),
            Self::Both(left, right) => write!(f, "Both[{left},{right}]"),
        }
    }
}
