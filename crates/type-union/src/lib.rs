//! Two-ary type unions with `oneOf`/`anyOf`/`allOf` resolution semantics.
//!
//! A [`TypeUnion<L, R>`] is a value that was declared to admit two candidate
//! shapes, in the sense of the JSON Schema combinators: the decoded value is
//! either the left shape, the right shape, or (under `anyOf`/`allOf`) both at
//! once. This crate holds the framework-agnostic pieces: the union value
//! itself, the tri-state outcome of a trial decode, and the pure
//! [`resolve_union`] policy that turns two outcomes into a union value or a
//! [`UnionError`].
//!
//! Actually decoding candidates from JSON lives in the `type-union-serde`
//! binding crate; this crate never touches a serializer.

pub mod outcome;
pub mod resolve;
pub mod union;

pub use outcome::TrialOutcome;
pub use resolve::{resolve_union, UnionError, UnionKind};
pub use union::TypeUnion;
