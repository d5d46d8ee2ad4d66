//! serde/serde_json binding for two-ary type unions.
//!
//! The value at a union position is buffered once into a [`serde_json::Value`]
//! snapshot, both candidate types are trial-decoded from that snapshot by
//! reference (so the attempts cannot interfere with each other), and the
//! `type-union` policy decides between `Left`, `Right`, `Both`, or a failure.
//!
//! Three surfaces, outermost first:
//!
//! - [`OneOf`]/[`AnyOf`]/[`AllOf`] wrapper types implement `Deserialize` and
//!   compose freely, including nested unions:
//!
//! ```
//! use type_union_serde::{OneOf, TypeUnion};
//!
//! let n: OneOf<i64, String> = serde_json::from_str("42")?;
//! assert_eq!(n.into_inner(), TypeUnion::Left(42));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! - [`one_of`]/[`any_of`]/[`all_of`] are `deserialize_with` helpers for bare
//!   [`TypeUnion`] struct fields.
//! - [`UnionResolver`] is the configurable form: custom type names and
//!   per-side acceptance predicates, reusable across resolutions.

pub mod fields;
pub mod resolver;
pub mod wrappers;

pub use fields::{all_of, any_of, one_of};
pub use resolver::{ResolveError, UnionResolver};
pub use wrappers::{AllOf, AnyOf, OneOf};

pub use type_union::{TrialOutcome, TypeUnion, UnionError, UnionKind};
