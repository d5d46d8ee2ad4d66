//! `deserialize_with` helpers for bare [`TypeUnion`] struct fields.
//!
//! These are for models that embed a union without the wrapper newtype:
//!
//! ```
//! use serde::Deserialize;
//! use type_union::TypeUnion;
//!
//! #[derive(Deserialize)]
//! struct Composite {
//!     #[serde(deserialize_with = "type_union_serde::one_of")]
//!     child: TypeUnion<i64, String>,
//! }
//!
//! let parsed: Composite = serde_json::from_str(r#"{"child": 42}"#)?;
//! assert_eq!(parsed.child, TypeUnion::Left(42));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::de::{DeserializeOwned, DeserializeSeed, Deserializer};
use type_union::{TypeUnion, UnionKind};

use crate::resolver::UnionResolver;

/// Decodes a union field under `oneOf` rules.
pub fn one_of<'de, D, L, R>(deserializer: D) -> Result<TypeUnion<L, R>, D::Error>
where
    D: Deserializer<'de>,
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    (&UnionResolver::new(UnionKind::OneOf)).deserialize(deserializer)
}

/// Decodes a union field under `anyOf` rules.
pub fn any_of<'de, D, L, R>(deserializer: D) -> Result<TypeUnion<L, R>, D::Error>
where
    D: Deserializer<'de>,
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    (&UnionResolver::new(UnionKind::AnyOf)).deserialize(deserializer)
}

/// Decodes a union field under `allOf` rules.
pub fn all_of<'de, D, L, R>(deserializer: D) -> Result<TypeUnion<L, R>, D::Error>
where
    D: Deserializer<'de>,
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    (&UnionResolver::new(UnionKind::AllOf)).deserialize(deserializer)
}
