//! Mode-carrying wrapper types.
//!
//! Each wrapper pins a strictness mode at the type level and implements
//! `Deserialize`, so unions nest without any registration step: in
//! `OneOf<i64, OneOf<Uuid, DateTime<Utc>>>` the inner candidate's own
//! `Deserialize` impl is the freshly derived nested resolver, same mode.
//! A candidate that is *not* a wrapper is decoded by its own `Deserialize`
//! impl, i.e. by the framework's default behavior for that type.

use std::fmt;
use std::ops::Deref;

use serde::de::{DeserializeOwned, DeserializeSeed, Deserializer};
use serde::Deserialize;
use type_union::{TypeUnion, UnionKind};

use crate::resolver::UnionResolver;

macro_rules! union_wrapper {
    ($(#[$doc:meta])* $name:ident => $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name<L, R>(pub TypeUnion<L, R>);

        impl<L, R> $name<L, R> {
            /// The resolved union value.
            pub fn into_inner(self) -> TypeUnion<L, R> {
                self.0
            }
        }

        impl<L, R> Deref for $name<L, R> {
            type Target = TypeUnion<L, R>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<L, R> From<TypeUnion<L, R>> for $name<L, R> {
            fn from(union: TypeUnion<L, R>) -> Self {
                Self(union)
            }
        }

        impl<L: fmt::Display, R: fmt::Display> fmt::Display for $name<L, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl<'de, L, R> Deserialize<'de> for $name<L, R>
        where
            L: DeserializeOwned,
            R: DeserializeOwned,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                (&UnionResolver::new($kind)).deserialize(deserializer).map(Self)
            }
        }
    };
}

union_wrapper! {
    /// A value that must match exactly one of `L` and `R`.
    OneOf => UnionKind::OneOf
}

union_wrapper! {
    /// A value that must match at least one of `L` and `R`; matching both
    /// yields [`TypeUnion::Both`].
    AnyOf => UnionKind::AnyOf
}

union_wrapper! {
    /// A value that must independently match both `L` and `R`.
    AllOf => UnionKind::AllOf
}
