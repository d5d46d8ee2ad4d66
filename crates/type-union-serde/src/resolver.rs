//! The resolver: isolated trial decodes against a value snapshot.

use std::fmt;

use serde::de::{self, DeserializeOwned, DeserializeSeed, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use type_union::{resolve_union, TrialOutcome, TypeUnion, UnionError, UnionKind};

/// Resolution failure with `serde_json` decode errors as causes.
pub type ResolveError = UnionError<serde_json::Error>;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A reusable resolver for `TypeUnion<L, R>` values.
///
/// Immutable once built: one instance per `(L, R, kind)` combination can be
/// shared across any number of resolutions. Beyond what the [`crate::OneOf`]
/// family of wrappers offers, a resolver carries per-side acceptance
/// predicates, which run only after a successful decode and downgrade the
/// outcome to invalid-or-absent. That is the escape hatch for candidate
/// types whose decode "succeeds" on missing input by filling defaults.
pub struct UnionResolver<L, R> {
    kind: UnionKind,
    left_name: String,
    right_name: String,
    accept_left: Option<Predicate<L>>,
    accept_right: Option<Predicate<R>>,
}

impl<L, R> UnionResolver<L, R>
where
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    /// A resolver with the given strictness mode, default always-true
    /// predicates, and type names derived from `L` and `R`.
    pub fn new(kind: UnionKind) -> Self {
        Self {
            kind,
            left_name: short_type_name::<L>(),
            right_name: short_type_name::<R>(),
            accept_left: None,
            accept_right: None,
        }
    }

    /// The strictness mode this resolver applies.
    pub fn kind(&self) -> UnionKind {
        self.kind
    }

    /// Overrides the candidate type names used in error messages.
    pub fn with_names(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_name = left.into();
        self.right_name = right.into();
        self
    }

    /// Accepts a decoded left value only when `predicate` returns true.
    pub fn accept_left_if(mut self, predicate: impl Fn(&L) -> bool + Send + Sync + 'static) -> Self {
        self.accept_left = Some(Box::new(predicate));
        self
    }

    /// Accepts a decoded right value only when `predicate` returns true.
    pub fn accept_right_if(
        mut self,
        predicate: impl Fn(&R) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.accept_right = Some(Box::new(predicate));
        self
    }

    /// Trial-decodes `value` as both candidate types and applies the
    /// strictness decision table.
    ///
    /// Both trials read `value` by reference, so neither attempt can consume
    /// or corrupt the other's input.
    pub fn resolve(&self, value: &Value) -> Result<TypeUnion<L, R>, ResolveError> {
        let left = trial::<L>(value, self.accept_left.as_deref());
        let right = trial::<R>(value, self.accept_right.as_deref());
        resolve_union(self.kind, left, right, &self.left_name, &self.right_name)
    }
}

impl<L, R> fmt::Debug for UnionResolver<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionResolver")
            .field("kind", &self.kind)
            .field("left", &self.left_name)
            .field("right", &self.right_name)
            .finish_non_exhaustive()
    }
}

/// The converter façade: buffers the source subtree into a [`Value`]
/// snapshot (serde readers are single-pass), resolves from the snapshot,
/// and reports failures through the host deserializer's error type with
/// both causes rendered into the message.
impl<'a, 'de, L, R> DeserializeSeed<'de> for &'a UnionResolver<L, R>
where
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    type Value = TypeUnion<L, R>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        self.resolve(&value).map_err(de::Error::custom)
    }
}

/// One isolated decode attempt. Only decode errors are captured as
/// `Failed`; panics propagate as the programming errors they are.
fn trial<T: DeserializeOwned>(
    value: &Value,
    accept: Option<&(dyn Fn(&T) -> bool + Send + Sync)>,
) -> TrialOutcome<T, serde_json::Error> {
    match T::deserialize(value) {
        Ok(decoded) => match accept {
            Some(accept) if !accept(&decoded) => TrialOutcome::InvalidOrAbsent,
            _ => TrialOutcome::Valid(decoded),
        },
        Err(cause) => TrialOutcome::Failed(cause),
    }
}

/// `core::option::Option<alloc::string::String>` -> `Option<String>`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (i, c) in full.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            continue;
        }
        push_last_segment(&mut out, &full[start..i]);
        out.push(c);
        start = i + c.len_utf8();
    }
    push_last_segment(&mut out, &full[start..]);
    out
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}
