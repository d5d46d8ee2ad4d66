//! Per-side outcome of one trial decode.

/// What happened when the source value was tried as one candidate type.
///
/// `Valid` is the only usable outcome. `InvalidOrAbsent` means the decode
/// itself succeeded but the acceptance predicate rejected the value (for
/// instance a required field that the framework silently defaulted).
/// `Failed` means the decode raised; the cause is kept so that a no-match
/// failure can aggregate both sides' errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome<T, E> {
    /// Decode succeeded and the acceptance predicate passed.
    Valid(T),
    /// Decode succeeded but produced a logically absent or invalid value.
    InvalidOrAbsent,
    /// Decode raised an error.
    Failed(E),
}

impl<T, E> TrialOutcome<T, E> {
    /// True iff this side can contribute a value to the union.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Splits the outcome into its value (if usable) and its failure cause
    /// (if the decode raised). Both are `None` for `InvalidOrAbsent`.
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Valid(value) => (Some(value), None),
            Self::InvalidOrAbsent => (None, None),
            Self::Failed(cause) => (None, Some(cause)),
        }
    }
}
