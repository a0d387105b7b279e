/// A block state was asked to name, canonicalize, or serialize itself while one of its required
/// properties is unset.
///
/// This always points at a programming or data-integrity error in the caller; retrying the same
/// operation yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} has no {property}")]
pub struct InvalidState {
    /// The [kind](crate::BlockKind::KIND) of the offending block, e.g. `log`.
    pub kind: &'static str,
    /// The human-readable name of the missing property, e.g. `wood type`.
    pub property: &'static str,
}

impl InvalidState {
    pub(crate) const fn unset(kind: &'static str, property: &'static str) -> Self {
        Self { kind, property }
    }
}

/// Result type of all fallible block state operations.
pub type Result<T, E = InvalidState> = std::result::Result<T, E>;
