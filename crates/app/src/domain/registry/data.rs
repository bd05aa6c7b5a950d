//! Registry Data

/// New Name Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewName {
    /// Name as typed; normalised before storage.
    pub name: String,
}

/// Result of a live availability check.
#[derive(Debug, Clone, PartialEq)]
pub struct NameAvailability {
    /// Name as typed.
    pub name: String,

    /// Name after normalisation.
    pub normalised: String,

    /// `true` when the normalised name is non-empty and not yet registered.
    pub available: bool,
}
