//! Registry Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

/// Which lookup table a registry operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Products,
    Distributors,
}

impl RegistryKind {
    /// Singular noun used in log lines and error briefs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Products => "product",
            Self::Distributors => "distributor",
        }
    }
}

impl Display for RegistryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Registered Name Record
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredName {
    /// Normalised, unique name.
    pub name: String,

    /// Registration timestamp.
    pub created_at: Timestamp,
}
