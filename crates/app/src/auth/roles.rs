//! Roles and the pages they unlock.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access level granted by an access key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

/// A screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Entry,
    Register,
    Manage,
    Analyser,
    Export,
}

const ADMIN_PAGES: &[Page] = &[
    Page::Entry,
    Page::Register,
    Page::Manage,
    Page::Analyser,
    Page::Export,
];

const VIEWER_PAGES: &[Page] = &[Page::Analyser, Page::Export];

impl Role {
    /// Pages this role may open, in menu order.
    #[must_use]
    pub const fn pages(self) -> &'static [Page] {
        match self {
            Self::Admin => ADMIN_PAGES,
            Self::Viewer => VIEWER_PAGES,
        }
    }

    #[must_use]
    pub fn can_access(self, page: Page) -> bool {
        self.pages().contains(&page)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Register => "register",
            Self::Manage => "manage",
            Self::Analyser => "analyser",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
