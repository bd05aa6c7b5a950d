//! Authentication

pub(crate) mod guard;
pub(crate) mod middleware;

pub(crate) use guard::RequirePage;
