//! Service-level test infrastructure backed by a real `PostgreSQL`.

mod context;
mod db;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
