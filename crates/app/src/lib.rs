//! Pricebook domain, persistence, and access control.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod money;
#[cfg(test)]
mod test;
pub mod uuids;
