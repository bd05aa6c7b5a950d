//! Authentication

mod errors;
mod keys;
mod roles;
mod service;

pub use errors::*;
pub use keys::*;
pub use roles::*;
pub use service::*;
