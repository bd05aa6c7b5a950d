//! Product & Distributor Registry

mod cache;
pub mod data;
pub mod errors;
pub mod names;
pub mod records;
mod repository;
pub mod service;

pub use cache::DEFAULT_NAME_CACHE_TTL;
pub(crate) use cache::NameCache;
pub use errors::RegistryServiceError;
pub use records::RegistryKind;
pub use service::*;
