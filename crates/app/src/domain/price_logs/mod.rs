//! Price Logs

pub mod best_price;
pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::PriceLogsServiceError;
pub use service::*;
