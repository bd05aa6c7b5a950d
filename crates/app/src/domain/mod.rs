//! Pricebook domain concerns

pub mod exports;
pub mod price_logs;
pub mod registry;
