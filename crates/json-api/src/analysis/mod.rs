//! Price Analysis

pub(crate) mod best_price;
