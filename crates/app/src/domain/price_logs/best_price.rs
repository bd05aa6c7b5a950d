//! Best-price lookup over a product's price history.

use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::domain::price_logs::records::PriceLogRecord;

/// Lowest logged price for a product and every distributor offering it.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPrice {
    pub product: String,

    /// Minimum price in cents.
    pub price: u64,

    /// Distributors tied at the minimum, most recent observation first.
    pub distributors: SmallVec<[String; 3]>,

    /// Every row for the product, newest first.
    pub history: Vec<PriceLogRecord>,
}

/// Reduce a set of price logs to the best price for `product`.
///
/// Rows for other products are ignored. Returns `None` when nothing was
/// logged for the product. Ties are not broken: every distributor logged at
/// the minimum is reported once.
#[must_use]
pub fn best_price_of(product: &str, rows: Vec<PriceLogRecord>) -> Option<BestPrice> {
    let mut history: Vec<PriceLogRecord> =
        rows.into_iter().filter(|row| row.product == product).collect();

    history.sort_by_key(|row| Reverse((row.date, row.created_at)));

    let price = history.iter().map(|row| row.price).min()?;

    let mut distributors = SmallVec::new();

    for row in history.iter().filter(|row| row.price == price) {
        if !distributors.contains(&row.distributor) {
            distributors.push(row.distributor.clone());
        }
    }

    Some(BestPrice {
        product: product.to_string(),
        price,
        distributors,
        history,
    })
}
