//! Price Log Data

use jiff::civil::Date;

use crate::domain::{
    price_logs::{
        errors::PriceLogsServiceError,
        records::{PriceLogUuid, TaxRate},
    },
    registry::names::normalise_name,
};

/// New Price Log Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceLog {
    pub uuid: PriceLogUuid,
    pub product: String,
    pub distributor: String,
    pub price: u64,
    pub tax_rate: TaxRate,
    pub date: Date,
    pub quantity: Option<u32>,
    pub comment: Option<String>,
}

impl NewPriceLog {
    /// Normalise names and comment, rejecting entries the entry form would refuse.
    pub(crate) fn validated(self) -> Result<Self, PriceLogsServiceError> {
        let product = required_name(&self.product)?;
        let distributor = required_name(&self.distributor)?;

        check_price(self.price)?;

        if let Some(quantity) = self.quantity {
            check_quantity(quantity)?;
        }

        Ok(Self {
            product,
            distributor,
            comment: self.comment.as_deref().and_then(trimmed_comment),
            ..self
        })
    }
}

/// Partial update of a price log; `None` leaves the stored value untouched.
///
/// A `Some` comment that is blank clears the stored comment. `clear_quantity` clears the
/// stored quantity and cannot be combined with a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceLogUpdate {
    pub product: Option<String>,
    pub distributor: Option<String>,
    pub price: Option<u64>,
    pub tax_rate: Option<TaxRate>,
    pub date: Option<Date>,
    pub quantity: Option<u32>,
    pub clear_quantity: bool,
    pub comment: Option<String>,
}

impl PriceLogUpdate {
    /// `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn validated(self) -> Result<Self, PriceLogsServiceError> {
        let product = self.product.as_deref().map(required_name).transpose()?;
        let distributor = self.distributor.as_deref().map(required_name).transpose()?;

        if let Some(price) = self.price {
            check_price(price)?;
        }

        if let Some(quantity) = self.quantity {
            if self.clear_quantity {
                return Err(PriceLogsServiceError::InvalidData);
            }

            check_quantity(quantity)?;
        }

        Ok(Self {
            product,
            distributor,
            comment: self.comment.map(|comment| comment.trim().to_string()),
            ..self
        })
    }
}

/// Row selection for listing and exporting price logs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceLogFilter {
    pub product: Option<String>,
    pub distributor: Option<String>,

    /// Inclusive lower date bound.
    pub from: Option<Date>,

    /// Inclusive upper date bound.
    pub to: Option<Date>,
}

impl PriceLogFilter {
    #[must_use]
    pub fn for_product(product: impl Into<String>) -> Self {
        Self {
            product: Some(product.into()),
            ..Self::default()
        }
    }

    pub(crate) fn validated(self) -> Result<Self, PriceLogsServiceError> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(PriceLogsServiceError::InvalidData);
        }

        Ok(Self {
            product: self.product.as_deref().map(normalise_name),
            distributor: self.distributor.as_deref().map(normalise_name),
            ..self
        })
    }
}

/// One edited grid row.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLogEdit {
    pub uuid: PriceLogUuid,
    pub update: PriceLogUpdate,
}

/// Edited and deleted rows collected from the management grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceLogCommit {
    pub edits: Vec<PriceLogEdit>,
    pub deletions: Vec<PriceLogUuid>,
}

/// Rows touched by a committed grid change set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub updated: usize,
    pub deleted: usize,
}

fn required_name(name: &str) -> Result<String, PriceLogsServiceError> {
    let name = normalise_name(name);

    if name.is_empty() {
        return Err(PriceLogsServiceError::MissingRequiredData);
    }

    Ok(name)
}

fn check_price(price: u64) -> Result<(), PriceLogsServiceError> {
    if price == 0 {
        return Err(PriceLogsServiceError::InvalidData);
    }

    i64::try_from(price)?;

    Ok(())
}

fn check_quantity(quantity: u32) -> Result<(), PriceLogsServiceError> {
    if quantity == 0 {
        return Err(PriceLogsServiceError::InvalidData);
    }

    i32::try_from(quantity)?;

    Ok(())
}

fn trimmed_comment(comment: &str) -> Option<String> {
    let comment = comment.trim();

    (!comment.is_empty()).then(|| comment.to_string())
}
