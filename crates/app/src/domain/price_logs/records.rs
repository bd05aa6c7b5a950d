//! Price Log Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Price Log UUID
pub type PriceLogUuid = TypedUuid<PriceLogRecord>;

/// Tax rate applied to a logged price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRate {
    #[serde(rename = "5.5%")]
    Reduced,

    #[serde(rename = "20%")]
    Standard,

    #[default]
    #[serde(rename = "No tax")]
    NoTax,
}

impl TaxRate {
    pub const ALL: [Self; 3] = [Self::Reduced, Self::Standard, Self::NoTax];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reduced => "5.5%",
            Self::Standard => "20%",
            Self::NoTax => "No tax",
        }
    }
}

impl Display for TaxRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown tax rate: {0}")]
pub struct UnknownTaxRate(pub String);

impl FromStr for TaxRate {
    type Err = UnknownTaxRate;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.as_str() == value)
            .ok_or_else(|| UnknownTaxRate(value.to_string()))
    }
}

/// Price Log Record
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLogRecord {
    pub uuid: PriceLogUuid,

    /// Registered product name.
    pub product: String,

    /// Registered distributor name.
    pub distributor: String,

    /// Price excluding tax, in cents.
    pub price: u64,

    pub tax_rate: TaxRate,

    /// Day the price was observed.
    pub date: Date,

    pub quantity: Option<u32>,

    pub comment: Option<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rate_parses_display_strings() {
        for rate in TaxRate::ALL {
            assert_eq!(rate.to_string().parse::<TaxRate>().ok(), Some(rate));
        }
    }

    #[test]
    fn tax_rate_rejects_unknown_strings() {
        assert!("7%".parse::<TaxRate>().is_err());
    }

    #[test]
    fn tax_rate_defaults_to_no_tax() {
        assert_eq!(TaxRate::default(), TaxRate::NoTax);
    }

    #[test]
    fn tax_rate_serialises_as_label() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&TaxRate::Reduced)?, "\"5.5%\"");
        assert_eq!(
            serde_json::from_str::<TaxRate>("\"No tax\"")?,
            TaxRate::NoTax
        );

        Ok(())
    }
}
