//! Price Log Handlers

use jiff::civil::Date;
use salvo::prelude::StatusError;

use pricebook_app::domain::price_logs::records::TaxRate;

use crate::extensions::*;

pub(crate) mod commit;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

fn parse_date(value: &str) -> Result<Date, StatusError> {
    value
        .trim()
        .parse::<Date>()
        .or_400("date must be formatted as YYYY-MM-DD")
}

fn parse_tax_rate(value: &str) -> Result<TaxRate, StatusError> {
    value
        .parse::<TaxRate>()
        .or_400("tax_rate must be one of \"5.5%\", \"20%\", \"No tax\"")
}
