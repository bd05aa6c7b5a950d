//! Test Helpers

use jiff::civil::Date;

use crate::{
    domain::{
        price_logs::{
            PriceLogsService, PriceLogsServiceError,
            data::NewPriceLog,
            records::{PriceLogRecord, PriceLogUuid, TaxRate},
        },
        registry::{RegistryKind, RegistryService, RegistryServiceError, data::NewName},
    },
    test::TestContext,
};

/// Register `FLOUR` and `SUGAR` as products and `METRO` and `COSTCO` as distributors.
pub(crate) async fn seed_registry(ctx: &TestContext) -> Result<(), RegistryServiceError> {
    for (kind, name) in [
        (RegistryKind::Products, "flour"),
        (RegistryKind::Products, "sugar"),
        (RegistryKind::Distributors, "metro"),
        (RegistryKind::Distributors, "costco"),
    ] {
        ctx.registry
            .register(
                kind,
                NewName {
                    name: name.to_string(),
                },
            )
            .await?;
    }

    Ok(())
}

pub(crate) fn new_price_log(
    product: &str,
    distributor: &str,
    price: u64,
    date: Date,
) -> NewPriceLog {
    NewPriceLog {
        uuid: PriceLogUuid::new(),
        product: product.to_string(),
        distributor: distributor.to_string(),
        price,
        tax_rate: TaxRate::Reduced,
        date,
        quantity: Some(6),
        comment: Some("weekly promo".to_string()),
    }
}

pub(crate) async fn log_price(
    ctx: &TestContext,
    product: &str,
    distributor: &str,
    price: u64,
    date: Date,
) -> Result<PriceLogRecord, PriceLogsServiceError> {
    ctx.price_logs
        .create_price_log(new_price_log(product, distributor, price, date))
        .await
}
