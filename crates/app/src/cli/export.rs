use std::{path::PathBuf, sync::Arc};

use clap::Args;
use jiff::civil::Date;
use pricebook_app::domain::{
    exports::{ExportService, PriceLogsExportService},
    price_logs::{PgPriceLogsService, data::PriceLogFilter},
};

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    /// Where to write the `.xlsx` workbook
    #[arg(long)]
    output: PathBuf,

    /// Only include this product
    #[arg(long)]
    product: Option<String>,

    /// Only include this distributor
    #[arg(long)]
    distributor: Option<String>,

    /// Earliest log date (YYYY-MM-DD), inclusive
    #[arg(long)]
    from: Option<Date>,

    /// Latest log date (YYYY-MM-DD), inclusive
    #[arg(long)]
    to: Option<Date>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ExportArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PriceLogsExportService::new(Arc::new(PgPriceLogsService::new(db)));

    let export = service
        .export_price_logs(PriceLogFilter {
            product: args.product,
            distributor: args.distributor,
            from: args.from,
            to: args.to,
        })
        .await
        .map_err(|error| format!("failed to export price logs: {error}"))?;

    tokio::fs::write(&args.output, &export.bytes)
        .await
        .map_err(|error| format!("failed to write {}: {error}", args.output.display()))?;

    println!("rows: {}", export.row_count);
    println!("output: {}", args.output.display());

    Ok(())
}
