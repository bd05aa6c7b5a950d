//! Price Log Export Handler

use std::sync::Arc;

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    oapi::extract::QueryParam,
    prelude::*,
};
use tracing::info;

use crate::{
    exports::errors::into_status_error, extensions::*, observability::record_exported_rows,
    price_logs::index::filter_from_query, state::State,
};

/// MIME type of `.xlsx` workbooks.
pub(crate) const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Price Log Export Handler
///
/// Downloads the filtered price logs as an `.xlsx` workbook.
#[endpoint(
    tags("exports"),
    summary = "Export Price Logs",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Workbook"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: QueryParam<String, false>,
    distributor: QueryParam<String, false>,
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = filter_from_query(product, distributor, from, to)?;

    let export = state
        .app
        .exports
        .export_price_logs(filter)
        .await
        .map_err(into_status_error)?;

    record_exported_rows(export.row_count);

    info!(rows = export.row_count, "price log export served");

    res.add_header(CONTENT_TYPE, XLSX_CONTENT_TYPE, true)
        .or_500("failed to set content type header")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
            true,
        )
        .or_500("failed to set content disposition header")?;

    res.write_body(export.bytes)
        .or_500("failed to write workbook body")?;

    Ok(())
}
