//! Single-sheet `.xlsx` dump of price log rows.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::{
    domain::{exports::errors::ExportServiceError, price_logs::records::PriceLogRecord},
    money::minor_to_decimal,
};

/// Worksheet name used for the dump.
pub const SHEET_NAME: &str = "Price logs";

/// Header row, in column order.
pub const COLUMNS: [&str; 8] = [
    "id",
    "date",
    "product",
    "distributor",
    "price",
    "tax_rate",
    "quantity",
    "comment",
];

/// Data rows that fit on one sheet below the header row.
pub const MAX_DATA_ROWS: usize = 1_048_575;

/// Write `rows` under a header row and return the workbook bytes.
pub fn write_price_logs_workbook(rows: &[PriceLogRecord]) -> Result<Vec<u8>, ExportServiceError> {
    check_capacity(rows.len())?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in (0_u16..).zip(COLUMNS) {
        worksheet.write_string(0, col, title)?;
    }

    for (index, record) in rows.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_overflow| ExportServiceError::TooManyRows)?;

        write_record(worksheet, row, record)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn check_capacity(row_count: usize) -> Result<(), ExportServiceError> {
    if row_count > MAX_DATA_ROWS {
        return Err(ExportServiceError::TooManyRows);
    }

    Ok(())
}

fn write_record(
    worksheet: &mut Worksheet,
    row: u32,
    record: &PriceLogRecord,
) -> Result<(), XlsxError> {
    worksheet.write_string(row, 0, record.uuid.to_string())?;
    worksheet.write_string(row, 1, record.date.to_string())?;
    worksheet.write_string(row, 2, &record.product)?;
    worksheet.write_string(row, 3, &record.distributor)?;

    let price = minor_to_decimal(record.price);

    match price.to_f64() {
        Some(value) => worksheet.write_number(row, 4, value)?,
        None => worksheet.write_string(row, 4, price.to_string())?,
    };

    worksheet.write_string(row, 5, record.tax_rate.as_str())?;

    if let Some(quantity) = record.quantity {
        worksheet.write_number(row, 6, f64::from(quantity))?;
    }

    if let Some(comment) = &record.comment {
        worksheet.write_string(row, 7, comment)?;
    }

    Ok(())
}
