//! CSV export of the transaction collection.
//!
//! Fields are written as-is with no quoting, so a description containing a
//! comma shifts the columns of its row. Readers of these files have always
//! received that shape.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::dates::format_iso_date;
use crate::model::Transaction;
use crate::{ClientError, ClientResult};

pub const CSV_HEADER: [&str; 5] = ["Date", "Description", "Category", "Type", "Amount"];

pub fn default_file_name(today: NaiveDate) -> String {
    format!("expenses-{}.csv", format_iso_date(&today))
}

pub fn render_csv(transactions: &[Transaction]) -> ClientResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for transaction in transactions {
        let date = format_iso_date(&transaction.date);
        let amount = transaction.amount.normalize().to_string();
        writer
            .write_record([
                date.as_str(),
                transaction.description.as_str(),
                transaction.category.as_str(),
                transaction.kind.as_str(),
                amount.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| ClientError::internal_serialization(&error.to_string()))
}

pub fn write_export(path: &Path, contents: &str) -> ClientResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(ClientError::export_failed(path, "parent directory does not exist"));
    }
    fs::write(path, contents).map_err(|error| ClientError::export_failed(path, &error.to_string()))?;
    tracing::debug!("wrote {} bytes of CSV to {}", contents.len(), path.display());
    Ok(())
}

fn csv_error(error: csv::Error) -> ClientError {
    ClientError::internal_serialization(&error.to_string())
}
