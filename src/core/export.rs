// ScanShelf - core/export.rs
//
// CSV and JSON export of a catalog page.
// Core layer: writes to any Write trait object.

use crate::core::format;
use crate::core::model::{Page, ProfileRecord};
use crate::util::error::ExportError;
use std::io::Write;

/// Export page records to CSV.
///
/// Writes: filename, name, captured_at (RFC 3339), date, requests, visits,
/// bytes, size. Raw and display values sit side by side so spreadsheets can
/// sort on the raw columns.
pub fn export_csv<W: Write>(records: &[ProfileRecord], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "filename",
            "name",
            "captured_at",
            "date",
            "requests",
            "visits",
            "bytes",
            "size",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        let captured_at = record.captured_at().to_rfc3339();
        let date = format::format_captured_at(record.captured_at());
        let requests = record.request_count().to_string();
        let visits = format::format_count(record.request_count());
        let bytes = record.byte_size().to_string();
        let size = format::readable_size(record.byte_size());

        csv_writer
            .write_record([
                record.filename(),
                record.display_name(),
                captured_at.as_str(),
                date.as_str(),
                requests.as_str(),
                visits.as_str(),
                bytes.as_str(),
                size.as_str(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export a whole page (records plus pagination totals) as pretty JSON.
pub fn export_json<W: Write>(page: &Page, writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, page).map_err(|e| ExportError::Json { source: e })?;
    Ok(page.items.len())
}
