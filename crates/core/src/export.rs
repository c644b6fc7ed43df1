//! CSV formatting for the activity feed export.
//!
//! Descriptions and metadata routinely contain commas, quotes, and JSON, so
//! unlike simpler exports every field goes through RFC 4180 quoting.

/// Header row of the activity export, matching the feed columns.
pub const EXPORT_HEADER: &str =
    "Date,Type,Staff Name,Role,Action,Description,Table,Record ID,Metadata";

/// Quote a single CSV field if it contains a delimiter, quote, or newline.
/// Embedded quotes are doubled per RFC 4180.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join fields into one CSV line (no trailing newline).
pub fn csv_line(fields: &[&str]) -> String {
    fields.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(",")
}
