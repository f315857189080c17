//! Flat-file export of customer collections.
//!
//! # Responsibility
//! - Serialize a customer sequence to CSV or JSON in a fixed column order.
//! - Keep I/O failures inside the export boundary as reported outcomes.
//!
//! # Invariants
//! - Column order is always `id,name,email,phone_number,date_of_birth,address`.
//! - An unsupported format never touches the destination file.
//! - Output is fully rendered in memory and written with a single call.

use crate::model::customer::Customer;
use log::{info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Fixed export column names, in wire order.
const COLUMNS: [&str; 6] = [
    "id",
    "name",
    "email",
    "phone_number",
    "date_of_birth",
    "address",
];

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure outcome of an export operation.
///
/// Export never panics and never lets a raw I/O error escape unwrapped;
/// every failure surfaces as one of these variants.
#[derive(Debug)]
pub enum ExportError {
    /// The requested format name is not `csv` or `json`.
    UnsupportedFormat { requested: String },
    /// Rendering the JSON document failed.
    Json { source: serde_json::Error },
    /// Writing the rendered document to disk failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat { requested } => {
                write!(
                    f,
                    "unsupported export format `{requested}`; expected csv|json"
                )
            }
            Self::Json { source } => write!(f, "failed to render JSON export: {source}"),
            Self::Io { path, source } => {
                write!(
                    f,
                    "failed to write export file `{}`: {source}",
                    path.display()
                )
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedFormat { .. } => None,
            Self::Json { source } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Supported flat-file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Parses a caller-supplied format name.
    ///
    /// # Errors
    /// - `UnsupportedFormat` for anything other than `csv` or `json`.
    pub fn parse(value: &str) -> ExportResult<Self> {
        match value {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ExportError::UnsupportedFormat {
                requested: other.to_string(),
            }),
        }
    }
}

/// Renders and writes the whole customer sequence to `path`.
///
/// # Contract
/// - Records appear in the order given, one row/object per record.
/// - The document is buffered in memory first, so a formatter failure
///   leaves the destination untouched; disk writes remain best-effort.
pub fn export_customers(
    path: &Path,
    customers: &[Customer],
    format: ExportFormat,
    delimiter: char,
) -> ExportResult<()> {
    let payload = match format {
        ExportFormat::Csv => render_csv(customers, delimiter).into_bytes(),
        ExportFormat::Json => render_json(customers)?,
    };

    if let Err(source) = std::fs::write(path, payload) {
        warn!(
            "event=export module=export status=err path={} error={source}",
            path.display()
        );
        return Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        "event=export module=export status=ok format={format:?} records={} path={}",
        customers.len(),
        path.display()
    );
    Ok(())
}

fn render_csv(customers: &[Customer], delimiter: char) -> String {
    let mut out = String::new();
    push_row(&mut out, COLUMNS.iter().map(|name| name.to_string()), delimiter);

    for customer in customers {
        push_row(
            &mut out,
            [
                customer.id().to_string(),
                customer.name().to_string(),
                customer.email().to_string(),
                customer.phone_number().to_string(),
                customer.date_of_birth().format("%Y-%m-%d").to_string(),
                customer.address().to_string(),
            ]
            .into_iter(),
            delimiter,
        );
    }

    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>, delimiter: char) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(delimiter);
        }
        first = false;
        out.push_str(&quote_csv_field(&field, delimiter));
    }
    out.push('\n');
}

/// Minimal CSV quoting: quote only when the field contains the delimiter,
/// a quote, or a line break; embedded quotes are doubled.
fn quote_csv_field(field: &str, delimiter: char) -> String {
    let needs_quoting = field.contains(delimiter)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');
    if !needs_quoting {
        return field.to_string();
    }
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn render_json(customers: &[Customer]) -> ExportResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    customers
        .serialize(&mut serializer)
        .map_err(|source| ExportError::Json { source })?;
    Ok(buffer)
}
