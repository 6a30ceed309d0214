//! Export formats and file naming.

use crate::constants::FALLBACK_FILENAME_CUSTOMER;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless
    Png,
    /// Lossy at the configured quality
    #[serde(alias = "jpg")]
    Jpeg,
    /// Not implemented; reported as not ready
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Whether this format can be produced at all
    pub fn is_available(&self) -> bool {
        !matches!(self, ExportFormat::Pdf)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPG",
            ExportFormat::Pdf => "PDF",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("unknown export format '{}' (png, jpg, pdf)", other)),
        }
    }
}

/// `{prefix}_{customer}_{YYYY-MM-DD}.{ext}`
///
/// An empty customer name becomes `고객`; characters that cannot appear in
/// file names are replaced with `_`.
pub fn export_filename(
    prefix: &str,
    customer_name: &str,
    date: NaiveDate,
    format: ExportFormat,
) -> String {
    let customer = if customer_name.is_empty() {
        FALLBACK_FILENAME_CUSTOMER
    } else {
        customer_name
    };
    format!(
        "{}_{}_{}.{}",
        sanitize_component(prefix),
        sanitize_component(customer),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
