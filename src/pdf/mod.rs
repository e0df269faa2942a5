//! PDF generation - renders documents into paginated A4 output.
//!
//! One generator module per document type:
//! - `invoice` - tax invoice with GST summary and bank/terms blocks
//! - `challan` - delivery challan with transport and signature blocks
//! - `letter` - letter pad with flowed body text
//!
//! All three sit on the same layout engine: `canvas` (owned page canvas),
//! `metrics` (text measurement/wrapping), `table` (flowing, row-atomic
//! item table) and `common` (headers, footer, space reservation, numeric
//! helpers).

pub mod canvas;
pub mod challan;
pub mod common;
pub mod invoice;
pub mod letter;
pub mod metrics;
pub mod style;
pub mod table;

pub use challan::generate_challan_pdf;
pub use invoice::{generate_invoice_pdf, InvoiceOptions};
pub use letter::generate_letter_pdf;

use thiserror::Error;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to load builtin font: {0}")]
    FontLoad(#[source] printpdf::Error),
    #[error("failed to serialize PDF document: {0}")]
    Save(#[source] printpdf::Error),
    #[error("failed to flush PDF output buffer: {0}")]
    Flush(#[source] std::io::Error),
}

/// Result of a successful document render.
#[derive(Debug)]
pub struct GeneratedDocument {
    /// Suggested download filename.
    pub filename: String,
    /// The finished PDF bytes.
    pub pdf: Vec<u8>,
    /// Number of pages emitted.
    pub pages: usize,
}

/// Replace every non-alphanumeric run in a name with underscores, for use
/// in filenames.
pub(crate) fn underscored(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_underscore = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_underscore = false;
        } else if !last_underscore && !out.is_empty() {
            out.push('_');
            last_underscore = true;
        }
    }
    let trimmed = out.trim_end_matches('_');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}
