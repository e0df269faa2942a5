//! Business document generation for a small GST-registered firm:
//! tax invoices, delivery challans and letter-pad letters, rendered as
//! paginated A4 PDFs.
//!
//! The crate splits into four layers:
//! - [`documents`] - the data model, pure edit reducers and validation
//! - [`pdf`] - the layout engine and the three document generators
//! - [`store`] - persistence of saved documents over a key-value backend
//! - [`company`] - the company record printed on every document
//!
//! Generators are pure functions from a document plus company record to
//! PDF bytes; validation gates saving and exporting but the renderers
//! themselves never reject data.

pub mod company;
pub mod documents;
pub mod pdf;
pub mod store;

pub use company::{CompanyInfo, CompanyOverrides, LogoBitmap};
pub use documents::{Challan, DocumentKind, Invoice, Letter, TaxMode, Validate};
pub use pdf::{
    generate_challan_pdf, generate_invoice_pdf, generate_letter_pdf, GeneratedDocument,
    InvoiceOptions, PdfError,
};
pub use store::{DocumentStore, FileStore, KeyValueStore, MemoryStore, Stored};
