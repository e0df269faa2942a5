//! Document model layer: the three document types, their pure edit
//! reducers, and the pre-export validation gate.
//!
//! Documents are immutable values; the form layer dispatches actions
//! through [`models::Invoice::reduce`] and friends instead of mutating in
//! place, so derived fields (line item amounts) can never drift.

pub mod actions;
pub mod models;
pub mod validation;

pub use actions::{ChallanAction, InvoiceAction, LetterAction};
pub use models::{
    Challan, ChallanItem, DocumentKind, Invoice, Letter, LetterTemplate, LineItem, TaxMode,
    TransportDetails,
};
pub use validation::{Validate, ValidationError, ValidationErrors};

#[cfg(test)]
mod tests;
