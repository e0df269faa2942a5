//! Pre-export validation for documents.
//!
//! Export itself is total (the generators coerce bad data rather than
//! crash); this module is the gate that should run before export is
//! offered. Errors are accumulated, not fail-fast, so the user sees every
//! problem at once.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::models::{Challan, Invoice, Letter};

lazy_static! {
    static ref GSTIN_RE: Regex =
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[6-9]\d{9}$").unwrap();
}

/// A single field failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is required", label))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Accumulator for validation failures.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// One line per failure, suitable for direct display.
    pub fn to_message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

/// Validate that a string is not blank after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate Indian GSTIN format. Empty input is allowed (optional field).
pub fn validate_gstin(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    if !GSTIN_RE.is_match(trimmed) {
        errors.add(ValidationError::new(
            field,
            format!("'{}' is not a valid GSTIN", trimmed),
        ));
    }
}

/// Validate an Indian mobile number. Empty input is allowed.
pub fn validate_phone(value: &str, field: &str, errors: &mut ValidationErrors) {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return;
    }
    if !PHONE_RE.is_match(&digits) {
        errors.add(ValidationError::new(
            field,
            "phone number must be a 10-digit Indian mobile number",
        ));
    }
}

/// Validate that a number is finite and strictly positive.
pub fn validate_positive(value: f64, field: &str, label: &str, errors: &mut ValidationErrors) {
    if !value.is_finite() || value <= 0.0 {
        errors.add(ValidationError::new(
            field,
            format!("{} must be a positive number", label),
        ));
    }
}

/// Validate an ISO date (YYYY-MM-DD) that is not in the future.
pub fn validate_date_not_future(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    match chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => {
            if date > chrono::Local::now().date_naive() {
                errors.add(ValidationError::new(field, "date cannot be in the future"));
            }
        }
        Err(_) => errors.add(ValidationError::new(
            field,
            format!("'{}' is not a valid date (expected YYYY-MM-DD)", trimmed),
        )),
    }
}

/// Pre-export validation gate implemented by each document type.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for Invoice {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.invoice_no, "invoiceNo", "Invoice number", &mut errors);
        validate_required(
            &self.customer_name,
            "customerName",
            "Customer name",
            &mut errors,
        );
        validate_gstin(&self.party_gstin, "partyGstin", &mut errors);
        validate_date_not_future(&self.date, "date", &mut errors);

        if self.items.is_empty() {
            errors.add(ValidationError::new(
                "items",
                "at least one line item is required",
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            let field = format!("items[{}]", i);
            validate_required(
                &item.description,
                &format!("{}.description", field),
                "Item description",
                &mut errors,
            );
            validate_positive(item.qty, &format!("{}.qty", field), "Quantity", &mut errors);
            validate_positive(item.rate, &format!("{}.rate", field), "Rate", &mut errors);
        }

        errors.into_result()
    }
}

impl Validate for Challan {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.challan_no, "challanNo", "Challan number", &mut errors);
        validate_required(
            &self.recipient_name,
            "recipientName",
            "Recipient name",
            &mut errors,
        );
        validate_date_not_future(&self.date, "date", &mut errors);

        if self.items.is_empty() {
            errors.add(ValidationError::new(
                "items",
                "at least one line item is required",
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            let field = format!("items[{}]", i);
            validate_required(
                &item.description,
                &format!("{}.description", field),
                "Item description",
                &mut errors,
            );
            validate_positive(
                item.quantity,
                &format!("{}.quantity", field),
                "Quantity",
                &mut errors,
            );
        }

        errors.into_result()
    }
}

impl Validate for Letter {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(
            &self.recipient_name,
            "recipientName",
            "Recipient name",
            &mut errors,
        );
        validate_required(&self.subject, "subject", "Subject", &mut errors);
        validate_required(&self.body, "body", "Letter body", &mut errors);
        validate_date_not_future(&self.date, "date", &mut errors);

        errors.into_result()
    }
}
