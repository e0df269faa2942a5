//! Pure edit reducers for the document types.
//!
//! The form layer dispatches an action and receives a new document value;
//! nothing mutates in place. Item reducers re-derive `amount` after every
//! numeric edit, so a repeated identical edit is a no-op.

use super::models::{coerce_qty, Challan, ChallanItem, Invoice, Letter, LetterTemplate, LineItem, TaxMode};

/// Edit operations on an invoice.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceAction {
    SetInvoiceNo { invoice_no: String },
    SetDate { date: String },
    SetPoNo { po_no: String },
    SetDcNo { dc_no: String },
    SetCustomerName { customer_name: String },
    SetCustomerAddress { customer_address: String },
    SetPartyGstin { party_gstin: String },
    SetTaxMode { tax_mode: TaxMode },
    AddItem,
    RemoveItem { index: usize },
    SetItemDescription { index: usize, description: String },
    SetItemHsnCode { index: usize, hsn_code: String },
    SetItemQty { index: usize, qty: f64 },
    SetItemRate { index: usize, rate: f64 },
    SetItemTaxRate { index: usize, tax_rate_percent: f64 },
}

/// Edit operations on a challan.
#[derive(Debug, Clone, PartialEq)]
pub enum ChallanAction {
    SetChallanNo { challan_no: String },
    SetDate { date: String },
    SetSupplierName { supplier_name: String },
    SetSupplierAddress { supplier_address: String },
    SetRecipientName { recipient_name: String },
    SetRecipientAddress { recipient_address: String },
    SetVehicleNo { vehicle_no: String },
    SetDriverName { driver_name: String },
    SetTerms { terms: String },
    AddItem,
    RemoveItem { index: usize },
    SetItemDescription { index: usize, description: String },
    SetItemQuantity { index: usize, quantity: f64 },
    SetItemUnit { index: usize, unit: String },
    SetItemRemarks { index: usize, remarks: String },
}

/// Edit operations on a letter.
#[derive(Debug, Clone, PartialEq)]
pub enum LetterAction {
    SetRefNo { ref_no: String },
    SetDate { date: String },
    SetRecipientName { recipient_name: String },
    SetRecipientAddress { recipient_address: String },
    SetSubject { subject: String },
    SetBody { body: String },
    SetSenderName { sender_name: String },
    SetSenderDesignation { sender_designation: String },
    SetTemplate { template: LetterTemplate },
}

impl Invoice {
    /// Apply one action, returning the updated invoice.
    ///
    /// Out-of-range indices leave the document unchanged.
    pub fn reduce(mut self, action: InvoiceAction) -> Invoice {
        match action {
            InvoiceAction::SetInvoiceNo { invoice_no } => self.invoice_no = invoice_no,
            InvoiceAction::SetDate { date } => self.date = date,
            InvoiceAction::SetPoNo { po_no } => self.po_no = po_no,
            InvoiceAction::SetDcNo { dc_no } => self.dc_no = dc_no,
            InvoiceAction::SetCustomerName { customer_name } => self.customer_name = customer_name,
            InvoiceAction::SetCustomerAddress { customer_address } => {
                self.customer_address = customer_address
            }
            InvoiceAction::SetPartyGstin { party_gstin } => self.party_gstin = party_gstin,
            InvoiceAction::SetTaxMode { tax_mode } => self.tax_mode = tax_mode,
            InvoiceAction::AddItem => self.items.push(LineItem::default()),
            InvoiceAction::RemoveItem { index } => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
            InvoiceAction::SetItemDescription { index, description } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.description = description;
                }
            }
            InvoiceAction::SetItemHsnCode { index, hsn_code } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.hsn_code = hsn_code;
                }
            }
            InvoiceAction::SetItemQty { index, qty } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.qty = coerce_qty(qty);
                    item.recompute();
                }
            }
            InvoiceAction::SetItemRate { index, rate } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.rate = coerce_qty(rate);
                    item.recompute();
                }
            }
            InvoiceAction::SetItemTaxRate {
                index,
                tax_rate_percent,
            } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.tax_rate_percent = coerce_qty(tax_rate_percent);
                    item.recompute();
                }
            }
        }
        self
    }
}

impl Challan {
    /// Apply one action, returning the updated challan.
    pub fn reduce(mut self, action: ChallanAction) -> Challan {
        match action {
            ChallanAction::SetChallanNo { challan_no } => self.challan_no = challan_no,
            ChallanAction::SetDate { date } => self.date = date,
            ChallanAction::SetSupplierName { supplier_name } => self.supplier_name = supplier_name,
            ChallanAction::SetSupplierAddress { supplier_address } => {
                self.supplier_address = supplier_address
            }
            ChallanAction::SetRecipientName { recipient_name } => {
                self.recipient_name = recipient_name
            }
            ChallanAction::SetRecipientAddress { recipient_address } => {
                self.recipient_address = recipient_address
            }
            ChallanAction::SetVehicleNo { vehicle_no } => {
                self.transport_details.vehicle_no = vehicle_no
            }
            ChallanAction::SetDriverName { driver_name } => {
                self.transport_details.driver_name = driver_name
            }
            ChallanAction::SetTerms { terms } => self.terms = terms,
            ChallanAction::AddItem => self.items.push(ChallanItem::default()),
            ChallanAction::RemoveItem { index } => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
            ChallanAction::SetItemDescription { index, description } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.description = description;
                }
            }
            ChallanAction::SetItemQuantity { index, quantity } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = coerce_qty(quantity);
                }
            }
            ChallanAction::SetItemUnit { index, unit } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.unit = unit;
                }
            }
            ChallanAction::SetItemRemarks { index, remarks } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.remarks = remarks;
                }
            }
        }
        self
    }
}

impl Letter {
    /// Apply one action, returning the updated letter.
    pub fn reduce(mut self, action: LetterAction) -> Letter {
        match action {
            LetterAction::SetRefNo { ref_no } => self.ref_no = ref_no,
            LetterAction::SetDate { date } => self.date = date,
            LetterAction::SetRecipientName { recipient_name } => {
                self.recipient_name = recipient_name
            }
            LetterAction::SetRecipientAddress { recipient_address } => {
                self.recipient_address = recipient_address
            }
            LetterAction::SetSubject { subject } => self.subject = subject,
            LetterAction::SetBody { body } => self.body = body,
            LetterAction::SetSenderName { sender_name } => self.sender_name = sender_name,
            LetterAction::SetSenderDesignation { sender_designation } => {
                self.sender_designation = sender_designation
            }
            LetterAction::SetTemplate { template } => self.template = template,
        }
        self
    }
}
