//! Data model for invoices, delivery challans and letter pads.

use serde::{Deserialize, Serialize};

/// The three document kinds managed by the store and the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Challan,
    LetterPad,
}

impl DocumentKind {
    /// Storage key backing this kind (one serialized array per kind).
    pub fn storage_key(self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoices",
            DocumentKind::Challan => "challans",
            DocumentKind::LetterPad => "letter_pads",
        }
    }
}

/// GST application mode for an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Inter-state: the full rate as IGST.
    #[default]
    Igst,
    /// Intra-state: half the rate each as CGST and SGST.
    CgstSgst,
}

/// Clamp a user-entered numeric field to a finite, non-negative value.
///
/// Invalid input normalizes to 0 rather than surfacing an error; the
/// effect shows up immediately in the derived totals.
pub fn coerce_qty(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Priced line item on a tax invoice.
///
/// `amount` is derived; it is recomputed from quantity and rate on every
/// edit and never editable on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    /// HSN/SAC classification code, blank when not applicable.
    #[serde(default)]
    pub hsn_code: String,
    #[serde(default)]
    pub qty: f64,
    #[serde(default)]
    pub rate: f64,
    /// GST rate in percent; one of 0, 5, 12, 18, 28.
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: f64,
    #[serde(default)]
    pub amount: f64,
}

fn default_tax_rate() -> f64 {
    18.0
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            description: String::new(),
            hsn_code: String::new(),
            qty: 0.0,
            rate: 0.0,
            tax_rate_percent: default_tax_rate(),
            amount: 0.0,
        }
    }
}

impl LineItem {
    /// Base amount before tax: `qty * rate` with coerced inputs.
    pub fn base_amount(&self) -> f64 {
        coerce_qty(self.qty) * coerce_qty(self.rate)
    }

    /// Recompute the derived amount in place. Idempotent.
    pub fn recompute(&mut self) {
        self.qty = coerce_qty(self.qty);
        self.rate = coerce_qty(self.rate);
        self.amount = self.base_amount();
    }
}

/// Unpriced line item on a delivery challan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallanItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub remarks: String,
}

/// Vehicle/driver block on a challan, printed only when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDetails {
    #[serde(default)]
    pub vehicle_no: String,
    #[serde(default)]
    pub driver_name: String,
}

impl TransportDetails {
    pub fn is_empty(&self) -> bool {
        self.vehicle_no.trim().is_empty() && self.driver_name.trim().is_empty()
    }
}

/// Tax invoice document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub invoice_no: String,
    /// ISO date (YYYY-MM-DD) as entered in the form.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub po_no: String,
    #[serde(default)]
    pub dc_no: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub party_gstin: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub tax_mode: TaxMode,
}

impl Invoice {
    /// Sum of base amounts across all items, inputs coerced.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::base_amount).sum()
    }

    /// The single tax rate shared by all items, if uniform.
    pub fn uniform_tax_rate(&self) -> Option<f64> {
        let mut rates = self.items.iter().map(|it| it.tax_rate_percent);
        let first = rates.next()?;
        if rates.all(|r| (r - first).abs() < f64::EPSILON) {
            Some(first)
        } else {
            None
        }
    }
}

/// Delivery challan document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challan {
    #[serde(default)]
    pub challan_no: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub supplier_address: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_address: String,
    #[serde(default)]
    pub items: Vec<ChallanItem>,
    #[serde(default)]
    pub transport_details: TransportDetails,
    #[serde(default)]
    pub terms: String,
}

impl Challan {
    /// Total of item quantities, inputs coerced.
    pub fn total_quantity(&self) -> f64 {
        self.items.iter().map(|it| coerce_qty(it.quantity)).sum()
    }
}

/// Letter template controlling salutation and closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterTemplate {
    #[default]
    Formal,
    Semiformal,
}

/// Business letter on company letterhead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    #[serde(default)]
    pub ref_no: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_address: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub sender_designation: String,
    #[serde(default)]
    pub template: LetterTemplate,
}

impl Letter {
    /// Salutation line derived from the template.
    pub fn salutation(&self) -> String {
        match self.template {
            LetterTemplate::Formal => "Dear Sir/Madam,".to_string(),
            LetterTemplate::Semiformal => {
                let name = self.recipient_name.trim();
                if name.is_empty() {
                    "Dear Sir/Madam,".to_string()
                } else {
                    format!("Dear {},", name)
                }
            }
        }
    }

    /// Closing line derived from the template.
    pub fn closing(&self) -> &'static str {
        match self.template {
            LetterTemplate::Formal => "Yours faithfully,",
            LetterTemplate::Semiformal => "Yours sincerely,",
        }
    }
}
