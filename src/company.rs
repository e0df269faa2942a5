//! Company configuration used on every generated document.
//!
//! The company record is supplied by the caller at export time; generators
//! never look it up from ambient state. Missing fields fall back to the
//! built-in defaults via a shallow merge.

use serde::{Deserialize, Serialize};

/// Raw RGB8 logo bitmap, pre-decoded by the caller.
///
/// The PDF layer embeds the pixels directly; decoding image files is out of
/// scope here. `data` must hold exactly `width * height * 3` bytes, anything
/// else is rejected (with a warning) at draw time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoBitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl LogoBitmap {
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.data.len() == self.width * self.height * 3
    }
}

/// Fixed company record printed in document headers and bank blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub gstin: String,
    pub contacts: String,
    pub bank_title: String,
    pub bank_name: String,
    pub account_no: String,
    pub branch: String,
    pub ifsc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoBitmap>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "SURYA POWER".to_string(),
            tagline: "DG Set Hiring, Old DG Set Buying, Selling & Servicing".to_string(),
            address: "No.1/11, G.N.T Road, Padiyanallur Redhills, Chennai, Thiruvallur, \
                      Tamil Nadu - 600 052"
                .to_string(),
            gstin: "33AKNPR3914K1ZT".to_string(),
            contacts: "Mob: 9790987190 / 9840841887".to_string(),
            bank_title: "TAMILNAD MERCANTILE BANK".to_string(),
            bank_name: "SURYA POWER".to_string(),
            account_no: "22815005800163".to_string(),
            branch: "NARAVARIKUPPAM BRANCH".to_string(),
            ifsc: "TMBL0000228".to_string(),
            logo: None,
        }
    }
}

/// Partial company override, merged over the defaults field by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOverrides {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub address: Option<String>,
    pub gstin: Option<String>,
    pub contacts: Option<String>,
    pub bank_title: Option<String>,
    pub bank_name: Option<String>,
    pub account_no: Option<String>,
    pub branch: Option<String>,
    pub ifsc: Option<String>,
    pub logo: Option<LogoBitmap>,
}

impl CompanyOverrides {
    /// Apply the overrides on top of the default record.
    pub fn apply(self) -> CompanyInfo {
        let mut info = CompanyInfo::default();
        if let Some(v) = self.name {
            info.name = v;
        }
        if let Some(v) = self.tagline {
            info.tagline = v;
        }
        if let Some(v) = self.address {
            info.address = v;
        }
        if let Some(v) = self.gstin {
            info.gstin = v;
        }
        if let Some(v) = self.contacts {
            info.contacts = v;
        }
        if let Some(v) = self.bank_title {
            info.bank_title = v;
        }
        if let Some(v) = self.bank_name {
            info.bank_name = v;
        }
        if let Some(v) = self.account_no {
            info.account_no = v;
        }
        if let Some(v) = self.branch {
            info.branch = v;
        }
        if let Some(v) = self.ifsc {
            info.ifsc = v;
        }
        if let Some(v) = self.logo {
            info.logo = Some(v);
        }
        info
    }
}
