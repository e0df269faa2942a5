//! Shared building blocks for the document generators: page headers and
//! footer, space reservation across page breaks, and the numeric helpers
//! (money formatting, GST breakup, amount-in-words).

use crate::company::CompanyInfo;
use crate::documents::TaxMode;

use super::canvas::{Align, Canvas, FontStyle};
use super::metrics::split_text_to_size;
use super::style::*;

/// Format a monetary value with two fixed decimals.
///
/// Fail-safe: non-finite input renders as `0.00`.
pub fn to_money(value: f64) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    format!("{:.2}", v)
}

/// Format a quantity: whole numbers print without a decimal point,
/// fractional ones keep their natural representation.
pub fn format_quantity(value: f64) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO date (YYYY-MM-DD) as "15 January 2024".
///
/// Empty input renders as "N/A"; anything unparseable passes through
/// unchanged rather than failing the export.
pub fn format_date(date: &str) -> String {
    use chrono::Datelike;

    let trimmed = date.trim();
    if trimmed.is_empty() {
        return "N/A".to_string();
    }
    match chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(d) => format!(
            "{} {} {}",
            d.day(),
            MONTHS[(d.month0() as usize).min(MONTHS.len() - 1)],
            d.year()
        ),
        Err(_) => trimmed.to_string(),
    }
}

/// GST amounts split by mode. Exactly one of `igst` or the
/// `cgst`/`sgst` pair is nonzero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GstBreakup {
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
}

impl GstBreakup {
    pub fn total(&self) -> f64 {
        self.igst + self.cgst + self.sgst
    }
}

/// Split a GST amount for `base` at `rate` percent.
///
/// IGST mode carries the whole rate; CGST/SGST mode applies half the
/// rate symmetrically to each component.
pub fn gst_breakup(base: f64, rate: f64, mode: TaxMode) -> GstBreakup {
    let base = if base.is_finite() { base } else { 0.0 };
    let rate = if rate.is_finite() { rate } else { 0.0 };
    match mode {
        TaxMode::Igst => GstBreakup {
            igst: base * rate / 100.0,
            cgst: 0.0,
            sgst: 0.0,
        },
        TaxMode::CgstSgst => {
            let half = base * (rate / 2.0) / 100.0;
            GstBreakup {
                igst: 0.0,
                cgst: half,
                sgst: half,
            }
        }
    }
}

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

fn words_below_thousand(mut x: u64) -> String {
    let mut r = String::new();
    if x >= 100 {
        r.push_str(ONES[(x / 100) as usize]);
        r.push_str(" hundred ");
        x %= 100;
    }
    if x >= 20 {
        r.push_str(TENS[(x / 10) as usize]);
        r.push(' ');
        if x % 10 != 0 {
            r.push_str(ONES[(x % 10) as usize]);
        }
    } else if x >= 10 {
        r.push_str(TEENS[(x - 10) as usize]);
    } else if x > 0 {
        r.push_str(ONES[x as usize]);
    }
    r.trim().to_string()
}

/// Convert a number to words in the Indian system
/// (crore/lakh/thousand/hundred grouping).
///
/// The input is floored to an integer; non-finite or negative input
/// coerces to 0 and reads "zero". Pure - same input, same output.
pub fn number_to_words_indian(num: f64) -> String {
    let n = if num.is_finite() && num > 0.0 {
        num.floor() as u64
    } else {
        0
    };
    if n == 0 {
        return "zero".to_string();
    }

    let crore = n / 10_000_000;
    let lakh = (n % 10_000_000) / 100_000;
    let thousand = (n % 100_000) / 1_000;
    let rest = n % 1_000;

    let mut res = String::new();
    if crore > 0 {
        res.push_str(&words_below_thousand(crore));
        res.push_str(" crore ");
    }
    if lakh > 0 {
        res.push_str(&words_below_thousand(lakh));
        res.push_str(" lakh ");
    }
    if thousand > 0 {
        res.push_str(&words_below_thousand(thousand));
        res.push_str(" thousand ");
    }
    if rest > 0 {
        res.push_str(&words_below_thousand(rest));
    }
    res.trim().to_string()
}

/// Reserve `required` millimetres of vertical space above the footer.
///
/// When the space below `current_y` is insufficient, a new page is
/// emitted, `redraw` repaints the page decorations and returns the fresh
/// content cursor; otherwise `current_y` comes back unchanged. This is
/// what keeps trailing blocks (bank details, terms, signatures) from
/// straddling a page boundary.
pub fn ensure_space<F>(canvas: &mut Canvas, current_y: f32, required: f32, redraw: F) -> f32
where
    F: FnOnce(&mut Canvas) -> f32,
{
    let remaining = PAGE_HEIGHT - current_y - MARGIN_FOOTER_BOTTOM;
    if remaining < required {
        canvas.add_page();
        redraw(canvas)
    } else {
        current_y
    }
}

/// Centered invoice-style header: title, company block, GSTIN under the
/// logo slot, right-aligned contacts, primary rule at y=40.
///
/// Idempotent per page; returns the Y below which body content may begin.
pub fn invoice_header(canvas: &Canvas, document_title: &str, company: &CompanyInfo) -> f32 {
    let margin = MARGIN_PAGE;
    let center = PAGE_WIDTH / 2.0;

    if let Some(logo) = &company.logo {
        canvas.draw_logo(logo, margin, 8.0, LOGO_WIDTH, LOGO_HEIGHT);
    }
    let after_logo_y = 8.0 + LOGO_HEIGHT + 4.0;
    canvas.text(
        &format!("GSTIN: {}", company.gstin),
        FONT_SMALL,
        margin,
        after_logo_y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );

    canvas.text(
        document_title,
        FONT_HEADER,
        center,
        15.0,
        FontStyle::Bold,
        Align::Center,
        COLOR_TEXT,
    );
    canvas.text(
        &company.name,
        FONT_TITLE,
        center,
        24.0,
        FontStyle::Bold,
        Align::Center,
        COLOR_PRIMARY,
    );
    canvas.text(
        &company.tagline,
        FONT_SMALL,
        center,
        30.0,
        FontStyle::Regular,
        Align::Center,
        COLOR_TEXT,
    );
    canvas.text(
        &company.address,
        FONT_SMALL,
        center,
        35.0,
        FontStyle::Regular,
        Align::Center,
        COLOR_TEXT,
    );
    canvas.text(
        &company.contacts,
        FONT_SMALL,
        PAGE_WIDTH - margin,
        15.0,
        FontStyle::Regular,
        Align::Right,
        COLOR_TEXT,
    );

    canvas.line(margin, 40.0, PAGE_WIDTH - margin, 40.0, 0.8, COLOR_PRIMARY);
    40.0
}

/// Logo-left company letterhead used by the challan and letter layouts:
/// name, italic tagline, wrapped address, contacts/GSTIN line, then a
/// black rule. Returns the Y just below the rule.
pub fn company_letterhead(canvas: &Canvas, company: &CompanyInfo, margin: f32) -> f32 {
    let mut y = margin;
    if let Some(logo) = &company.logo {
        canvas.draw_logo(logo, margin, y, LOGO_WIDTH, LOGO_HEIGHT);
    }
    y += 5.0;
    let text_x = margin + LOGO_WIDTH + 5.0;

    canvas.text(
        &company.name,
        FONT_HEADER,
        text_x,
        y,
        FontStyle::Bold,
        Align::Left,
        COLOR_PRIMARY,
    );
    y += 6.0;
    canvas.text(
        &company.tagline,
        FONT_SMALL,
        text_x,
        y,
        FontStyle::Italic,
        Align::Left,
        COLOR_TEXT,
    );
    y += 5.0;

    let address_width = PAGE_WIDTH - 2.0 * margin - LOGO_WIDTH - 5.0;
    let address_lines = split_text_to_size(&company.address, address_width, FONT_TINY);
    for line in &address_lines {
        canvas.text(
            line,
            FONT_TINY,
            text_x,
            y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        y += 4.0;
    }

    canvas.text(
        &format!("{} | GSTIN: {}", company.contacts, company.gstin),
        FONT_TINY,
        text_x,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    y += 8.0;

    canvas.line(margin, y, PAGE_WIDTH - margin, y, 0.5, COLOR_TEXT);
    y + 10.0
}

/// Challan page header: letterhead, centered document title, then the
/// challan number and date row. Returns the content start Y.
pub fn challan_header(
    canvas: &Canvas,
    challan_no: &str,
    date: &str,
    company: &CompanyInfo,
) -> f32 {
    let margin = MARGIN_PAGE_LARGE;
    let mut y = company_letterhead(canvas, company, margin);

    canvas.text(
        "DELIVERY CHALLAN",
        FONT_SUBHEADER,
        PAGE_WIDTH / 2.0,
        y,
        FontStyle::Bold,
        Align::Center,
        COLOR_PRIMARY,
    );
    y += 10.0;

    let no = if challan_no.trim().is_empty() {
        "N/A"
    } else {
        challan_no
    };
    canvas.text(
        &format!("Challan No: {}", no),
        FONT_BODY,
        margin,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    canvas.text(
        &format!("Date: {}", format_date(date)),
        FONT_BODY,
        PAGE_WIDTH - margin - 50.0,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    y + 10.0
}

/// Footer: 1-based page number bottom-right, optional gray caption
/// centered above the bottom edge.
pub fn footer(canvas: &Canvas, caption: Option<&str>, show_page_number: bool) {
    let margin = MARGIN_PAGE;
    if show_page_number {
        canvas.text(
            &format!("Page {}", canvas.page_number()),
            FONT_TINY,
            PAGE_WIDTH - margin,
            PAGE_HEIGHT - 5.0,
            FontStyle::Regular,
            Align::Right,
            COLOR_TEXT,
        );
    }
    if let Some(text) = caption {
        canvas.text(
            text,
            FONT_TINY,
            PAGE_WIDTH / 2.0,
            PAGE_HEIGHT - 10.0,
            FontStyle::Regular,
            Align::Center,
            COLOR_SECONDARY,
        );
    }
}
