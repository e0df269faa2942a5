//! Tax invoice generator.
//!
//! Layout: centered company header, invoice/customer meta blocks, the
//! flowing item table, then the reserved trailing blocks - GST summary
//! with amount-in-words, bank details and terms, signature. Every block
//! after the table goes through `ensure_space` so none straddles a page
//! boundary.

use crate::company::CompanyInfo;
use crate::documents::{Invoice, TaxMode};

use super::canvas::{Align, Canvas, FontStyle};
use super::common::{
    ensure_space, footer, format_quantity, gst_breakup, invoice_header, number_to_words_indian,
    to_money, GstBreakup,
};
use super::metrics::split_text_to_size;
use super::style::*;
use super::table::{flow_table, Column, ColumnWidth, TableOptions};
use super::{underscored, GeneratedDocument, PdfError};

/// Export options for invoices.
#[derive(Debug, Clone, Default)]
pub struct InvoiceOptions {
    /// Overrides the document's own tax mode when set.
    pub tax_mode: Option<TaxMode>,
    /// Forwarded to the item table; `false` rejects the blank
    /// placeholder row for empty item lists.
    pub placeholder_when_empty: Option<bool>,
}

/// Subtotal, summed per-item GST and grand total for an invoice.
pub fn invoice_totals(invoice: &Invoice, mode: TaxMode) -> (f64, GstBreakup, f64) {
    let subtotal = invoice.subtotal();
    let mut gst = GstBreakup {
        igst: 0.0,
        cgst: 0.0,
        sgst: 0.0,
    };
    for item in &invoice.items {
        let part = gst_breakup(item.base_amount(), item.tax_rate_percent, mode);
        gst.igst += part.igst;
        gst.cgst += part.cgst;
        gst.sgst += part.sgst;
    }
    let grand = subtotal + gst.total();
    (subtotal, gst, grand)
}

/// The "Amount in words" line for a grand total, rounded to the rupee.
pub fn amount_in_words(grand_total: f64) -> String {
    format!(
        "Amount in words: Rupees {} only",
        number_to_words_indian(grand_total.round())
    )
}

fn item_columns() -> Vec<Column> {
    vec![
        Column::new("S.No", ColumnWidth::Fixed(12.0), Align::Center),
        Column::wrapping("Description", ColumnWidth::Fixed(80.0), Align::Left),
        Column::new("HSN/SAC", ColumnWidth::Fixed(22.0), Align::Center),
        Column::new("Qty", ColumnWidth::Fixed(16.0), Align::Center),
        Column::new("Rate", ColumnWidth::Fixed(22.0), Align::Right),
        Column::new("Amount", ColumnWidth::Fixed(24.0), Align::Right),
    ]
}

/// Render an invoice to a paginated PDF.
///
/// Pure with respect to its inputs; missing fields print as blanks and
/// bad numerics coerce to zero - the render itself never rejects data.
pub fn generate_invoice_pdf(
    invoice: &Invoice,
    company: &CompanyInfo,
    options: &InvoiceOptions,
) -> Result<GeneratedDocument, PdfError> {
    let mode = options.tax_mode.unwrap_or(invoice.tax_mode);
    let mut canvas = Canvas::new("Tax Invoice")?;

    let draw_decorations = |canvas: &Canvas| {
        invoice_header(canvas, "TAX INVOICE", company);
        footer(canvas, None, true);
    };
    // Page 1 is decorated before any flowing content.
    draw_decorations(&canvas);

    let margin = MARGIN_PAGE;
    let half = PAGE_WIDTH / 2.0;

    // Invoice refs (left) and Bill To (right), stacked plain rows.
    let mut left_y = 48.0;
    for line in [
        format!("Invoice No: {}", invoice.invoice_no),
        format!("Date: {}", invoice.date),
        format!("PO No: {}", invoice.po_no),
        format!("DC No: {}", invoice.dc_no),
    ] {
        canvas.text(
            &line,
            FONT_BODY,
            margin,
            left_y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        left_y += MARGIN_ROW;
    }

    let mut right_y = 48.0;
    canvas.text(
        "Bill To:",
        FONT_BODY,
        half,
        right_y,
        FontStyle::Bold,
        Align::Left,
        COLOR_TEXT,
    );
    right_y += MARGIN_ROW;
    canvas.text(
        &invoice.customer_name,
        FONT_BODY,
        half,
        right_y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    right_y += MARGIN_ROW;
    for line in split_text_to_size(&invoice.customer_address, half - margin, FONT_BODY) {
        canvas.text(
            &line,
            FONT_BODY,
            half,
            right_y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        right_y += MARGIN_ROW;
    }
    if !invoice.party_gstin.trim().is_empty() {
        canvas.text(
            &format!("GSTIN: {}", invoice.party_gstin),
            FONT_BODY,
            half,
            right_y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        right_y += MARGIN_ROW;
    }

    // Item table.
    let rows: Vec<Vec<String>> = invoice
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.description.clone(),
                item.hsn_code.clone(),
                format_quantity(item.qty),
                to_money(item.rate),
                to_money(item.base_amount()),
            ]
        })
        .collect();

    let table_opts = TableOptions {
        placeholder_when_empty: options.placeholder_when_empty.unwrap_or(true),
        ..Default::default()
    };
    let start_y = left_y.max(right_y).max(60.0) + 6.0;
    let after_items = flow_table(
        &mut canvas,
        &item_columns(),
        &rows,
        margin,
        PAGE_WIDTH - 2.0 * margin,
        start_y,
        &table_opts,
        |canvas| {
            draw_decorations(canvas);
            CONTENT_TOP
        },
    );

    // Totals region: words on the left, summary grid on the right.
    let (subtotal, gst, grand) = invoice_totals(invoice, mode);
    let mut y = ensure_space(&mut canvas, after_items + MARGIN_SECTION, 25.0, |canvas| {
        draw_decorations(canvas);
        CONTENT_TOP
    });

    let words_top = y;
    for line in split_text_to_size(&amount_in_words(grand), half - margin, FONT_BODY) {
        canvas.text(
            &line,
            FONT_BODY,
            margin,
            y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        y += MARGIN_ROW;
    }

    let rate_suffix = |divisor: f64| -> String {
        match invoice.uniform_tax_rate() {
            Some(rate) => format!(" ({}%)", format_quantity(rate / divisor)),
            None => String::new(),
        }
    };
    let mut totals: Vec<(String, f64, bool)> =
        vec![("Subtotal".to_string(), subtotal, true)];
    match mode {
        TaxMode::Igst => totals.push((format!("IGST{}", rate_suffix(1.0)), gst.igst, false)),
        TaxMode::CgstSgst => {
            totals.push((format!("CGST{}", rate_suffix(2.0)), gst.cgst, false));
            totals.push((format!("SGST{}", rate_suffix(2.0)), gst.sgst, false));
        }
    }
    totals.push(("Grand Total".to_string(), grand, true));

    let totals_x = PAGE_WIDTH - margin - 85.0;
    let label_w = 40.0;
    let value_w = 40.0;
    let row_h = 7.0;
    let mut totals_y = words_top;
    for (label, value, bold) in &totals {
        canvas.rect_outline(totals_x, totals_y, label_w, row_h, 0.2, COLOR_TEXT);
        canvas.rect_outline(totals_x + label_w, totals_y, value_w, row_h, 0.2, COLOR_TEXT);
        let style = if *bold {
            FontStyle::Bold
        } else {
            FontStyle::Regular
        };
        canvas.text(
            label,
            FONT_BODY,
            totals_x + 2.0,
            totals_y + 5.0,
            style,
            Align::Left,
            COLOR_TEXT,
        );
        canvas.text(
            &format!("Rs. {}", to_money(*value)),
            FONT_BODY,
            totals_x + label_w + value_w - 2.0,
            totals_y + 5.0,
            style,
            Align::Right,
            COLOR_TEXT,
        );
        totals_y += row_h;
    }

    // Bank details and terms, reserved as one block.
    let mut y = ensure_space(
        &mut canvas,
        y.max(totals_y) + MARGIN_SECTION,
        80.0,
        |canvas| {
            draw_decorations(canvas);
            CONTENT_TOP
        },
    );
    let bank_lines = [
        (company.bank_title.clone(), FontStyle::Bold),
        (format!("NAME: {}", company.bank_name), FontStyle::Regular),
        (format!("AC.NO: {}", company.account_no), FontStyle::Regular),
        (format!("BRANCH: {}", company.branch), FontStyle::Regular),
        (format!("IFSC CODE: {}", company.ifsc), FontStyle::Regular),
    ];
    for (line, style) in &bank_lines {
        canvas.text(line, FONT_SMALL, margin, y, *style, Align::Left, COLOR_TEXT);
        y += 4.0;
    }
    y += 4.0;

    for line in [
        "Terms & Conditions:",
        "1. Interest 24% p.a. will be charged on all invoices if not paid within due date.",
        "2. All payment to be made only by crossed cheques drawn in our favour.",
        "3. PAYMENT WITHIN .............. DAYS",
    ] {
        canvas.text(
            line,
            FONT_SMALL,
            margin,
            y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        y += 4.0;
    }

    // Signature block.
    let sig_y = ensure_space(&mut canvas, y + 10.0, 30.0, |canvas| {
        draw_decorations(canvas);
        CONTENT_TOP
    });
    let sig_x = PAGE_WIDTH - margin - 50.0;
    canvas.text(
        &format!("For {}", company.name),
        FONT_BODY,
        sig_x,
        sig_y,
        FontStyle::Bold,
        Align::Left,
        COLOR_TEXT,
    );
    canvas.line(sig_x, sig_y + 6.0, PAGE_WIDTH - margin, sig_y + 6.0, 0.3, COLOR_TEXT);
    canvas.text(
        "Proprietor",
        FONT_SMALL,
        sig_x,
        sig_y + 12.0,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );

    let number = if invoice.invoice_no.trim().is_empty() {
        "Draft".to_string()
    } else {
        invoice.invoice_no.trim().to_string()
    };
    let filename = format!("Invoice_{}_{}.pdf", number, underscored(&company.name));
    let pages = canvas.page_count();
    let pdf = canvas.save()?;

    Ok(GeneratedDocument {
        filename,
        pdf,
        pages,
    })
}
