//! Delivery challan generator.
//!
//! Letterhead layout with From/To blocks, the flowing item table, total
//! quantity, optional transport details, terms, and a dual signature
//! block (supplier and receiver) pinned toward the page bottom.

use crate::company::CompanyInfo;
use crate::documents::Challan;

use super::canvas::{Align, Canvas, FontStyle};
use super::common::{challan_header, ensure_space, footer, format_quantity};
use super::metrics::split_text_to_size;
use super::style::*;
use super::table::{flow_table, Column, ColumnWidth, TableOptions};
use super::{underscored, GeneratedDocument, PdfError};

const FOOTER_CAPTION: &str = "This is a computer-generated delivery challan";

fn item_columns() -> Vec<Column> {
    vec![
        Column::new("S.No", ColumnWidth::Fixed(15.0), Align::Center),
        Column::wrapping("Description", ColumnWidth::Fixed(60.0), Align::Left),
        Column::new("Quantity", ColumnWidth::Fixed(25.0), Align::Center),
        Column::new("Unit", ColumnWidth::Fixed(20.0), Align::Center),
        Column::wrapping("Remarks", ColumnWidth::Auto, Align::Left),
    ]
}

/// Render a delivery challan to a paginated PDF.
pub fn generate_challan_pdf(
    challan: &Challan,
    company: &CompanyInfo,
) -> Result<GeneratedDocument, PdfError> {
    let mut canvas = Canvas::new("Delivery Challan")?;
    let margin = MARGIN_PAGE_LARGE;

    let draw_decorations = |canvas: &Canvas| -> f32 {
        let y = challan_header(canvas, &challan.challan_no, &challan.date, company);
        footer(canvas, Some(FOOTER_CAPTION), true);
        y
    };
    let mut y = draw_decorations(&canvas);

    // From / To blocks side by side.
    let col_width = (PAGE_WIDTH - 2.0 * margin - 5.0) / 2.0;
    let right_x = margin + col_width + 5.0;
    let supplier_name = if challan.supplier_name.trim().is_empty() {
        company.name.as_str()
    } else {
        challan.supplier_name.as_str()
    };
    let supplier_address = if challan.supplier_address.trim().is_empty() {
        company.address.as_str()
    } else {
        challan.supplier_address.as_str()
    };

    let block = |canvas: &Canvas, label: &str, name: &str, address: &str, x: f32, top: f32| -> f32 {
        let mut by = top;
        canvas.text(label, FONT_BODY, x, by, FontStyle::Bold, Align::Left, COLOR_TEXT);
        by += MARGIN_ROW;
        canvas.text(name, FONT_BODY, x, by, FontStyle::Regular, Align::Left, COLOR_TEXT);
        by += MARGIN_ROW;
        for line in split_text_to_size(address, col_width, FONT_SMALL) {
            canvas.text(&line, FONT_SMALL, x, by, FontStyle::Regular, Align::Left, COLOR_TEXT);
            by += 4.0;
        }
        by
    };
    let left_end = block(&canvas, "From:", supplier_name, supplier_address, margin, y);
    let right_end = block(
        &canvas,
        "To:",
        &challan.recipient_name,
        &challan.recipient_address,
        right_x,
        y,
    );
    y = left_end.max(right_end) + MARGIN_SECTION;

    // Item table.
    let rows: Vec<Vec<String>> = challan
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.description.clone(),
                format_quantity(item.quantity),
                item.unit.clone(),
                item.remarks.clone(),
            ]
        })
        .collect();
    let mut y = flow_table(
        &mut canvas,
        &item_columns(),
        &rows,
        margin,
        PAGE_WIDTH - 2.0 * margin,
        y,
        &TableOptions::default(),
        |canvas| draw_decorations(canvas),
    );
    y += 10.0;

    y = ensure_space(&mut canvas, y, 15.0, |canvas| draw_decorations(canvas));
    canvas.text(
        &format!("Total Quantity: {}", format_quantity(challan.total_quantity())),
        FONT_BODY,
        margin,
        y,
        FontStyle::Bold,
        Align::Left,
        COLOR_TEXT,
    );
    y += MARGIN_SECTION;

    // Transport block only when any field is filled in.
    if !challan.transport_details.is_empty() {
        y = ensure_space(&mut canvas, y, 25.0, |canvas| draw_decorations(canvas));
        canvas.text(
            "Transport Details:",
            FONT_BODY,
            margin,
            y,
            FontStyle::Bold,
            Align::Left,
            COLOR_TEXT,
        );
        y += MARGIN_ROW;
        for line in [
            format!("Vehicle No: {}", challan.transport_details.vehicle_no),
            format!("Driver: {}", challan.transport_details.driver_name),
        ] {
            canvas.text(&line, FONT_SMALL, margin, y, FontStyle::Regular, Align::Left, COLOR_TEXT);
            y += 4.0;
        }
        y += 4.0;
    }

    // Terms reflow line by line with their own break checks.
    if !challan.terms.trim().is_empty() {
        y = ensure_space(&mut canvas, y, 15.0, |canvas| draw_decorations(canvas));
        canvas.text(
            "Terms & Conditions:",
            FONT_BODY,
            margin,
            y,
            FontStyle::Bold,
            Align::Left,
            COLOR_TEXT,
        );
        y += MARGIN_ROW;
        for line in split_text_to_size(&challan.terms, PAGE_WIDTH - 2.0 * margin, FONT_SMALL) {
            if y > PAGE_HEIGHT - 40.0 {
                canvas.add_page();
                y = draw_decorations(&canvas);
            }
            canvas.text(&line, FONT_SMALL, margin, y, FontStyle::Regular, Align::Left, COLOR_TEXT);
            y += 4.0;
        }
    }

    // Signature block: pinned low on the page, pushed down (or onto a
    // fresh page) when content runs long.
    let y = ensure_space(&mut canvas, y + MARGIN_SECTION, 30.0, |canvas| {
        draw_decorations(canvas)
    });
    let sig_y = y.max(PAGE_HEIGHT - 50.0);
    let right_sig_x = PAGE_WIDTH - margin - 50.0;

    canvas.text(
        &format!("For {}", supplier_name),
        FONT_BODY,
        margin,
        sig_y,
        FontStyle::Bold,
        Align::Left,
        COLOR_TEXT,
    );
    canvas.line(margin, sig_y + 15.0, margin + 50.0, sig_y + 15.0, 0.3, COLOR_TEXT);
    canvas.text(
        "Authorized Signatory",
        FONT_SMALL,
        margin,
        sig_y + 20.0,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );

    canvas.text(
        "Receiver's Signature",
        FONT_BODY,
        right_sig_x,
        sig_y,
        FontStyle::Bold,
        Align::Left,
        COLOR_TEXT,
    );
    canvas.line(
        right_sig_x,
        sig_y + 15.0,
        PAGE_WIDTH - margin,
        sig_y + 15.0,
        0.3,
        COLOR_TEXT,
    );
    canvas.text(
        "Name & Stamp",
        FONT_SMALL,
        right_sig_x,
        sig_y + 20.0,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );

    let filename = if challan.challan_no.trim().is_empty() {
        format!("Challan_{}.pdf", chrono::Utc::now().timestamp_millis())
    } else {
        format!(
            "Challan_{}_{}.pdf",
            challan.challan_no.trim(),
            underscored(&company.name)
        )
    };
    let pages = canvas.page_count();
    let pdf = canvas.save()?;

    Ok(GeneratedDocument {
        filename,
        pdf,
        pages,
    })
}
