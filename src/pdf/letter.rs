//! Business letter generator.
//!
//! The company letterhead appears on the first page only; continuation
//! pages restart at the plain top margin with just the footer repainted.
//! The body flows line by line, so a letter of any length paginates.

use crate::company::CompanyInfo;
use crate::documents::Letter;

use super::canvas::{Align, Canvas, FontStyle};
use super::common::{company_letterhead, ensure_space, footer, format_date};
use super::metrics::split_text_to_size;
use super::style::*;
use super::{underscored, GeneratedDocument, PdfError};

const FOOTER_CAPTION: &str = "This is a computer-generated letter";

/// Render a letter to a paginated PDF.
pub fn generate_letter_pdf(
    letter: &Letter,
    company: &CompanyInfo,
) -> Result<GeneratedDocument, PdfError> {
    let mut canvas = Canvas::new("Letter")?;
    let margin = MARGIN_PAGE_LARGE;
    let body_width = PAGE_WIDTH - 2.0 * margin;

    let mut y = company_letterhead(&canvas, company, margin);
    footer(&canvas, Some(FOOTER_CAPTION), true);

    // Continuation pages carry no letterhead.
    let continuation = |canvas: &Canvas| -> f32 {
        footer(canvas, Some(FOOTER_CAPTION), true);
        margin
    };

    // Reference and date on one row.
    let ref_no = if letter.ref_no.trim().is_empty() {
        "N/A".to_string()
    } else {
        letter.ref_no.trim().to_string()
    };
    canvas.text(
        &format!("Ref: {}", ref_no),
        FONT_BODY,
        margin,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    canvas.text(
        &format!("Date: {}", format_date(&letter.date)),
        FONT_BODY,
        PAGE_WIDTH - margin - 50.0,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    y += 10.0;

    // Recipient block.
    canvas.text("To,", FONT_BODY, margin, y, FontStyle::Bold, Align::Left, COLOR_TEXT);
    y += MARGIN_ROW;
    if !letter.recipient_name.trim().is_empty() {
        canvas.text(
            &letter.recipient_name,
            FONT_BODY,
            margin,
            y,
            FontStyle::Regular,
            Align::Left,
            COLOR_TEXT,
        );
        y += MARGIN_ROW;
    }
    for line in split_text_to_size(&letter.recipient_address, body_width, FONT_BODY) {
        if line.is_empty() {
            continue;
        }
        canvas.text(&line, FONT_BODY, margin, y, FontStyle::Regular, Align::Left, COLOR_TEXT);
        y += MARGIN_ROW;
    }
    y += MARGIN_ROW;

    // Subject, wrapped; the "Subject:" prefix stays on the first line.
    let subject = format!("Subject: {}", letter.subject);
    for line in split_text_to_size(&subject, body_width, FONT_BODY) {
        canvas.text(&line, FONT_BODY, margin, y, FontStyle::Bold, Align::Left, COLOR_TEXT);
        y += MARGIN_ROW;
    }
    y += MARGIN_ROW;

    canvas.text(
        &letter.salutation(),
        FONT_BODY,
        margin,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    y += MARGIN_SECTION;

    // Body: explicit newlines preserved, each wrapped line placed with
    // its own break check.
    for line in split_text_to_size(&letter.body, body_width, FONT_BODY) {
        if y > PAGE_HEIGHT - 40.0 {
            canvas.add_page();
            y = continuation(&canvas);
        }
        canvas.text(&line, FONT_BODY, margin, y, FontStyle::Regular, Align::Left, COLOR_TEXT);
        y += MARGIN_ROW;
    }
    y += MARGIN_SECTION;

    // Closing and signature stay together.
    let mut y = ensure_space(&mut canvas, y, 35.0, |canvas| continuation(canvas));
    canvas.text(
        letter.closing(),
        FONT_BODY,
        margin,
        y,
        FontStyle::Regular,
        Align::Left,
        COLOR_TEXT,
    );
    y += 15.0;
    let sender = if letter.sender_name.trim().is_empty() {
        company.name.as_str()
    } else {
        letter.sender_name.as_str()
    };
    canvas.text(sender, FONT_BODY, margin, y, FontStyle::Bold, Align::Left, COLOR_TEXT);
    if !letter.sender_designation.trim().is_empty() {
        y += MARGIN_ROW;
        canvas.text(
            &letter.sender_designation,
            FONT_SMALL,
            margin,
            y,
            FontStyle::Italic,
            Align::Left,
            COLOR_TEXT,
        );
    }

    let filename = if letter.ref_no.trim().is_empty() {
        format!("Letter_{}.pdf", chrono::Utc::now().timestamp_millis())
    } else {
        format!(
            "Letter_{}_{}.pdf",
            underscored(letter.ref_no.trim()),
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
