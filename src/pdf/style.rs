//! Shared styling constants for the generated documents.
//!
//! All lengths are millimetres on an A4 portrait page; colors are RGB
//! bytes.

/// A4 page width.
pub const PAGE_WIDTH: f32 = 210.0;
/// A4 page height.
pub const PAGE_HEIGHT: f32 = 297.0;

/// Standard page margin (invoice layout).
pub const MARGIN_PAGE: f32 = 12.0;
/// Larger page margin (challan and letter layouts).
pub const MARGIN_PAGE_LARGE: f32 = 20.0;
/// Vertical gap between sections.
pub const MARGIN_SECTION: f32 = 8.0;
/// Vertical gap between stacked rows of text.
pub const MARGIN_ROW: f32 = 5.0;
/// Top offset reserved for the repeated page header.
pub const MARGIN_HEADER_TOP: f32 = 42.0;
/// Bottom offset reserved for the footer.
pub const MARGIN_FOOTER_BOTTOM: f32 = 18.0;

/// Content may start here on pages created by a mid-table break.
pub const CONTENT_TOP: f32 = MARGIN_HEADER_TOP + 5.0;
/// Content must stop above this line.
pub const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - MARGIN_FOOTER_BOTTOM;

/// Dark blue used for titles, table heads and the header rule.
pub const COLOR_PRIMARY: (u8, u8, u8) = (0, 0, 139);
/// Gray for secondary text such as footer captions.
pub const COLOR_SECONDARY: (u8, u8, u8) = (128, 128, 128);
/// Black body text.
pub const COLOR_TEXT: (u8, u8, u8) = (0, 0, 0);
/// White, used on filled table header cells.
pub const COLOR_WHITE: (u8, u8, u8) = (255, 255, 255);

/// Document title size (e.g. company name on the invoice header).
pub const FONT_TITLE: f32 = 18.0;
/// Main header size.
pub const FONT_HEADER: f32 = 16.0;
/// Section subheader size.
pub const FONT_SUBHEADER: f32 = 14.0;
/// Regular body size.
pub const FONT_BODY: f32 = 10.0;
/// Small text size.
pub const FONT_SMALL: f32 = 9.0;
/// Footer text size.
pub const FONT_TINY: f32 = 8.0;

/// Logo box drawn at the top-left of headers.
pub const LOGO_WIDTH: f32 = 30.0;
pub const LOGO_HEIGHT: f32 = 18.0;
