//! Flowing table layout: renders a header-labeled grid of rows that may
//! span several pages, splitting only at row boundaries.
//!
//! The caller supplies a page-break callback that repaints the page
//! decorations and returns the fresh content cursor; the table re-emits
//! its own column header row after every break. Rows are atomic - a row
//! taller than the remaining space moves to the next page whole.

use super::canvas::{Align, Canvas, FontStyle};
use super::metrics::split_text_to_size;
use super::style::{COLOR_PRIMARY, COLOR_TEXT, COLOR_WHITE, CONTENT_BOTTOM};

/// Baseline-to-baseline distance inside a cell.
const LINE_HEIGHT: f32 = 4.0;

/// Column sizing: fixed millimetres or an equal share of the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Fixed(f32),
    Auto,
}

/// One column of the table.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub width: ColumnWidth,
    pub align: Align,
    /// Wrapping columns reflow their text over multiple lines and drive
    /// the row height; non-wrapping columns stay single-line.
    pub wrap: bool,
}

impl Column {
    pub fn new(header: &'static str, width: ColumnWidth, align: Align) -> Self {
        Self {
            header,
            width,
            align,
            wrap: false,
        }
    }

    pub fn wrapping(header: &'static str, width: ColumnWidth, align: Align) -> Self {
        Self {
            header,
            width,
            align,
            wrap: true,
        }
    }
}

/// Table tuning knobs.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub font_size: f32,
    pub cell_padding: f32,
    /// Render one blank row when the row list is empty (the historical
    /// behavior); disable to render the header only.
    pub placeholder_when_empty: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            cell_padding: 2.0,
            placeholder_when_empty: true,
        }
    }
}

fn resolve_widths(columns: &[Column], total: f32) -> Vec<f32> {
    let fixed: f32 = columns
        .iter()
        .filter_map(|c| match c.width {
            ColumnWidth::Fixed(w) => Some(w),
            ColumnWidth::Auto => None,
        })
        .sum();
    let autos = columns
        .iter()
        .filter(|c| c.width == ColumnWidth::Auto)
        .count();
    let share = if autos > 0 {
        ((total - fixed) / autos as f32).max(5.0)
    } else {
        0.0
    };
    columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Auto => share,
        })
        .collect()
}

fn cell_lines(cell: &str, column: &Column, width: f32, opts: &TableOptions) -> Vec<String> {
    if column.wrap {
        split_text_to_size(cell, width - 2.0 * opts.cell_padding, opts.font_size)
    } else {
        vec![cell.to_string()]
    }
}

fn row_height(row: &[String], columns: &[Column], widths: &[f32], opts: &TableOptions) -> f32 {
    let mut max_lines = 1usize;
    for (i, column) in columns.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let lines = cell_lines(cell, column, widths[i], opts).len();
        max_lines = max_lines.max(lines);
    }
    max_lines as f32 * LINE_HEIGHT + 2.0 * opts.cell_padding
}

fn draw_header_row(
    canvas: &Canvas,
    columns: &[Column],
    widths: &[f32],
    x: f32,
    y: f32,
    opts: &TableOptions,
) -> f32 {
    let height = LINE_HEIGHT + 2.0 * opts.cell_padding;
    let total: f32 = widths.iter().sum();
    canvas.filled_rect(x, y, total, height, COLOR_PRIMARY);

    let mut cx = x;
    for (column, &width) in columns.iter().zip(widths) {
        canvas.text(
            column.header,
            opts.font_size,
            cx + width / 2.0,
            y + opts.cell_padding + LINE_HEIGHT * 0.75,
            FontStyle::Bold,
            Align::Center,
            COLOR_WHITE,
        );
        cx += width;
    }
    y + height
}

fn draw_row(
    canvas: &Canvas,
    row: &[String],
    columns: &[Column],
    widths: &[f32],
    x: f32,
    y: f32,
    height: f32,
    opts: &TableOptions,
) {
    let mut cx = x;
    for (i, (column, &width)) in columns.iter().zip(widths).enumerate() {
        canvas.rect_outline(cx, y, width, height, 0.2, COLOR_TEXT);

        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let lines = cell_lines(cell, column, width, opts);
        let mut baseline = y + opts.cell_padding + LINE_HEIGHT * 0.75;
        for line in &lines {
            let (tx, align) = match column.align {
                Align::Left => (cx + opts.cell_padding, Align::Left),
                Align::Center => (cx + width / 2.0, Align::Center),
                Align::Right => (cx + width - opts.cell_padding, Align::Right),
            };
            canvas.text(
                line,
                opts.font_size,
                tx,
                baseline,
                FontStyle::Regular,
                align,
                COLOR_TEXT,
            );
            baseline += LINE_HEIGHT;
        }
        cx += width;
    }
}

/// Render `rows` under a labeled column header starting at `start_y`,
/// breaking to new pages as needed.
///
/// `x`/`width` bound the table horizontally. `on_page_break` fires once
/// per emitted page after the first; it must repaint the page decorations
/// and return the Y at which content may resume. Returns the cursor just
/// below the last drawn row.
pub fn flow_table<F>(
    canvas: &mut Canvas,
    columns: &[Column],
    rows: &[Vec<String>],
    x: f32,
    width: f32,
    start_y: f32,
    opts: &TableOptions,
    mut on_page_break: F,
) -> f32
where
    F: FnMut(&mut Canvas) -> f32,
{
    let widths = resolve_widths(columns, width);
    let placeholder;
    let rows: &[Vec<String>] = if rows.is_empty() && opts.placeholder_when_empty {
        placeholder = vec![vec![String::new(); columns.len()]];
        &placeholder
    } else {
        rows
    };

    let mut y = draw_header_row(canvas, columns, &widths, x, start_y, opts);
    for row in rows {
        let height = row_height(row, columns, &widths, opts);
        if y + height > CONTENT_BOTTOM {
            canvas.add_page();
            let resume = on_page_break(canvas);
            y = draw_header_row(canvas, columns, &widths, x, resume, opts);
        }
        draw_row(canvas, row, columns, &widths, x, y, height, opts);
        y += height;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::style::CONTENT_TOP;

    fn simple_columns() -> Vec<Column> {
        vec![
            Column::new("S.No", ColumnWidth::Fixed(12.0), Align::Center),
            Column::wrapping("Description", ColumnWidth::Auto, Align::Left),
            Column::new("Qty", ColumnWidth::Fixed(16.0), Align::Center),
        ]
    }

    fn short_rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| {
                vec![
                    (i + 1).to_string(),
                    format!("Item {}", i + 1),
                    "1".to_string(),
                ]
            })
            .collect()
    }

    // With default options every single-line row is 8mm tall and the
    // header row is 8mm. Starting at CONTENT_TOP (47mm) with the content
    // floor at 279mm there is room for the header plus exactly 28 rows.
    const ROWS_PER_FULL_PAGE: usize = 28;

    #[test]
    fn test_exact_fill_emits_no_trailing_page() {
        let mut canvas = Canvas::new("test").unwrap();
        let cols = simple_columns();
        let mut breaks = 0;
        let y = flow_table(
            &mut canvas,
            &cols,
            &short_rows(ROWS_PER_FULL_PAGE),
            12.0,
            186.0,
            CONTENT_TOP,
            &TableOptions::default(),
            |_| {
                breaks += 1;
                CONTENT_TOP
            },
        );
        assert_eq!(breaks, 0);
        assert_eq!(canvas.page_count(), 1);
        assert!((y - 279.0).abs() < 1e-3);
    }

    #[test]
    fn test_one_extra_row_breaks_once() {
        let mut canvas = Canvas::new("test").unwrap();
        let cols = simple_columns();
        let mut breaks = 0;
        let y = flow_table(
            &mut canvas,
            &cols,
            &short_rows(ROWS_PER_FULL_PAGE + 1),
            12.0,
            186.0,
            CONTENT_TOP,
            &TableOptions::default(),
            |_| {
                breaks += 1;
                CONTENT_TOP
            },
        );
        assert_eq!(breaks, 1);
        assert_eq!(canvas.page_count(), 2);
        // Second page: header row + one data row below CONTENT_TOP.
        assert!((y - (CONTENT_TOP + 16.0)).abs() < 1e-3);
    }

    #[test]
    fn test_page_count_matches_row_arithmetic() {
        for &(rows, pages) in &[(1usize, 1usize), (28, 1), (29, 2), (56, 2), (57, 3), (85, 4)] {
            let mut canvas = Canvas::new("test").unwrap();
            let cols = simple_columns();
            flow_table(
                &mut canvas,
                &cols,
                &short_rows(rows),
                12.0,
                186.0,
                CONTENT_TOP,
                &TableOptions::default(),
                |_| CONTENT_TOP,
            );
            assert_eq!(canvas.page_count(), pages, "{} rows", rows);
        }
    }

    #[test]
    fn test_empty_rows_render_placeholder() {
        let mut canvas = Canvas::new("test").unwrap();
        let cols = simple_columns();
        let y = flow_table(
            &mut canvas,
            &cols,
            &[],
            12.0,
            186.0,
            CONTENT_TOP,
            &TableOptions::default(),
            |_| CONTENT_TOP,
        );
        // Header + one blank row.
        assert!((y - (CONTENT_TOP + 16.0)).abs() < 1e-3);
    }

    #[test]
    fn test_empty_rows_policy_disabled() {
        let mut canvas = Canvas::new("test").unwrap();
        let cols = simple_columns();
        let opts = TableOptions {
            placeholder_when_empty: false,
            ..Default::default()
        };
        let y = flow_table(&mut canvas, &cols, &[], 12.0, 186.0, CONTENT_TOP, &opts, |_| {
            CONTENT_TOP
        });
        // Header only.
        assert!((y - (CONTENT_TOP + 8.0)).abs() < 1e-3);
    }

    #[test]
    fn test_wrapped_description_grows_row() {
        let mut canvas = Canvas::new("test").unwrap();
        let cols = simple_columns();
        let long = "DG Set 125 KVA silent type with acoustic enclosure, AMF panel, \
                    fuel tank and standard accessories as per the approved quotation"
            .to_string();
        let rows = vec![vec!["1".to_string(), long, "1".to_string()]];
        let y = flow_table(
            &mut canvas,
            &cols,
            &rows,
            12.0,
            186.0,
            CONTENT_TOP,
            &TableOptions::default(),
            |_| CONTENT_TOP,
        );
        // Taller than header + single-line row.
        assert!(y > CONTENT_TOP + 16.0);
    }

    #[test]
    fn test_tall_row_moves_whole_to_next_page() {
        let mut canvas = Canvas::new("test").unwrap();
        let cols = simple_columns();
        // 27 short rows leave 16mm; a three-line row (16mm) fits flush,
        // a four-line row (20mm) must move whole.
        let mut rows = short_rows(ROWS_PER_FULL_PAGE - 1);
        rows.push(vec![
            "28".to_string(),
            "line1\nline2\nline3\nline4".to_string(),
            "1".to_string(),
        ]);
        let mut breaks = 0;
        let y = flow_table(
            &mut canvas,
            &cols,
            &rows,
            12.0,
            186.0,
            CONTENT_TOP,
            &TableOptions::default(),
            |_| {
                breaks += 1;
                CONTENT_TOP
            },
        );
        assert_eq!(breaks, 1);
        // Second page: header + the 20mm row, nothing left behind.
        assert!((y - (CONTENT_TOP + 8.0 + 20.0)).abs() < 1e-3);
    }
}
