//! Fixed-column text table with page breaks.

use std::fmt::Write;

/// Separates pages in the rendered text.
pub const PAGE_BREAK: char = '\u{000C}';

/// A column: header text and width in characters.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

/// Renders rows into fixed-width columns, repeating the header on every page.
#[derive(Debug)]
pub struct Table<'a> {
    columns: &'a [Column],
    rows_per_page: usize,
    out: String,
    rows_on_page: usize,
}

impl<'a> Table<'a> {
    /// Starts a table below the given preamble (title and scope lines).
    pub fn new(preamble: String, columns: &'a [Column], rows_per_page: usize) -> Self {
        let mut table = Self {
            columns,
            rows_per_page: rows_per_page.max(1),
            out: preamble,
            rows_on_page: 0,
        };
        table.write_header();
        table
    }

    /// Total line width.
    pub fn width(columns: &[Column]) -> usize {
        columns.iter().map(|c| c.width).sum()
    }

    fn write_header(&mut self) {
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        self.write_cells(&headers);
        self.out.push_str(&"-".repeat(Self::width(self.columns)));
        self.out.push('\n');
    }

    fn write_cells(&mut self, cells: &[&str]) {
        let mut line = String::new();
        for (column, cell) in self.columns.iter().zip(cells) {
            // Keep one space between columns.
            let text: String = cell.chars().take(column.width.saturating_sub(1)).collect();
            let _ = write!(line, "{:<width$}", text, width = column.width);
        }
        self.out.push_str(line.trim_end());
        self.out.push('\n');
    }

    /// Appends one data row.
    pub fn push_row(&mut self, cells: &[&str]) {
        if self.rows_on_page == self.rows_per_page {
            self.out.push(PAGE_BREAK);
            self.out.push('\n');
            self.write_header();
            self.rows_on_page = 0;
        }
        self.write_cells(cells);
        self.rows_on_page += 1;
    }

    /// Finishes the table.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Centers `text` within `width` characters.
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
