//! Table rendering utilities for CLI outputs.
//!
//! Cells may span several lines (wrapped text); widths are measured in
//! terminal columns, not bytes.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

fn pad_cell(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widen columns so that every header and cell line fits.
    fn effective_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cells = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .flat_map(|c| c.lines())
                    .map(UnicodeWidthStr::width)
                    .max()
                    .unwrap_or(0);
                col.width.max(UnicodeWidthStr::width(col.header.as_str())).max(cells)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.effective_widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_cell(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cell_lines: Vec<Vec<&str>> = (0..self.columns.len())
                .map(|i| {
                    row.get(i)
                        .map(|c| c.lines().collect::<Vec<_>>())
                        .unwrap_or_default()
                })
                .collect();
            let height = cell_lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

            for line in 0..height {
                for (lines, w) in cell_lines.iter().zip(&widths) {
                    let text = lines.get(line).copied().unwrap_or("");
                    out.push_str(&pad_cell(text, *w));
                    out.push(' ');
                }
                out.truncate(out.trim_end_matches(' ').len());
                out.push('\n');
            }
        }

        out
    }
}
