//! Fixed-width text tables for record listings.

use crate::cli::output::current_preferences;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    /// Right-aligned column, used for amounts and percentages.
    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths from headers and cells, clamped by each column's limits.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest_cell = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .max()
                    .unwrap_or(0);
                let width = visible_width(&column.header).max(widest_cell);
                column.max_width.map_or(width, |limit| width.min(limit))
            })
            .collect()
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = cells.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join("|")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&headers, &widths));
        lines.push(horizontal_rule(&widths, self.padding));
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Character count ignoring ANSI colour sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            // CSI sequences end at the first byte in `@`..=`~`.
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) && next != '[' {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn truncate(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    match width {
        0 => String::new(),
        1 => "…".to_string(),
        _ => {
            let kept: String = text.chars().take(width - 1).collect();
            format!("{kept}…")
        }
    }
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate(text, width);
    let gap = " ".repeat(width.saturating_sub(visible_width(&fitted)));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{gap}{pad}"),
        Alignment::Right => format!("{pad}{gap}{fitted}{pad}"),
    }
}

pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let ch = if current_preferences().plain_mode {
        "-"
    } else {
        "─"
    };
    widths
        .iter()
        .map(|width| ch.repeat(width + padding * 2))
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_widest_cell_within_limits() {
        let mut table = Table::new(vec![TableColumn::left("Name").max(6), TableColumn::right("Budget")]);
        table.push_row(vec!["Groceries".into(), "S/ 10.00".into()]);
        table.push_row(vec!["Rent".into(), "S/ 1,200.00".into()]);
        assert_eq!(table.compute_widths(), vec![6, 11]);
    }

    #[test]
    fn header_sets_width_of_narrow_or_empty_columns() {
        let mut table = Table::new(vec![TableColumn::right("#"), TableColumn::right("Actual spend")]);
        assert_eq!(table.compute_widths(), vec![1, 12]);
        table.push_row(vec!["10".into(), "S/ 5.00".into()]);
        assert_eq!(table.compute_widths(), vec![2, 12]);
    }

    #[test]
    fn cells_align_and_truncate() {
        assert_eq!(render_cell("AB", 4, Alignment::Left, 1), " AB   ");
        assert_eq!(render_cell("AB", 4, Alignment::Right, 1), "   AB ");
        assert_eq!(render_cell("Groceries", 5, Alignment::Left, 0), "Groc…");
    }

    #[test]
    fn ansi_sequences_do_not_count_towards_width() {
        assert_eq!(visible_width("\u{1b}[32mok\u{1b}[0m"), 2);
    }

    #[test]
    fn render_includes_header_rule_and_rows() {
        let mut table = Table::new(vec![TableColumn::left("Name"), TableColumn::right("Spend")]);
        table.push_row(vec!["Rent".into(), "5".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Name"));
        assert!(lines[2].contains("Rent"));
    }
}
