use std::fmt;

/// A parsed pipe table: the first row is the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses a Markdown pipe table returned by the backend.
    ///
    /// Lines containing `---` are separator rows and are dropped. The
    /// remaining lines are split on `|`, cells are trimmed, the empty cells
    /// produced by leading/trailing pipes are removed and rows with fewer
    /// than two cells are discarded.
    pub fn parse(content: &str) -> Self {
        let rows = content
            .lines()
            .filter(|line| !line.contains("---"))
            .map(split_row)
            .filter(|cells| cells.len() >= 2)
            .collect();

        Self { rows }
    }

    pub fn headers(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows, without the header.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// All rows including the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every column, in characters.
    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(3)
            })
            .collect()
    }

    /// Re-emits the table as aligned Markdown, with a separator under the header.
    pub fn to_markdown(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
            if i == 0 {
                let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                out.push_str(&format_row(&separator, &widths));
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_markdown().trim_end())
    }
}

fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|cell| cell.trim().to_string()).collect();

    if line.trim_start().starts_with('|') && cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if line.trim_end().ends_with('|') && cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }

    cells
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
