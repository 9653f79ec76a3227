//! CSV export of table rows.

use super::TableView;

impl TableView {
    /// Export the view as CSV: one header row, then the data rows.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        push_row(&mut csv, &self.headers);
        for row in &self.rows {
            push_row(&mut csv, row);
        }
        csv
    }
}

fn push_row(csv: &mut String, cells: &[String]) {
    let line: Vec<String> = cells.iter().map(|c| escape_csv(c)).collect();
    csv.push_str(&line.join(","));
    csv.push('\n');
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
