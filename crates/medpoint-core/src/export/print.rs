//! Printable document generation.

use chrono::Local;

use super::TableView;
use crate::i18n::Language;

/// A standalone printable HTML document for a table of filtered records.
///
/// Layout follows the active display language: Arabic renders right-to-left
/// with right-aligned cells and an Arabic-capable font stack.
#[derive(Debug, Clone)]
pub struct PrintDocument {
    pub view: TableView,
    pub language: Language,
    /// Date line shown under the title, `YYYY-MM-DD`.
    pub printed_on: String,
}

impl PrintDocument {
    /// Build a print document dated today.
    pub fn new(view: TableView, language: Language) -> Self {
        Self {
            view,
            language,
            printed_on: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }

    /// Render the full standalone HTML document.
    pub fn to_html(&self) -> String {
        let dir = self.language.dir();
        let lang = self.language.as_str();
        let (align, date_align) = match self.language {
            Language::En => ("left", "right"),
            Language::Ar => ("right", "left"),
        };
        let font = match self.language {
            Language::En => "Arial, sans-serif",
            Language::Ar => "'Arial', 'Tahoma', sans-serif",
        };

        let headers: String = self
            .view
            .headers
            .iter()
            .map(|h| format!("<th>{}</th>", escape_html(h)))
            .collect();

        let mut rows = String::new();
        for row in &self.view.rows {
            rows.push_str("<tr>");
            for cell in row {
                rows.push_str("<td>");
                rows.push_str(&escape_html(cell));
                rows.push_str("</td>");
            }
            rows.push_str("</tr>\n");
        }

        format!(
            r#"<!DOCTYPE html>
<html dir="{dir}" lang="{lang}">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
  body {{ font-family: {font}; margin: 20px; direction: {dir}; }}
  table {{ width: 100%; border-collapse: collapse; margin-top: 20px; direction: {dir}; }}
  th, td {{ border: 1px solid #ddd; padding: 8px; text-align: {align}; }}
  th {{ background-color: #f2f2f2; font-weight: bold; }}
  h1 {{ text-align: center; color: #333; }}
  .print-date {{ text-align: {date_align}; margin-bottom: 20px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="print-date">{printed_on}</div>
<table>
<thead>
<tr>{headers}</tr>
</thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
            dir = dir,
            lang = lang,
            font = font,
            align = align,
            date_align = date_align,
            title = escape_html(&self.view.title),
            printed_on = self.printed_on,
            headers = headers,
            rows = rows,
        )
    }
}

/// Escape a string for HTML output.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
