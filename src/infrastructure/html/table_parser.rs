// ============================================================
// HTML TABLE PARSER
// ============================================================
// First <table> of a document into rows of cell markup

use scraper::{ElementRef, Html};
use serde_json::json;

use crate::domain::error::{ImportError, Result};
use crate::domain::table::{ImportFormat, ImportedTable};

/// Extracts the first table of an HTML document
pub struct HtmlTableParser;

impl HtmlTableParser {
    /// Parse `content` into a table.
    ///
    /// Rows come from `thead`, the body sections and `tfoot`, in that order.
    /// Cells keep their inner markup. Tables nested inside cells are not
    /// expanded into rows. The caption becomes the table name and the
    /// presence of `thead`/`tfoot` is reported in the `options` object.
    pub fn parse(content: &str) -> Result<ImportedTable> {
        let document = Html::parse_document(content);

        let table = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "table")
            .ok_or_else(|| ImportError::decode(ImportFormat::Html, "No <table> element found"))?;

        let mut head_rows = Vec::new();
        let mut body_rows = Vec::new();
        let mut foot_rows = Vec::new();
        let mut caption = None;

        for section in child_elements(table) {
            match section.value().name() {
                "caption" => {
                    caption = Some(section.text().collect::<String>().trim().to_string());
                }
                "thead" => head_rows.extend(section_rows(section)),
                "tbody" => body_rows.extend(section_rows(section)),
                "tfoot" => foot_rows.extend(section_rows(section)),
                "tr" => body_rows.push(row_cells(section)),
                _ => {}
            }
        }

        let has_head = !head_rows.is_empty();
        let has_foot = !foot_rows.is_empty();

        let mut data = head_rows;
        data.append(&mut body_rows);
        data.append(&mut foot_rows);

        if data.is_empty() {
            return Err(ImportError::decode(
                ImportFormat::Html,
                "The <table> element has no rows",
            ));
        }

        let mut table = ImportedTable::new(data);
        if let Some(name) = caption.filter(|name| !name.is_empty()) {
            table.options.insert("name".to_string(), json!(name));
        }
        table.options.insert(
            "options".to_string(),
            json!({ "table_head": has_head, "table_foot": has_foot }),
        );

        Ok(table)
    }
}

fn child_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap)
}

fn section_rows(section: ElementRef<'_>) -> Vec<Vec<String>> {
    child_elements(section)
        .filter(|row| row.value().name() == "tr")
        .map(row_cells)
        .collect()
}

fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    child_elements(row)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(|cell| cell.inner_html().trim().to_string())
        .collect()
}
