use std::str::FromStr;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::error::HolidayError;

/// How the expected cell count of a data row is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowWidthPolicy {
    /// Width of the first body row; later rows that disagree are dropped.
    #[default]
    FirstRow,
    /// Number of header cells in the table.
    Header,
}

impl FromStr for RowWidthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-row" | "first_row" | "firstrow" => Ok(RowWidthPolicy::FirstRow),
            "header" => Ok(RowWidthPolicy::Header),
            other => Err(format!("unknown row width policy '{other}'")),
        }
    }
}

/// Identifies the holiday table by the CSS classes it carries.
#[derive(Debug, Clone)]
pub struct TableSelector {
    classes: Vec<String>,
    row_width: RowWidthPolicy,
}

impl TableSelector {
    pub fn new(classes: Vec<String>) -> Self {
        Self {
            classes,
            row_width: RowWidthPolicy::default(),
        }
    }

    pub fn with_row_width(mut self, row_width: RowWidthPolicy) -> Self {
        self.row_width = row_width;
        self
    }

    pub fn css(&self) -> String {
        let mut css = String::from("table");
        for class in &self.classes {
            css.push('.');
            css.push_str(class);
        }
        css
    }
}

/// Column names plus the well-formed rows of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn parse_selector(css: &str) -> Result<Selector, HolidayError> {
    Selector::parse(css)
        .map_err(|e| HolidayError::StructureNotFound(format!("invalid selector '{css}': {e}")))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[instrument(skip(document), fields(table = %selector.css()))]
pub fn extract_table(document: &Html, selector: &TableSelector) -> Result<RawTable, HolidayError> {
    let table_selector = parse_selector(&selector.css())?;
    let tbody_selector = parse_selector("tbody")?;
    let th_selector = parse_selector("th")?;
    let tr_selector = parse_selector("tr")?;
    let td_selector = parse_selector("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| HolidayError::StructureNotFound(format!("no element matches '{}'", selector.css())))?;
    let tbody = table
        .select(&tbody_selector)
        .next()
        .ok_or_else(|| HolidayError::StructureNotFound("holiday table has no tbody".to_string()))?;

    // Header cells anywhere in the table, not only in thead
    let column_names: Vec<String> = table.select(&th_selector).map(cell_text).collect();
    debug!("Found {} header cells: {:?}", column_names.len(), column_names);

    let mut expected_width = match selector.row_width {
        RowWidthPolicy::FirstRow => None,
        RowWidthPolicy::Header => Some(column_names.len()),
    };
    let mut rows = Vec::new();
    let mut dropped = 0;

    for row in tbody.select(&tr_selector) {
        // Header-only rows land in the implied tbody when thead is missing
        if row.select(&td_selector).next().is_none() {
            continue;
        }

        // Empty cells are decoration or merged cells, not values
        let cells: Vec<String> = row
            .select(&td_selector)
            .map(cell_text)
            .filter(|text| !text.is_empty())
            .collect();

        let width = *expected_width.get_or_insert(cells.len());
        if cells.len() == width {
            rows.push(cells);
        } else {
            debug!("Dropping row with {} cells (expected {}): {:?}", cells.len(), width, cells);
            dropped += 1;
        }
    }

    debug!("Extracted {} rows, dropped {} malformed rows", rows.len(), dropped);
    Ok(RawTable { column_names, rows })
}
