use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::HolidayError;

pub const DATE_KEY: &str = "Date";

/// One holiday entry keyed by column name. A missing key means the page had
/// no such column, which is different from an empty value.
pub type RowRecord = BTreeMap<String, String>;

/// Every row must have exactly one value per column name.
pub fn to_records(column_names: &[String], rows: Vec<Vec<String>>) -> Result<Vec<RowRecord>, HolidayError> {
    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != column_names.len())
    {
        return Err(HolidayError::SchemaMismatch {
            row,
            expected: column_names.len(),
            found: cells.len(),
        });
    }

    Ok(rows
        .into_iter()
        .map(|cells| column_names.iter().cloned().zip(cells).collect())
        .collect())
}

/// Rewrites each record's "Date" (e.g. "25 Dec") as an ISO-8601 date in `year`.
pub fn normalize_dates(records: &mut [RowRecord], year: i32) -> Result<(), HolidayError> {
    for record in records.iter_mut() {
        let raw = record.get(DATE_KEY).ok_or_else(|| {
            HolidayError::FormatDrift(format!("row has no '{DATE_KEY}' column for year {year}"))
        })?;
        let iso = parse_holiday_date(raw, year)?.format("%Y-%m-%d").to_string();
        record.insert(DATE_KEY.to_string(), iso);
    }
    Ok(())
}

fn parse_holiday_date(raw: &str, year: i32) -> Result<NaiveDate, HolidayError> {
    let value = format!("{} {year}", raw.trim());
    NaiveDate::parse_from_str(&value, "%d %b %Y").map_err(|source| HolidayError::DateParse {
        value: raw.to_string(),
        source,
    })
}
