use std::collections::BTreeSet;

use scraper::Html;
use tracing::{info, instrument, warn};

use crate::error::HolidayError;
use crate::fetcher::HolidayPageFetcher;
use crate::records::{normalize_dates, to_records, RowRecord};
use crate::table::{extract_table, TableSelector};

/// All holiday rows across the processed years, plus every column seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    pub columns: BTreeSet<String>,
    pub records: Vec<RowRecord>,
}

impl HolidaySet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn extend(&mut self, column_names: Vec<String>, records: Vec<RowRecord>) {
        self.columns.extend(column_names);
        self.records.extend(records);
    }
}

/// Extracts and normalizes the holidays of one year's page.
pub fn parse_year_page(
    html: &str,
    year: i32,
    selector: &TableSelector,
) -> Result<(Vec<String>, Vec<RowRecord>), HolidayError> {
    let document = Html::parse_document(html);
    let table = extract_table(&document, selector)?;
    let mut records = to_records(&table.column_names, table.rows)?;
    normalize_dates(&mut records, year)?;
    Ok((table.column_names, records))
}

/// Processes `years` in order, one request at a time. A year whose page
/// cannot be fetched is skipped; extraction and date errors abort the run.
#[instrument(skip(fetcher, selector, years))]
pub async fn collect(
    fetcher: &HolidayPageFetcher,
    selector: &TableSelector,
    years: impl IntoIterator<Item = i32>,
) -> Result<HolidaySet, HolidayError> {
    let mut holidays = HolidaySet::default();

    for year in years {
        info!("Processing year {year}");
        let page = match fetcher.fetch_year(year).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Skipping year {year}: {e}");
                continue;
            }
        };

        let (column_names, records) = parse_year_page(&page.text(), year, selector)?;
        info!("Year {year}: {} holidays", records.len());
        holidays.extend(column_names, records);
    }

    Ok(holidays)
}
