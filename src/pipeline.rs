use std::path::Path;

use tracing::info;

use crate::aggregator::{collect, HolidaySet};
use crate::config::Config;
use crate::error::HolidayError;
use crate::export::write_csv_file;
use crate::fetcher::HolidayPageFetcher;
use crate::probe::discover_year_range;

/// Scrapes `years` (or every year the site has, when empty) into `output`.
pub async fn export_holidays(config: &Config, years: Vec<i32>, output: &Path) -> Result<HolidaySet, HolidayError> {
    let fetcher = HolidayPageFetcher::new(config)?;

    let years: Vec<i32> = if years.is_empty() {
        discover_year_range(&fetcher, config.year_limits())
            .await
            .years()
            .collect()
    } else {
        years
    };
    info!(
        "Running for years {}",
        years.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(", ")
    );

    let holidays = collect(&fetcher, &config.table_selector(), years).await?;
    write_csv_file(output, &holidays)?;
    Ok(holidays)
}
