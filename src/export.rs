use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::aggregator::HolidaySet;
use crate::error::HolidayError;

/// Header is the sorted column set; absent keys become empty cells.
pub fn write_csv<W: Write>(writer: W, holidays: &HolidaySet) -> Result<(), HolidayError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if !holidays.columns.is_empty() {
        csv_writer.write_record(&holidays.columns)?;
    }
    for record in &holidays.records {
        csv_writer.write_record(
            holidays
                .columns
                .iter()
                .map(|column| record.get(column).map(String::as_str).unwrap_or("")),
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[instrument(skip(holidays), fields(rows = holidays.len()))]
pub fn write_csv_file(path: &Path, holidays: &HolidaySet) -> Result<(), HolidayError> {
    let file = File::create(path)?;
    write_csv(file, holidays)?;
    info!("Wrote {} holidays to {}", holidays.len(), path.display());
    Ok(())
}
