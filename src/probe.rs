use std::ops::RangeInclusive;

use tracing::{debug, info, instrument, warn};

use crate::fetcher::HolidayPageFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TowardFuture,
    TowardPast,
}

impl Direction {
    fn step(self) -> i32 {
        match self {
            Direction::TowardFuture => 1,
            Direction::TowardPast => -1,
        }
    }
}

/// Where probing starts and the years it may never leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearLimits {
    pub anchor: i32,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for YearLimits {
    fn default() -> Self {
        Self {
            anchor: 2019,
            min_year: 1990,
            max_year: 3000,
        }
    }
}

impl YearLimits {
    /// The anchor is pulled inside `[min_year, max_year]` when it falls outside.
    pub fn new(anchor: i32, min_year: i32, max_year: i32) -> Self {
        let anchor = if min_year <= max_year {
            anchor.clamp(min_year, max_year)
        } else {
            anchor
        };
        Self {
            anchor,
            min_year,
            max_year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

/// Walks from the anchor one year at a time until a page fails to load.
///
/// Returns the year one step back toward the anchor from the first failure.
/// If no failure occurs before the configured limit, the limit itself is
/// returned without having been verified past. Assumes the site has no gaps
/// between the anchor and the real bound.
#[instrument(skip(fetcher))]
pub async fn probe_bound(fetcher: &HolidayPageFetcher, direction: Direction, limits: YearLimits) -> i32 {
    let step = direction.step();
    let limit = match direction {
        Direction::TowardFuture => limits.max_year,
        Direction::TowardPast => limits.min_year,
    };
    if limits.min_year > limits.max_year {
        warn!("Empty year limits {}..={}", limits.min_year, limits.max_year);
        return limit;
    }

    let mut year = limits.anchor.clamp(limits.min_year, limits.max_year);
    if year != limits.anchor {
        warn!("Anchor {} outside {}..={}, starting at {year}", limits.anchor, limits.min_year, limits.max_year);
    }

    while (limits.min_year..=limits.max_year).contains(&year) {
        if let Err(e) = fetcher.fetch_year(year).await {
            debug!("Probe stopped at {year}: {e}");
            return year.saturating_sub(step);
        }
        match year.checked_add(step) {
            Some(next) => year = next,
            None => break,
        }
    }

    limit
}

pub async fn discover_year_range(fetcher: &HolidayPageFetcher, limits: YearLimits) -> YearRange {
    info!("Getting range of valid years");
    let min = probe_bound(fetcher, Direction::TowardPast, limits).await;
    let max = probe_bound(fetcher, Direction::TowardFuture, limits).await;
    info!("Discovered years {min} to {max}");
    YearRange { min, max }
}
