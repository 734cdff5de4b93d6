use std::env;
use std::time::Duration;

use crate::probe::YearLimits;
use crate::table::{RowWidthPolicy, TableSelector};

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub city: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub anchor_year: i32,
    pub min_year: i32,
    pub max_year: i32,
    pub table_classes: Vec<String>,
    pub row_width: RowWidthPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "https://publicholidays.de".to_string(),
            city: "berlin".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
            anchor_year: 2019,
            min_year: 1990,
            max_year: 3000,
            table_classes: vec!["publicholidays".to_string(), "phgtable".to_string()],
            row_width: RowWidthPolicy::FirstRow,
        }
    }
}

impl Config {
    /// Every variable is optional; unset or unparsable values keep the default.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            base_url: env::var("HOLIDAYS_BASE_URL").unwrap_or(defaults.base_url),
            city: env::var("HOLIDAYS_CITY").unwrap_or(defaults.city),
            user_agent: env::var("HOLIDAYS_USER_AGENT")
                .ok()
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            timeout_secs: env::var("HOLIDAYS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            anchor_year: env::var("HOLIDAYS_ANCHOR_YEAR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.anchor_year),
            min_year: env::var("HOLIDAYS_MIN_YEAR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_year),
            max_year: env::var("HOLIDAYS_MAX_YEAR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_year),
            table_classes: env::var("HOLIDAYS_TABLE_CLASSES")
                .ok()
                .map(|v| parse_classes(&v))
                .filter(|classes| !classes.is_empty())
                .unwrap_or(defaults.table_classes),
            row_width: env::var("HOLIDAYS_ROW_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.row_width),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn year_limits(&self) -> YearLimits {
        YearLimits::new(self.anchor_year, self.min_year, self.max_year)
    }

    pub fn table_selector(&self) -> TableSelector {
        TableSelector::new(self.table_classes.clone()).with_row_width(self.row_width)
    }
}

fn parse_classes(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}
