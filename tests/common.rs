#![allow(dead_code)]

use std::ops::RangeInclusive;

use holiday_scraper::config::Config;
use holiday_scraper::fetcher::HolidayPageFetcher;
use mockito::{Mock, ServerGuard};

pub fn year_path(year: i32) -> String {
    format!("/berlin/{year}-dates/")
}

/// Config pointing at the mock server, everything else default
pub fn test_config(server: &ServerGuard) -> Config {
    Config {
        base_url: server.url(),
        timeout_secs: 5,
        ..Config::default()
    }
}

pub fn test_fetcher(server: &ServerGuard) -> HolidayPageFetcher {
    HolidayPageFetcher::new(&test_config(server)).expect("Failed to build fetcher")
}

/// Holiday page shaped like the real site, including the trailing notes row
pub fn holiday_page(columns: &[&str], rows: &[Vec<String>]) -> String {
    let header: String = columns.iter().map(|c| format!("<th>{c}</th>")).collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr class=\"odd\">{cells}</tr>\n")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html><head><title>Berlin Public Holidays</title></head>
<body>
<table class="publicholidays phgtable">
<thead><tr>{header}</tr></thead>
<tbody>
{body}<tr><td colspan="{}" class="foot">Please scroll down to end of page for notes</td></tr>
</tbody>
</table>
</body></html>"#,
        columns.len()
    )
}

/// `count` rows of Date, Day, Holiday (plus Note when `with_note`)
pub fn generated_rows(count: usize, with_note: bool) -> Vec<Vec<String>> {
    (1..=count)
        .map(|day| {
            let mut row = vec![
                format!("{day:02} Jan"),
                "Monday".to_string(),
                format!("Holiday {day}"),
            ];
            if with_note {
                row.push(format!("Note {day}"));
            }
            row
        })
        .collect()
}

pub fn three_column_page(count: usize) -> String {
    holiday_page(&["Date", "Day", "Holiday"], &generated_rows(count, false))
}

pub fn four_column_page(count: usize) -> String {
    holiday_page(&["Date", "Day", "Holiday", "Note"], &generated_rows(count, true))
}

pub async fn mock_year(server: &mut ServerGuard, year: i32, body: &str) -> Mock {
    server
        .mock("GET", year_path(year).as_str())
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

/// Years without a mock answer 501, which the fetcher treats as a failure
pub async fn mock_years(server: &mut ServerGuard, years: RangeInclusive<i32>, body: &str) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for year in years {
        mocks.push(mock_year(server, year, body).await);
    }
    mocks
}
