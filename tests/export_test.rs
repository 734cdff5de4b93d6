// CSV output written from an aggregated run

mod common;

use holiday_scraper::aggregator::collect;
use holiday_scraper::config::Config;
use holiday_scraper::export::{write_csv, write_csv_file};
use mockito::Server;

use common::{four_column_page, mock_year, test_fetcher, three_column_page};

#[tokio::test]
async fn test_csv_has_header_plus_all_rows() {
    let mut server = Server::new_async().await;
    let _m2021 = mock_year(&mut server, 2021, &three_column_page(11)).await;
    let _m2022 = mock_year(&mut server, 2022, &four_column_page(13)).await;

    let fetcher = test_fetcher(&server);
    let holidays = collect(&fetcher, &Config::default().table_selector(), [2021, 2022])
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holidays.csv");
    write_csv_file(&path, &holidays).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], "Date,Day,Holiday,Note");
    assert_eq!(lines[1], "2021-01-01,Monday,Holiday 1,");
    assert_eq!(lines[12], "2022-01-01,Monday,Holiday 1,Note 1");
}

#[tokio::test]
async fn test_rerun_produces_identical_csv() {
    let mut server = Server::new_async().await;
    let _m2021 = mock_year(&mut server, 2021, &four_column_page(5)).await;
    let _m2022 = mock_year(&mut server, 2022, &three_column_page(7)).await;

    let fetcher = test_fetcher(&server);
    let selector = Config::default().table_selector();

    let mut first = Vec::new();
    let holidays = collect(&fetcher, &selector, [2021, 2022]).await.unwrap();
    write_csv(&mut first, &holidays).unwrap();

    let mut second = Vec::new();
    let holidays = collect(&fetcher, &selector, [2021, 2022]).await.unwrap();
    write_csv(&mut second, &holidays).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_write_csv_file_truncates_existing_output() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "stale contents that are much longer than the output\n").unwrap();

    let holidays = holiday_scraper::aggregator::HolidaySet {
        columns: ["Date"].iter().map(|c| c.to_string()).collect(),
        records: vec![[("Date".to_string(), "2023-12-25".to_string())].into_iter().collect()],
    };
    write_csv_file(file.path(), &holidays).unwrap();

    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "Date\n2023-12-25\n");
}
