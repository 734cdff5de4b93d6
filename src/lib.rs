pub mod aggregator;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch_error;
pub mod fetcher;
pub mod pipeline;
pub mod probe;
pub mod records;
pub mod table;
