use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::fetch_error::FetchError;

/// Body of a page that answered 200; any other status is a `FetchError`.
#[derive(Debug, Clone)]
pub struct Page {
    pub body: Vec<u8>,
}

impl Page {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
pub struct HolidayPageFetcher {
    client: reqwest::Client,
    base_url: String,
    city: String,
}

impl HolidayPageFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            city: config.city.clone(),
        })
    }

    /// Example: year=2023 -> https://publicholidays.de/berlin/2023-dates/
    pub fn year_url(&self, year: i32) -> String {
        format!("{}/{}/{year}-dates/", self.base_url, self.city)
    }

    pub async fn fetch_year(&self, year: i32) -> Result<Page, FetchError> {
        let url = self.year_url(year);
        self.fetch(&url).await
    }

    /// Any transport error or non-200 status is returned as a `FetchError`
    /// and logged; callers decide whether that ends the run.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let result = self.try_fetch(url).await;
        if let Err(e) = &result {
            warn!("Error with request to {url}: {e}");
        }
        result
    }

    async fn try_fetch(&self, url: &str) -> Result<Page, FetchError> {
        debug!("Sending HTTP request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!("Received HTTP response with status: {status}");
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;
        debug!("Retrieved page, size: {} bytes", body.len());

        Ok(Page { body: body.to_vec() })
    }
}
