use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::error::Error as _;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://www.google.com/search";

/// Desktop browser identity sent with every results-page request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Image search, Portuguese locale, large images only
const QUERY_SUFFIX: &str = "tbm=isch&hl=pt-br&tbs=isz:l";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP status {status} for url ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

impl FetchError {
    /// Display text followed by every source in the chain not already shown.
    pub fn cause_chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

pub fn search_url(endpoint: &str, query: &str) -> String {
    format!(
        "{}?q={}&{}",
        endpoint,
        urlencoding::encode(query),
        QUERY_SUFFIX
    )
}

#[derive(Clone)]
pub struct ImageSearch {
    client: Client,
    endpoint: String,
}

impl ImageSearch {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Performs the single GET against the results page and returns its raw body.
    pub async fn fetch(&self, query: &str) -> Result<String, FetchError> {
        let url = search_url(&self.endpoint, query);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        Ok(response.text().await?)
    }
}

impl Default for ImageSearch {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}
