// HTTP fetching for product pages

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::utils::error::Result;

// Mimic a real browser request; some storefronts reject unknown agents
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.36";

/// Fetches product pages over HTTP
///
/// One client is reused across requests; a short pause after each
/// successful fetch keeps the request rate polite.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    delay: Duration,
}

impl PageFetcher {
    /// Creates a fetcher with a browser-like User-Agent and a 30 s timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            delay: Duration::from_millis(250),
        })
    }

    /// Fetches a page and returns its body.
    ///
    /// A non-success HTTP status is an error, not an empty page.
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("fetching {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.text()?;

        thread::sleep(self.delay);
        Ok(body)
    }
}
