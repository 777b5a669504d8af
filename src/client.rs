use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::CompanyError;
use crate::parser;
use crate::record::{CompanyRecord, ContactFallback};

const USER_AGENT: &str = concat!("safer_snapshot/", env!("CARGO_PKG_VERSION"));

/// Fetches carrier snapshot pages and runs them through the parser.
///
/// One request per lookup: no retries, no caching.
pub struct SaferClient {
    http: reqwest::Client,
    settings: Settings,
}

impl SaferClient {
    pub fn new(settings: Settings) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(SaferClient { http, settings })
    }

    /// Snapshot URL for one USDOT number.
    pub fn query_url(&self, usdot: &str) -> String {
        format!(
            "{}&query_param=USDOT&query_string={}",
            self.settings.uri, usdot
        )
    }

    /// Raw page body. Non-2xx responses count as transport failures.
    pub async fn fetch_page(&self, usdot: &str) -> Result<String, CompanyError> {
        let transport = |source| CompanyError::Transport {
            usdot: usdot.to_string(),
            source,
        };

        let start = Instant::now();
        let body = self
            .http
            .get(self.query_url(usdot))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;

        debug!(
            "Fetched {} bytes for usdot {} in {}ms",
            body.len(),
            usdot,
            start.elapsed().as_millis()
        );
        Ok(body)
    }

    /// Fetch and parse one company.
    pub async fn get_company(
        &self,
        usdot: &str,
        fallback: &ContactFallback,
    ) -> Result<CompanyRecord, CompanyError> {
        info!("Get a company by usdot {} from the SAFER system...", usdot);
        let page = self.fetch_page(usdot).await?;
        parser::process_page(usdot, &page, fallback)
    }
}
