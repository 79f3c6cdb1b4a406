use crate::errors::FetchError;
use crate::models::{HistoricalSeries, Scope};
use reqwest::Client;
use serde::Deserialize;
use std::borrow::Cow;
use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://disease.sh";
pub const DEFAULT_LAST_DAYS: u32 = 90;

/// Client for the disease.sh historical endpoints.
///
/// One GET per call. No retry and no timeout.
#[derive(Debug, Clone)]
pub struct HistoricalClient {
    base_url: String,
    last_days: u32,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    message: String,
}

impl HistoricalClient {
    pub fn new(base_url: &str, last_days: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            last_days,
            client: Client::new(),
        }
    }

    pub fn historical_url(&self, scope: &Scope) -> String {
        let target = match scope {
            Scope::Worldwide => Cow::Borrowed("all"),
            Scope::Country(country) => urlencoding::encode(country),
        };
        format!(
            "{}/v3/covid-19/historical/{}?lastdays={}",
            self.base_url, target, self.last_days
        )
    }

    pub async fn fetch(&self, scope: &Scope) -> Result<HistoricalSeries, FetchError> {
        let url = self.historical_url(scope);
        info!("fetching historical data from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<UpstreamMessage>(&body)
                .map(|upstream| upstream.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            warn!("upstream answered {status} for {url}: {message}");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
