//! HTTP client for the affiliate publisher offers API.
//!
//! Wraps `reqwest` with API key handling, status classification, and lenient
//! decoding of the `{"data": [...]}` envelope. Malformed offer records are
//! logged and skipped; a missing `data` array surfaces as
//! [`ClientError::MissingData`] so callers can tell "no offers" apart from
//! "unusable response".

use std::time::Duration;

use afflink_core::{AppConfig, BrandOffer};
use reqwest::{Client, StatusCode, Url};

use crate::error::ClientError;
use crate::types::ApprovalFilter;

const OFFERS_PATH: &str = "affiliates/offers.json";

/// Connection settings shared by every client a session creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub locale: String,
    pub per_page: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ClientOptions {
    /// Default options pointed at `base_url` (used to target a mock server).
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            locale: afflink_core::config::DEFAULT_LOCALE.to_owned(),
            per_page: 500,
            timeout_secs: 30,
            user_agent: afflink_core::config::DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl From<&AppConfig> for ClientOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base.clone(),
            locale: config.locale.clone(),
            per_page: config.per_page,
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Client for the affiliate offers endpoint, bound to one API key.
pub struct AffiliatesClient {
    client: Client,
    api_key: String,
    offers_url: Url,
    locale: String,
    per_page: u32,
}

impl AffiliatesClient {
    /// Creates a client for `api_key` using `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `options.base_url` is not a valid URL.
    pub fn new(api_key: &str, options: &ClientOptions) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(options.user_agent.as_str())
            .build()?;

        // Exactly one slash before the path so `join` appends rather than
        // replacing the last segment of the base.
        let normalised = format!("{}/", options.base_url.trim_end_matches('/'));
        let offers_url = Url::parse(&normalised)
            .and_then(|base| base.join(OFFERS_PATH))
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: options.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            offers_url,
            locale: options.locale.clone(),
            per_page: options.per_page,
        })
    }

    /// Fetches one page of offers visible to this key.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthorized`] on HTTP 401/403.
    /// - [`ClientError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the body is not JSON.
    /// - [`ClientError::MissingData`] if the JSON has no `data` array.
    pub async fn fetch_offers(
        &self,
        filter: ApprovalFilter,
    ) -> Result<Vec<BrandOffer>, ClientError> {
        let url = self.build_url(filter);
        let context = format!("offers({filter:?})");
        let body = self.request_json(&url, &context).await?;
        let offers = parse_offers(body, &context)?;
        tracing::debug!(?filter, count = offers.len(), "fetched offers");
        Ok(offers)
    }

    /// Builds the offers URL with properly percent-encoded query parameters.
    fn build_url(&self, filter: ApprovalFilter) -> Url {
        let mut url = self.offers_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            if let Some(status) = filter.query_value() {
                pairs.append_pair("approval_statuses", status);
            }
            pairs.append_pair("per_page", &self.per_page.to_string());
            pairs.append_pair("locale", &self.locale);
        }
        url
    }

    /// Sends a GET request, classifies the HTTP status, and parses the body
    /// as JSON.
    ///
    /// The request URL carries the API key, so errors only ever report the
    /// offers path and strip the URL from `reqwest` errors.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::Http(e.without_url()))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.offers_url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Extracts offers from the `data` array, skipping records that do not
/// deserialize.
fn parse_offers(body: serde_json::Value, context: &str) -> Result<Vec<BrandOffer>, ClientError> {
    let serde_json::Value::Object(mut envelope) = body else {
        return Err(ClientError::MissingData {
            context: context.to_owned(),
        });
    };
    let Some(serde_json::Value::Array(records)) = envelope.remove("data") else {
        return Err(ClientError::MissingData {
            context: context.to_owned(),
        });
    };

    let offers = records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| {
            serde_json::from_value::<BrandOffer>(record)
                .map_err(|e| {
                    tracing::warn!(index = i, error = %e, "skipping malformed offer record");
                })
                .ok()
        })
        .collect();
    Ok(offers)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
