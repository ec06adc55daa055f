use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::types::HostawayConfig;
use crate::domain::month::FetchWindow;
use crate::domain::reservation::Reservation;
use crate::error::{OccupancyError, Result};
use crate::ports::hostaway_api::{AccessToken, HostawayApi};

use super::parser;

const FETCH_FAILED: &str = "failed to fetch reservation data from Hostaway";

pub struct HostawayClient {
    http: Client,
    base_url: String,
    account_id: String,
    api_secret: String,
    page_limit: u32,
}

impl HostawayClient {
    pub fn new(config: &HostawayConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| OccupancyError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            account_id: config.account_id.clone(),
            api_secret: config.api_secret.clone(),
            page_limit: config.page_limit,
        })
    }

    /// `{base}/reservations/?limit=..&arrivalStartDate=..&arrivalEndDate=..`
    pub fn reservations_url(&self, window: &FetchWindow) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/reservations/", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("limit", &self.page_limit.to_string())
            .append_pair("arrivalStartDate", &window.start_param())
            .append_pair("arrivalEndDate", &window.end_param());
        Ok(url)
    }

    fn check_credentials(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(OccupancyError::Config("HOSTAWAY_ACCOUNT_ID is not set".into()));
        }
        if self.api_secret.is_empty() {
            return Err(OccupancyError::Config("HOSTAWAY_API_SECRET is not set".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl HostawayApi for HostawayClient {
    async fn access_token(&self) -> Result<AccessToken> {
        self.check_credentials()?;
        let url = format!("{}/accessTokens", self.base_url);
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.account_id.as_str()),
            ("client_secret", self.api_secret.as_str()),
            ("scope", "general"),
        ];

        info!("Attempting to get access token");

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Authentication request failed");
                OccupancyError::AuthFailed {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Token request rejected");
            return Err(OccupancyError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response.json().await.map_err(|e| OccupancyError::AuthFailed {
            reason: format!("unreadable token response: {e}"),
        })?;
        let token =
            parser::parse_access_token(&json).ok_or_else(|| OccupancyError::AuthFailed {
                reason: "token response has no access_token".into(),
            })?;

        info!("Access token received");
        Ok(AccessToken::new(token))
    }

    async fn list_reservations(
        &self,
        token: &AccessToken,
        window: &FetchWindow,
    ) -> Result<Vec<Reservation>> {
        let url = self.reservations_url(window)?;
        info!(url = %url, "Fetching reservations from Hostaway");

        let fetch_error = |detail: String| {
            error!(detail = %detail, "Error fetching Hostaway reservations");
            OccupancyError::Fetch {
                reason: FETCH_FAILED.into(),
            }
        };

        let response = self
            .http
            .get(url)
            .bearer_auth(token.secret())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        let json: Value = response.json().await.map_err(|e| fetch_error(e.to_string()))?;
        let reservations =
            parser::parse_reservations_response(&json).map_err(|e| fetch_error(e.to_string()))?;

        debug!(count = reservations.len(), "Decoded reservations");
        info!(count = reservations.len(), "Successfully fetched reservations");
        Ok(reservations)
    }
}
