//! # Auth broker client
//!
//! Redeems the one-time session id that the OAuth broker placed in the redirect
//! URL fragment. The broker's contract is a single GET to its session-data
//! endpoint with the id in an `X-Session-ID` header; a success response carries
//! the member's profile plus a durable `session_token`.
//!
//! A rejected id (expired, already redeemed, or forged) and a transport failure
//! are kept apart in [`BrokerError`] so the server log records which one
//! happened, even though both surface to the client as a failed exchange.

use serde::Deserialize;
use thiserror::Error;

use super::config::BrokerConfig;

/// Profile data returned by the broker for a valid session id.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerProfile {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub session_token: String,
}

#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("broker request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("broker rejected session id (status {0})")]
    Rejected(u16),
}

/// HTTP client for the broker's session-data endpoint.
pub struct BrokerClient {
    config: BrokerConfig,
    http: reqwest::Client,
}

impl BrokerClient {
    pub fn from_env() -> Self {
        Self {
            config: BrokerConfig::from_env(),
            http: reqwest::Client::new(),
        }
    }

    /// Exchange a one-time session id for the member's profile. Valid exactly
    /// once; a second redemption is rejected by the broker.
    pub async fn session_data(&self, session_id: &str) -> Result<BrokerProfile, BrokerError> {
        let response = self
            .http
            .get(self.config.session_data_url())
            .header("X-Session-ID", session_id)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BrokerError::Rejected(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Login URL for redirecting the browser to the broker.
    pub fn login_url(&self, redirect: &str) -> Result<String, String> {
        self.config.login_url(redirect)
    }
}
