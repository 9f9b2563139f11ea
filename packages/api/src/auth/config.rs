//! Auth broker configuration from environment variables.

/// Location of the external OAuth broker.
///
/// The broker owns the entire provider handshake; this application only consumes
/// its redirect contract: the browser is sent to the broker's root URL with a
/// `redirect` query parameter, and the broker comes back to that target with a
/// one-time `session_id` in the URL fragment, redeemable once at the session-data
/// endpoint.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub base_url: String,
}

const DEFAULT_BROKER_URL: &str = "https://auth.emergentagent.com";

impl BrokerConfig {
    /// Read `AUTH_BROKER_URL` from the environment, falling back to the hosted
    /// broker.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("AUTH_BROKER_URL")
            .unwrap_or_else(|_| DEFAULT_BROKER_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        Self { base_url }
    }

    /// Build the login URL the browser is redirected to, with `redirect` set to
    /// the post-login landing page.
    pub fn login_url(&self, redirect: &str) -> Result<String, String> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/", self.base_url),
            &[("redirect", redirect)],
        )
        .map_err(|e| e.to_string())?;
        Ok(url.to_string())
    }

    /// Endpoint that redeems a one-time session id for profile data.
    pub fn session_data_url(&self) -> String {
        format!("{}/auth/v1/env/oauth/session-data", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_encodes_redirect() {
        let config = BrokerConfig {
            base_url: "https://auth.example.com".into(),
        };
        let url = config
            .login_url("https://linkandlearnlabs.com/dashboard")
            .unwrap();
        assert!(url.starts_with("https://auth.example.com/?redirect="));
        assert!(url.contains("linkandlearnlabs.com%2Fdashboard"));
    }

    #[test]
    fn test_session_data_url() {
        let config = BrokerConfig {
            base_url: "https://auth.example.com".into(),
        };
        assert_eq!(
            config.session_data_url(),
            "https://auth.example.com/auth/v1/env/oauth/session-data"
        );
    }
}
