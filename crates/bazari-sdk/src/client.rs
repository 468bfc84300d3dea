use std::time::Duration;

use tracing::{debug, warn};

use crate::session::ViewSession;
use bazari_types::OwnerProfile;

/// Configuration for the owner-profile client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backing user API (default: local dev server)
    pub base_url: String,
    /// Timeout for HTTP requests (default: 5 seconds)
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Fetches owner profiles for view sessions.
///
/// Transport failure is not an error class here: an unknown user, a
/// non-success status, a network error, or a bad payload all resolve to
/// "no owner" and the view renders from listing data alone.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("bazari-sdk/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { config, http }
    }

    /// Fetch one owner profile by id.
    pub async fn owner_profile(&self, id: &str) -> Option<OwnerProfile> {
        let url = user_url(&self.config.base_url, id);
        debug!(id = %id, url = %url, "Fetching owner profile");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(id = %id, error = %err, "Owner fetch failed, rendering without owner");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                id = %id,
                status = %response.status(),
                "Owner fetch returned non-success, rendering without owner"
            );
            return None;
        }

        match response.json::<OwnerProfile>().await {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(id = %id, error = %err, "Owner payload unusable, rendering without owner");
                None
            }
        }
    }

    /// Resolve and attach the owner for a session.
    ///
    /// Returns whether a result was applied: sessions without an owner
    /// id skip the fetch, and a listing swapped mid-flight makes the
    /// ticket stale so the late response is dropped.
    pub async fn hydrate(&self, session: &mut ViewSession) -> bool {
        let Some(ticket) = session.begin_owner_fetch() else {
            return false;
        };
        let owner = self.owner_profile(ticket.owner_id()).await;
        session.complete_owner_fetch(&ticket, owner)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

fn user_url(base: &str, id: &str) -> String {
    format!("{}/users/{}", base.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_url_joins_cleanly() {
        assert_eq!(
            user_url("http://localhost:5000/api", "u-1"),
            "http://localhost:5000/api/users/u-1"
        );
        assert_eq!(
            user_url("https://bazari.example.com/api/", "u-2"),
            "https://bazari.example.com/api/users/u-2"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.base_url.ends_with("/api"));
    }
}
