//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the host configuration and one pooled HTTP client used for every
//! forwarded request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

/// Clone is required by Axum; the config is shared and the client is a handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the state and its upstream client.
    ///
    /// Redirects are relayed to the browser rather than followed, and no
    /// cookie jar is kept: session cookies belong to the browser.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if the TLS backend cannot initialise.
    pub fn new(config: HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy.timeout_secs))
            .connect_timeout(Duration::from_secs(config.proxy.connect_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
