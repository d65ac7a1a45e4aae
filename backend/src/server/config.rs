//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use screening_backend::inbound::http::json::DEFAULT_JSON_LIMIT;
use screening_backend::settings::AppSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) json_limit: usize,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` with the default
    /// JSON body limit.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            json_limit: DEFAULT_JSON_LIMIT,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Build a configuration from loaded application settings.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured host is not an IP literal.
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        Ok(Self::new(settings.bind_addr()?).with_json_limit(settings.max_body_bytes()))
    }

    /// Override the maximum accepted JSON body size in bytes.
    #[must_use]
    pub fn with_json_limit(mut self, json_limit: usize) -> Self {
        self.json_limit = json_limit;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by unit tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
