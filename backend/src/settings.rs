//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SCREENING_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence order.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::{OrthoConfig, OrthoError, is_display_request};
use serde::Deserialize;

use crate::inbound::http::json::DEFAULT_JSON_LIMIT;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling how the HTTP server binds and accepts
/// request bodies.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCREENING")]
pub struct AppSettings {
    /// Bind address as an IP literal. Defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Bind port. Defaults to `8080`.
    pub port: Option<u16>,
    /// Maximum accepted JSON body size in bytes. Unset means bodies are not
    /// capped.
    pub max_body_bytes: Option<usize>,
}

impl AppSettings {
    /// Return the socket address to bind.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] when `host` is not an IP
    /// literal.
    ///
    /// # Examples
    /// ```
    /// use screening_backend::settings::AppSettings;
    ///
    /// let settings = AppSettings {
    ///     host: Some("127.0.0.1".to_owned()),
    ///     port: Some(9000),
    ///     max_body_bytes: None,
    /// };
    /// assert_eq!(settings.bind_addr()?.to_string(), "127.0.0.1:9000");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let ip = match self.host.as_deref() {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|error| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid SCREENING_HOST `{raw}`: {error}"),
                )
            })?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Return the JSON body limit; uncapped unless configured.
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_JSON_LIMIT)
    }
}

/// Return the `--help` or `--version` output carried by a failed load.
///
/// Clap reports these requests as errors; callers should print them with
/// [`clap::Error::exit`] instead of treating them as configuration faults.
#[must_use]
pub fn display_request(error: &OrthoError) -> Option<&clap::Error> {
    match error {
        OrthoError::CliParsing(err) if is_display_request(err) => Some(err.as_ref()),
        OrthoError::Aggregate(errors) => errors.iter().find_map(display_request),
        _ => None,
    }
}
