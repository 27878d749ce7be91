//! Runtime configuration from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `TRELLIS_ADDR` | `0.0.0.0:80` |
//! | `TRELLIS_TEMPLATE` | `templates/forms.html` |
//!
//! Log filtering is left to `RUST_LOG`, read by the subscriber the binary
//! installs.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Error;

pub const ADDR_VAR: &str = "TRELLIS_ADDR";
pub const TEMPLATE_VAR: &str = "TRELLIS_TEMPLATE";

const DEFAULT_ADDR: &str = "0.0.0.0:80";
const DEFAULT_TEMPLATE: &str = "templates/forms.html";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub template: PathBuf,
}

impl Config {
    /// Reads the process environment. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so callers need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr: SocketAddr = raw_addr.parse().map_err(|e: std::net::AddrParseError| Error::Config {
            key: ADDR_VAR,
            value: raw_addr.clone(),
            reason: e.to_string(),
        })?;

        let template = lookup(TEMPLATE_VAR)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_TEMPLATE), PathBuf::from);

        Ok(Self { addr, template })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 80)),
            template: PathBuf::from(DEFAULT_TEMPLATE),
        }
    }
}
