use std::env;

use anyhow::Result;

use crate::catalog::client::{DEFAULT_OPENLIBRARY_URL, DEFAULT_USER_AGENT};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Per-run
/// options (page size, output paths, ...) come from CLI flags instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Open Library base URL (defaults to https://openlibrary.org).
    /// Point it elsewhere for a mirror or a local test server.
    pub openlibrary_url: String,
    /// User-Agent header sent with every catalog request
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables. Every field has a default.
    pub fn load() -> Result<Self> {
        Ok(Self {
            openlibrary_url: env::var("OPENLIBRARY_URL")
                .unwrap_or_else(|_| DEFAULT_OPENLIBRARY_URL.to_string()),
            user_agent: env::var("AUTHORLENS_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        })
    }

    /// Check that the catalog URL looks usable before making requests.
    pub fn require_catalog(&self) -> Result<()> {
        if !(self.openlibrary_url.starts_with("http://")
            || self.openlibrary_url.starts_with("https://"))
        {
            anyhow::bail!(
                "OPENLIBRARY_URL must be an http(s) URL, got \"{}\".\n\
                 Unset it to use {DEFAULT_OPENLIBRARY_URL}.",
                self.openlibrary_url
            );
        }
        Ok(())
    }
}
