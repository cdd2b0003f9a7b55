// SPDX-License-Identifier: MIT

//! Environment-driven configuration
//!
//! Everything comes from env vars (a `.env` file is loaded at startup), the
//! same variables the frontend deployment already sets: `PORT`, `AGENT_ID`,
//! `SINGAPORE_AGENT_ID`, `STATIC_DIR`, `QUERIES_CSV`.

use crate::error::BridgeError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Default conversational agent, used when no persona override applies
    pub agent_id: Option<String>,
    /// Agent for the Singapore-markets persona ("akshat")
    pub singapore_agent_id: Option<String>,
    /// Directory served under /static and holding index.html / avatar.html
    pub static_dir: PathBuf,
    /// CSV file backing the example-query catalog
    pub queries_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, BridgeError> {
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| BridgeError::config(format!("invalid PORT value: {}", v)))?,
            Err(_) => 3000,
        };

        Ok(Self {
            port,
            agent_id: env::var("AGENT_ID").ok(),
            singapore_agent_id: env::var("SINGAPORE_AGENT_ID").ok(),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            queries_path: env::var("QUERIES_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("queries.csv")),
        })
    }

    /// Resolve the agent id for an opponent persona.
    ///
    /// "akshat" fronts the Singapore markets agent; every other persona (or
    /// none) uses the default agent. Falls back to the default when the
    /// Singapore agent is not configured.
    pub fn agent_id_for(&self, opponent: Option<&str>) -> Option<&str> {
        match opponent {
            Some("akshat") => self
                .singapore_agent_id
                .as_deref()
                .or(self.agent_id.as_deref()),
            _ => self.agent_id.as_deref(),
        }
    }
}
