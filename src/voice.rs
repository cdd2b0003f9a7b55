// SPDX-License-Identifier: MIT

//! Signed voice-session URLs
//!
//! The frontend starts a conversational voice session against a short-lived
//! signed URL that only the backend can mint, keyed by the agent chosen for
//! the opponent persona. `SessionProvider` is the single capability the
//! server needs from the voice vendor; `ElevenLabsProvider` is the real
//! implementation.

use crate::error::BridgeError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use url::Url;

/// A vendor that can mint a signed session URL for a conversational agent.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn signed_url(&self, agent_id: &str) -> Result<String, BridgeError>;
}

#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    signed_url: String,
}

/// ElevenLabs conversational AI implementation
pub struct ElevenLabsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsProvider {
    /// Create a new ElevenLabsProvider
    ///
    /// Requires `ELEVENLABS_API_KEY` environment variable to be set.
    /// Optionally uses `ELEVENLABS_BASE_URL` for custom endpoints.
    pub fn new() -> Result<Self, BridgeError> {
        let api_key = env::var("ELEVENLABS_API_KEY")
            .map_err(|_| BridgeError::config("ELEVENLABS_API_KEY must be set"))?;
        let base_url = env::var("ELEVENLABS_BASE_URL")
            .unwrap_or_else(|_| "https://api.elevenlabs.io/v1".to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url,
        })
    }
}

#[async_trait]
impl SessionProvider for ElevenLabsProvider {
    async fn signed_url(&self, agent_id: &str) -> Result<String, BridgeError> {
        let mut url = Url::parse(&format!(
            "{}/convai/conversation/get_signed_url",
            self.base_url
        ))?;
        url.query_pairs_mut().append_pair("agent_id", agent_id);

        let resp = self
            .client
            .get(url)
            .header("xi-api-key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        log::debug!("ElevenLabs signed-url response status: {}", status);

        if !status.is_success() {
            let text = resp.text().await?;
            return Err(BridgeError::api(
                "ElevenLabs",
                format!("{}: {}", status, text),
            ));
        }

        let body: SignedUrlResponse = resp.json().await?;
        log::info!("Signed URL generated for agent {}", agent_id);
        Ok(body.signed_url)
    }
}

/// Placeholder used when no API key is configured: the server still runs,
/// voice endpoints report the configuration error.
pub struct DisabledProvider;

#[async_trait]
impl SessionProvider for DisabledProvider {
    async fn signed_url(&self, _agent_id: &str) -> Result<String, BridgeError> {
        Err(BridgeError::config("ELEVENLABS_API_KEY must be set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_url_response_deserializes() {
        let body = r#"{"signed_url": "wss://api.elevenlabs.io/v1/convai/conversation?token=abc"}"#;
        let parsed: SignedUrlResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.signed_url,
            "wss://api.elevenlabs.io/v1/convai/conversation?token=abc"
        );
    }

    #[tokio::test]
    async fn test_disabled_provider_reports_config_error() {
        let err = DisabledProvider.signed_url("agent_x").await.unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }
}
