use std::time::Duration;

use arena_shared::{
    action::Action,
    player::SecretId,
    status::Status,
    wire::{RegisterRequest, RegisterResponse, TurnRequest, TurnResponse},
    Tick,
};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::server::ArenaServer;

const STATUS_TIMEOUT: Duration = Duration::from_secs(10);
const LONG_POLL_TIMEOUT: Duration = Duration::from_secs(35);

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(reqwest::Error),
}

/// HTTP implementation of [`ArenaServer`].
pub struct Connection {
    http: reqwest::Client,
    base: String,
}

impl Connection {
    /// The caller parses the URL, so a bad server address fails before the
    /// session loop ever starts.
    pub fn new(base: Url) -> Result<Self, ConnectionError> {
        let http = reqwest::Client::builder()
            .timeout(STATUS_TIMEOUT)
            .build()
            .map_err(ConnectionError::Transport)?;

        Ok(Self {
            http,
            base: base.as_str().trim_end_matches('/').to_owned(),
        })
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ConnectionError> {
        response.json().await.map_err(ConnectionError::Malformed)
    }
}

#[async_trait]
impl ArenaServer for Connection {
    type Error = ConnectionError;

    async fn register(
        &self,
        name: &str,
        entry_key: &str,
    ) -> Result<RegisterResponse, ConnectionError> {
        let response = self
            .http
            .post(format!("{}/api/register", self.base))
            .json(&RegisterRequest { name, entry_key })
            .send()
            .await
            .map_err(ConnectionError::Transport)?;

        Self::decode(response).await
    }

    async fn status(
        &self,
        secret: &SecretId,
        after_tick: Option<Tick>,
    ) -> Result<Status, ConnectionError> {
        let mut request = self
            .http
            .get(format!("{}/api/status", self.base))
            .query(&[("secret_id", secret.as_str())]);

        // Tick-bounded requests are held open server-side until a newer
        // tick exists, so they get a much longer deadline.
        if let Some(tick) = after_tick {
            request = request
                .query(&[("after_tick", tick)])
                .timeout(LONG_POLL_TIMEOUT);
        }

        let response = request.send().await.map_err(ConnectionError::Transport)?;
        Self::decode(response).await
    }

    async fn submit_turn(
        &self,
        secret: &SecretId,
        action: &Action,
    ) -> Result<TurnResponse, ConnectionError> {
        let response = self
            .http
            .post(format!("{}/api/turn", self.base))
            .json(&TurnRequest {
                secret_id: secret,
                action,
            })
            .send()
            .await
            .map_err(ConnectionError::Transport)?;

        Self::decode(response).await
    }
}
