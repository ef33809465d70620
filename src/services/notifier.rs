use reqwest::{Client, Url};
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::SosError;
use crate::models::{Coordinate, SosAck, SosReply};

/// Path of the dispatch endpoint, resolved against the configured origin.
pub const SOS_PATH: &str = "/api/send-sos";

/// Client for the SOS dispatch endpoint.
///
/// Every call issues exactly one request. Nothing is retried, and clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SosNotifier {
    client: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl SosNotifier {
    pub fn new(config: &Config) -> Result<Self, SosError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(SosError::Client)?;

        Ok(Self {
            client,
            endpoint: resolve_endpoint(&config.base_url)?,
            timeout: config.timeout(),
        })
    }

    /// Notifier for the given origin with every other setting at its default.
    pub fn with_base_url(base_url: &str) -> Result<Self, SosError> {
        Self::new(&Config {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Replace the deadline applied to each exchange. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// POST the coordinate and decode the JSON response body.
    pub async fn send(&self, coordinate: Coordinate) -> Result<SosAck, SosError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(coordinate))
                .await
                .map_err(|_| SosError::Timeout(limit))?,
            None => self.exchange(coordinate).await,
        }
    }

    /// Like [`send`](Self::send), but gives up with [`SosError::Cancelled`]
    /// as soon as `cancel` completes. The in-flight request is dropped.
    pub async fn send_with_cancel<F>(
        &self,
        coordinate: Coordinate,
        cancel: F,
    ) -> Result<SosAck, SosError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                debug!("SOS for {} cancelled by caller", coordinate);
                Err(SosError::Cancelled)
            }
            result = self.send(coordinate) => result,
        }
    }

    /// Send the SOS and log the outcome: one INFO line on success, one ERROR
    /// line on failure. The result is handed back unchanged.
    pub async fn notify(&self, coordinate: Coordinate) -> Result<SosAck, SosError> {
        let result = self.send(coordinate).await;

        match &result {
            Ok(ack) => match ack.reply() {
                Some(SosReply { ok: true, to, .. }) => info!(
                    status = %ack.status,
                    body = %ack.body,
                    "🚨 SOS for {} dispatched to {}",
                    coordinate,
                    to.as_deref().unwrap_or("unknown recipient")
                ),
                Some(SosReply { ok: false, msg, .. }) => info!(
                    status = %ack.status,
                    body = %ack.body,
                    "SOS for {} not dispatched: {}",
                    coordinate,
                    msg.as_deref().unwrap_or("no reason given")
                ),
                None => info!(status = %ack.status, body = %ack.body, "SOS response received"),
            },
            Err(e) => error!("❌ {}", e.chain()),
        }

        result
    }

    /// Run [`notify`](Self::notify) as a detached task. Dropping the handle
    /// leaves the request running; awaiting it yields the typed result.
    pub fn spawn(&self, coordinate: Coordinate) -> JoinHandle<Result<SosAck, SosError>> {
        let notifier = self.clone();
        tokio::spawn(async move { notifier.notify(coordinate).await })
    }

    async fn exchange(&self, coordinate: Coordinate) -> Result<SosAck, SosError> {
        debug!("Sending SOS for {} to {}", coordinate, self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&coordinate)
            .send()
            .await
            .map_err(SosError::Transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(SosError::Transport)?;
        debug!(%status, "SOS endpoint answered with {} bytes", bytes.len());

        let body = serde_json::from_slice(&bytes)?;
        Ok(SosAck { status, body })
    }
}

fn resolve_endpoint(base_url: &str) -> Result<Url, SosError> {
    let invalid = |reason: String| SosError::InvalidEndpoint {
        url: base_url.to_string(),
        reason,
    };

    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    base.join(SOS_PATH).map_err(|e| invalid(e.to_string()))
}
