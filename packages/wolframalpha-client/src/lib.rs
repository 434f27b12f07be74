//! Wolfram|Alpha REST client with heuristic answer extraction.
//!
//! The client fetches full results (JSON) or spoken results (plain text).
//! A full result is a tree of sections and subsections with free-form text;
//! [`AnswerExtractor`] picks the single most useful string out of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use wolframalpha_client::{AnswerExtractor, ExtractConfig, WolframClient};
//!
//! let client = WolframClient::from_env()?;
//! let extractor = AnswerExtractor::new(&ExtractConfig::default());
//!
//! let mut doc = client.ask("speed of light").await?;
//! let answer = doc.remove_input_interpretation().answer(&extractor)?;
//! println!("{answer}");
//! ```
//!
//! # Offline decoding
//!
//! ```rust,ignore
//! use wolframalpha_client::Document;
//!
//! let doc: Document = std::fs::read_to_string("response.json")?.parse()?;
//! ```

pub mod answer;
pub mod config;
pub mod error;
pub mod types;

pub use answer::{AnswerExtractor, Normalizer, NumericAnswer};
pub use config::{ClientConfig, ExtractConfig, SecretString};
pub use error::{Result, WolframError};
pub use types::{Document, Failure, OneOrMany, QueryError, QueryResult, Section, Subsection};

use reqwest::{Client, Request, Response};
use std::future::Future;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Wolfram|Alpha API client.
#[derive(Debug, Clone)]
pub struct WolframClient {
    http_client: Client,
    app_id: SecretString,
    base_url: String,
}

impl WolframClient {
    /// Create a client from explicit settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.app_id.expose().trim().is_empty() {
            return Err(WolframError::Config("app id is empty".into()));
        }

        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http_client,
            app_id: config.app_id,
            base_url: config.base_url,
        })
    }

    /// Create from `WOLFRAM_APP_ID` and friends; see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn full_results_request(&self, query: &str) -> Result<Request> {
        let request = self
            .http_client
            .get(format!("{}/v2/query", self.base_url))
            .query(&[
                ("input", query),
                ("format", "plaintext"),
                ("output", "JSON"),
                ("appid", self.app_id.expose()),
            ])
            .build()?;
        Ok(request)
    }

    fn spoken_request(&self, query: &str) -> Result<Request> {
        let request = self
            .http_client
            .get(format!("{}/v1/spoken", self.base_url))
            .query(&[("i", query), ("appid", self.app_id.expose())])
            .build()?;
        Ok(request)
    }

    /// Execute a request, turning non-2xx statuses into [`WolframError::Api`].
    async fn execute(&self, request: Request) -> Result<Response> {
        let response = self.http_client.execute(request).await.map_err(|e| {
            warn!(error = %e, "Wolfram|Alpha request failed");
            WolframError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "Wolfram|Alpha API error");
            return Err(WolframError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Ask the spoken results API. Returns a single sentence.
    pub async fn ask_spoken(&self, query: &str) -> Result<String> {
        let start = std::time::Instant::now();
        let response = self.execute(self.spoken_request(query)?).await?;
        let text = response.text().await?;

        debug!(
            query,
            duration_ms = start.elapsed().as_millis(),
            "Wolfram|Alpha spoken result"
        );
        Ok(text)
    }

    /// Ask the full results API and return the raw JSON body.
    ///
    /// Fails with [`WolframError::InvalidFormat`] if the body is not JSON.
    pub async fn ask_json(&self, query: &str) -> Result<Vec<u8>> {
        let start = std::time::Instant::now();
        let response = self.execute(self.full_results_request(query)?).await?;
        let body = response.bytes().await?.to_vec();

        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;

        debug!(
            query,
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis(),
            "Wolfram|Alpha full result"
        );
        Ok(body)
    }

    /// Ask the full results API and decode the response.
    pub async fn ask(&self, query: &str) -> Result<Document> {
        let body = self.ask_json(query).await?;
        Document::from_slice(&body)
    }

    /// Run [`ask`](Self::ask) on a background task.
    ///
    /// The receiver gets exactly one value; `None` means the query failed
    /// (use [`ask`](Self::ask) to see why). Dropping the receiver is the
    /// only way to stop waiting. Must be called inside a tokio runtime.
    pub fn spawn_ask(&self, query: impl Into<String>) -> oneshot::Receiver<Option<Document>> {
        self.spawn_detached(query.into(), |client, query| async move {
            client.ask(&query).await
        })
    }

    /// Run [`ask_json`](Self::ask_json) on a background task; see
    /// [`spawn_ask`](Self::spawn_ask).
    pub fn spawn_ask_json(&self, query: impl Into<String>) -> oneshot::Receiver<Option<Vec<u8>>> {
        self.spawn_detached(query.into(), |client, query| async move {
            client.ask_json(&query).await
        })
    }

    /// Run [`ask_spoken`](Self::ask_spoken) on a background task; see
    /// [`spawn_ask`](Self::spawn_ask).
    pub fn spawn_ask_spoken(&self, query: impl Into<String>) -> oneshot::Receiver<Option<String>> {
        self.spawn_detached(query.into(), |client, query| async move {
            client.ask_spoken(&query).await
        })
    }

    fn spawn_detached<T, F, Fut>(&self, query: String, call: F) -> oneshot::Receiver<Option<T>>
    where
        T: Send + 'static,
        F: FnOnce(WolframClient, String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();

        tokio::spawn(async move {
            let value = match call(client, query.clone()).await {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(query = %query, error = %e, "Detached Wolfram|Alpha query failed");
                    None
                }
            };
            // Receiver may be gone; nobody is waiting then.
            let _ = tx.send(value);
        });

        rx
    }
}
