//! The connection used for one authenticate-and-query exchange.
//!
//! [`Transport`] opens a [`Connection`] per execution; [`ConnectionGuard`]
//! owns it for the rest of that execution and closes it on every exit path.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::{errors::truncate_body, Error};

/// One open exchange with the service.
#[async_trait]
pub trait Connection: Send {
    /// Posts a url-encoded form and returns the full response body. Non-success
    /// statuses are reported as [`Error::HttpStatus`].
    async fn post_form(&mut self, form: &[(&str, &str)]) -> Result<String, Error>;

    /// Releases the connection. Called exactly once by [`ConnectionGuard`].
    fn close(&mut self) -> Result<(), Error>;
}

/// Opens connections to an endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn open(&self, endpoint: &Url) -> Result<Box<dyn Connection>, Error>;
}

/// HTTPS transport backed by `reqwest`. Each connection gets its own client,
/// so nothing is pooled between executions.
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn open(&self, endpoint: &Url) -> Result<Box<dyn Connection>, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("spacetrack_api/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Box::new(HttpConnection {
            client: Some(client),
            endpoint: endpoint.clone(),
        }))
    }
}

struct HttpConnection {
    client: Option<reqwest::Client>,
    endpoint: Url,
}

#[async_trait]
impl Connection for HttpConnection {
    async fn post_form(&mut self, form: &[(&str, &str)]) -> Result<String, Error> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| Error::RequestFailed("connection already closed".to_string()))?;
        let resp = client
            .post(self.endpoint.clone())
            .header("accept", "application/json, text/plain, */*")
            .form(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send query: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }
        Ok(body)
    }

    fn close(&mut self) -> Result<(), Error> {
        // Dropping the client shuts down its connection.
        match self.client.take() {
            Some(client) => {
                drop(client);
                Ok(())
            }
            None => Err(Error::RequestFailed(
                "connection already closed".to_string(),
            )),
        }
    }
}

/// Owns a [`Connection`] and closes it when dropped. A failed close is logged
/// and never replaces the outcome of the exchange.
pub struct ConnectionGuard {
    connection: Box<dyn Connection>,
}

impl ConnectionGuard {
    pub fn new(connection: Box<dyn Connection>) -> Self {
        Self { connection }
    }

    pub fn connection(&mut self) -> &mut dyn Connection {
        self.connection.as_mut()
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        if let Err(e) = self.connection.close() {
            tracing::warn!("Failed to close connection: {}", e);
        }
    }
}
