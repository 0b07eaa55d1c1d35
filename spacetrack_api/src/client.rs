//! Client for the Space-Track query API.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    decode::decode_records,
    query::{DataClass, Query, QueryField},
    transport::{ConnectionGuard, HttpTransport, Transport},
    Error,
};

/// Endpoint layout and transport settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Scheme and host. Defaults to `https://www.space-track.org`.
    pub base_url: String,
    /// Path of the login endpoint that also accepts the query.
    pub login_path: String,
    /// Path prefix of rendered query URLs.
    pub query_path: String,
    /// Request timeout for the HTTP transport.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.space-track.org".to_string(),
            login_path: "/ajaxauth/login".to_string(),
            query_path: "/basicspacedata/query".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Production paths under a different host. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Base that rendered query URLs start with.
    pub fn query_base(&self) -> String {
        format!("{}{}", self.base_url, self.query_path)
    }

    fn login_url(&self) -> Result<Url, Error> {
        Url::parse(format!("{}{}", self.base_url, self.login_path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidArgument(format!("invalid login URL: {}", e))
        })
    }
}

/// Account used to authenticate each query.
#[derive(Clone)]
pub struct Credentials {
    identity: String,
    password: String,
}

impl Credentials {
    pub fn new(identity: &str, password: &str) -> Result<Self, Error> {
        if identity.trim().is_empty() {
            return Err(Error::invalid("identity must not be empty"));
        }
        if password.is_empty() {
            return Err(Error::invalid("password must not be empty"));
        }
        Ok(Self {
            identity: identity.to_string(),
            password: password.to_string(),
        })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Executes queries against the service.
///
/// Every [`execute`](Client::execute) is one POST to the login endpoint that
/// carries the credentials and the rendered query together; no session is
/// kept between calls. The client holds no mutable state and can be shared.
pub struct Client<T: Transport = HttpTransport> {
    config: ClientConfig,
    credentials: Credentials,
    transport: T,
}

impl Client {
    /// Creates a client for the production service.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Creates a client with custom endpoints over the HTTPS transport.
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Self {
        let transport = HttpTransport::new(config.timeout);
        Self::with_transport(config, credentials, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, credentials: Credentials, transport: T) -> Self {
        Self {
            config,
            credentials,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The URL `query` is sent as.
    pub fn query_url<F: QueryField>(&self, query: &Query<F>) -> String {
        query.to_url(&self.config.query_base())
    }

    /// Runs `query` and decodes every returned row as `R`.
    ///
    /// Opens one connection, posts `identity`, `password`, and `query` as a
    /// url-encoded form, and reads the whole body before closing the
    /// connection. The body is then repaired and decoded; there is no partial
    /// result.
    pub async fn execute<R, F>(&self, query: &Query<F>) -> Result<Vec<R>, Error>
    where
        R: DeserializeOwned,
        F: QueryField,
    {
        let query_url = self.query_url(query);
        let login_url = self.config.login_url()?;
        tracing::debug!(class = query.class_name(), url = %query_url, "Executing query");

        let mut guard = ConnectionGuard::new(self.transport.open(&login_url).await?);
        let body = guard
            .connection()
            .post_form(&[
                ("identity", self.credentials.identity.as_str()),
                ("password", self.credentials.password.as_str()),
                ("query", query_url.as_str()),
            ])
            .await?;
        drop(guard);

        let records = decode_records::<R>(&body)?;
        tracing::debug!(class = query.class_name(), rows = records.len(), "Decoded query result");
        Ok(records)
    }

    /// Runs a query typed by a catalog class, decoding into its record type.
    pub async fn fetch<C: DataClass>(
        &self,
        query: &Query<C::Field>,
    ) -> Result<Vec<C::Record>, Error> {
        self.execute::<C::Record, C::Field>(query).await
    }
}
