//! Default transport backed by `reqwest`.

use super::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;

/// [`Transport`] over a pooled `reqwest::Client`.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the deadlines from `config`. No deadline is
    /// applied when the config leaves them unset.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap a preconfigured client (proxies, custom TLS roots, ...).
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        // Reading to EOF hands the connection back to the pool. On error the
        // response is dropped here, which closes it.
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}
