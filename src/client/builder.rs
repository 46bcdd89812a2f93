use super::ChatClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{ReqwestTransport, Transport};
use std::fmt;
use std::sync::Arc;
use url::Url;

enum TransportChoice {
    Default,
    Explicit(Option<Arc<dyn Transport>>),
}

/// Options for [`ChatClient`]. Obtain one with [`ChatClient::builder`].
///
/// Nothing is validated until [`build`](Self::build), and building never
/// touches the network.
pub struct ClientBuilder {
    api_key: String,
    config: ClientConfig,
    transport: TransportChoice,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"[REDACTED]")
            .field("config", &self.config)
            .field(
                "transport",
                &match self.transport {
                    TransportChoice::Default => "default",
                    TransportChoice::Explicit(Some(_)) => "custom",
                    TransportChoice::Explicit(None) => "none",
                },
            )
            .finish()
    }
}

impl ClientBuilder {
    pub(super) fn new(api_key: String) -> Self {
        Self {
            api_key,
            config: ClientConfig::default(),
            transport: TransportChoice::Default,
        }
    }

    /// Replace all settings, including the URL, with `config`.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the endpoint.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Override the HTTP transport. Timeouts from the config only apply to
    /// the default transport.
    #[must_use]
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.transport_handle(Some(Arc::new(transport)))
    }

    /// Override the HTTP transport with a shared handle. `None` is rejected
    /// by [`build`](Self::build).
    #[must_use]
    pub fn transport_handle(mut self, transport: Option<Arc<dyn Transport>>) -> Self {
        self.transport = TransportChoice::Explicit(transport);
        self
    }

    pub fn build(self) -> Result<ChatClient> {
        let url = validate_url(&self.config.url)?;

        let transport: Arc<dyn Transport> = match self.transport {
            TransportChoice::Default => Arc::new(ReqwestTransport::new(&self.config)?),
            TransportChoice::Explicit(Some(transport)) => transport,
            TransportChoice::Explicit(None) => {
                return Err(Error::Config("cannot set an empty HTTP transport".into()));
            }
        };

        tracing::debug!(url = %url, "Created chat client");

        Ok(ChatClient {
            transport,
            api_key: self.api_key,
            url,
        })
    }
}

fn validate_url(url: &str) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("URL must not be empty".into()));
    }

    let parsed =
        Url::parse(trimmed).map_err(|e| Error::Config(format!("invalid URL {trimmed:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(Error::Config(format!(
            "unsupported URL scheme {scheme:?} in {trimmed:?}"
        ))),
    }
}
