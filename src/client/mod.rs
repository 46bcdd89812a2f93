//! Chat completions client.

mod builder;


pub use builder::ClientBuilder;

use crate::error::{Error, Result};
use crate::http::{HttpRequest, Transport, TransportError, TransportErrorKind};
use crate::types::{ChatRequest, ChatResponse};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Client for the chat completions endpoint.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent [`get_chat`](Self::get_chat) calls. Cloning shares the
/// transport and its connection pool. No conversation state is kept: send
/// the full message history with every request.
#[derive(Clone)]
pub struct ChatClient {
    transport: Arc<dyn Transport>,
    api_key: String,
    url: String,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("api_key", &"[REDACTED]")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Start configuring a client for `api_key`. The key is sent as-is and
    /// never checked locally.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key.into())
    }

    /// Client for the default endpoint over the default transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Client for a custom endpoint, e.g. a proxy or compatible server.
    pub fn with_url(api_key: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).url(url).build()
    }

    /// Client for the default endpoint over a custom transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        Self::builder(api_key).transport(transport).build()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one chat completion request and decode the reply.
    ///
    /// # Application errors are not `Err`
    ///
    /// The HTTP status is not inspected. When the API rejects a request
    /// (invalid key, bad parameters, rate limit) it answers with a JSON error
    /// body, which decodes into `Ok(response)` with
    /// [`ChatResponse::api_error`] set. Always check it:
    ///
    /// ```no_run
    /// # async fn run(client: gpt35::ChatClient, request: gpt35::ChatRequest) -> gpt35::Result<()> {
    /// let response = client.get_chat(&request).await?;
    /// if let Some(error) = response.api_error() {
    ///     eprintln!("API error: {error}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::Encode`] if the request cannot be serialized, e.g. a NaN or
    ///   infinite sampling parameter. Nothing is sent.
    /// - [`Error::Transport`] if the exchange fails (DNS, connect, TLS,
    ///   transport timeout) or the API key is not a valid header value.
    /// - [`Error::Decode`] if the body does not start with a JSON chat
    ///   response. Bytes after the first JSON value are ignored.
    ///
    /// Exactly one attempt is made. The response body is fully read before
    /// this returns on every path.
    pub async fn get_chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let body = serde_json::to_vec(request).map_err(Error::Encode)?;
        let headers = self.build_headers()?;

        tracing::debug!(
            url = %self.url,
            model = %request.model,
            messages = request.messages.len(),
            "Chat completion request"
        );

        let response = self
            .transport
            .post(HttpRequest {
                url: self.url.clone(),
                headers,
                body: body.into(),
            })
            .await
            .map_err(|e| {
                tracing::debug!(url = %self.url, error = %e, "Chat completion transport failure");
                Error::Transport(e)
            })?;

        let status = response.status;
        // Only the first JSON value is read; anything after it is ignored.
        let mut de = serde_json::Deserializer::from_slice(&response.body);
        let chat = ChatResponse::deserialize(&mut de).map_err(|e| {
            tracing::debug!(status = %status, error = %e, "Failed to decode chat completion");
            Error::decode(e, &response.body)
        })?;

        match chat.api_error() {
            Some(error) => tracing::warn!(
                status = %status,
                error_type = %error.error_type,
                code = %error.code,
                "Chat completion API error: {}",
                error.message
            ),
            None => tracing::debug!(
                status = %status,
                id = %chat.id,
                choices = chat.choices.len(),
                total_tokens = chat.usage.total_tokens,
                "Chat completion response"
            ),
        }

        Ok(chat)
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|_| {
            TransportError::new(
                TransportErrorKind::InvalidRequest,
                "API key contains invalid header characters",
            )
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }
}
