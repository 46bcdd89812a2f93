//! HTTP transport seam.
//!
//! [`ChatClient`](crate::ChatClient) never talks to a socket directly. It
//! hands a fully built [`HttpRequest`] to a [`Transport`] and gets back an
//! [`HttpResponse`] whose body has already been read to the end, so the
//! connection is released before any decoding starts.

mod client;
mod error;

pub use client::ReqwestTransport;
pub use error::{TransportError, TransportErrorKind};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// An outgoing POST request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A received response with its body fully drained.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one request and returns one response.
///
/// Implementations must be safe to share between tasks and must read the
/// whole response body before returning, on success and on failure alike.
/// No retries: one call is one attempt.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).post(request).await
    }
}
