//! Typed client for the OpenAI chat completions API.
//!
//! ```no_run
//! use gpt35::{ChatClient, ChatRequest, MODEL_GPT35_TURBO, Message};
//!
//! # async fn run() -> gpt35::Result<()> {
//! let client = ChatClient::new("sk-...")?;
//! let request = ChatRequest::new(MODEL_GPT35_TURBO, vec![Message::user("Hello!")]);
//!
//! let response = client.get_chat(&request).await?;
//! match response.api_error() {
//!     Some(error) => eprintln!("API error: {error}"),
//!     None => println!("{}", response.first_content().unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{ChatClient, ClientBuilder};
pub use config::ClientConfig;
pub use constants::{DEFAULT_URL, MAX_TOKENS_GPT35_TURBO, MODEL_GPT35_TURBO};
pub use error::{Error, Result};
pub use http::{
    HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError, TransportErrorKind,
};
pub use types::{ApiError, ChatRequest, ChatResponse, Choice, Message, Role, Stop, Usage};
