//! Chat completion response types.

use super::de::{lenient_string, null_as_default};
use super::request::Message;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Response from the chat completions endpoint.
///
/// Every field defaults when missing, so an error-only body such as
/// `{"error": {"message": "Invalid API key"}}` still decodes. Check
/// [`ChatResponse::api_error`] before reading `choices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: Usage,
    /// Set only when the API reported a failure.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_error_as_none"
    )]
    pub error: Option<ApiError>,
}

impl ChatResponse {
    /// The failure reported by the API, if any.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Content of the first choice.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A completion alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: Message,
    /// Why generation stopped, e.g. `stop` or `length`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub finish_reason: String,
}

/// Token accounting for a request.
///
/// The API guarantees `total_tokens == prompt_tokens + completion_tokens`;
/// values are passed through unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Failure reported inside a response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub error_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub param: String,
    #[serde(deserialize_with = "lenient_string")]
    pub code: String,
}

impl ApiError {
    /// True when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
            && self.error_type.is_empty()
            && self.param.is_empty()
            && self.code.is_empty()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("unknown API error")?;
        } else {
            f.write_str(&self.message)?;
        }
        if !self.code.is_empty() {
            write!(f, " (code: {})", self.code)?;
        } else if !self.error_type.is_empty() {
            write!(f, " (type: {})", self.error_type)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Both `null` and an object with only empty fields mean "no error".
fn empty_error_as_none<'de, D>(deserializer: D) -> Result<Option<ApiError>, D::Error>
where
    D: Deserializer<'de>,
{
    let error = Option::<ApiError>::deserialize(deserializer)?;
    Ok(error.filter(|e| !e.is_empty()))
}
