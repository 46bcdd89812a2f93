//! Chat completion request types.
//!
//! Optional numeric fields follow the API's "zero means unset" convention:
//! a zero `temperature`, `top_p`, `n`, `presence_penalty` or
//! `frequency_penalty` is left out of the payload, so an explicit zero can
//! never be sent. `stream` is omitted when false and `user` when empty.

use crate::constants::MODEL_GPT35_TURBO;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Speaker tag of a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    /// Any role this crate has no name for, kept verbatim.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            "system" => Self::System,
            _ => Self::Other(role),
        }
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::from(role.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Omitted on the wire when unset, letting the API apply its default.
    #[serde(
        default,
        skip_serializing_if = "role_is_empty",
        deserialize_with = "empty_role_as_none"
    )]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "super::de::null_as_default")]
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<Role>, content: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// A message without a role.
    pub fn untagged(content: impl Into<String>) -> Self {
        Self {
            role: None,
            content: content.into(),
        }
    }
}

fn role_is_empty(role: &Option<Role>) -> bool {
    role.as_ref().is_none_or(|r| r.as_str().is_empty())
}

fn empty_role_as_none<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let role = Option::<String>::deserialize(deserializer)?;
    Ok(role.filter(|r| !r.is_empty()).map(Role::from))
}

/// Stop condition: a single sequence or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stop {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Stop {
    fn from(stop: &str) -> Self {
        Self::One(stop.to_string())
    }
}

impl From<String> for Stop {
    fn from(stop: String) -> Self {
        Self::One(stop)
    }
}

impl From<Vec<String>> for Stop {
    fn from(stops: Vec<String>) -> Self {
        Self::Many(stops)
    }
}

impl From<Vec<&str>> for Stop {
    fn from(stops: Vec<&str>) -> Self {
        Self::Many(stops.into_iter().map(String::from).collect())
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "is_zero", serialize_with = "finite")]
    pub temperature: f64,
    #[serde(skip_serializing_if = "is_zero", serialize_with = "finite")]
    pub top_p: f64,
    #[serde(skip_serializing_if = "is_zero_count")]
    pub n: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Stop>,
    #[serde(skip_serializing_if = "is_zero", serialize_with = "finite")]
    pub presence_penalty: f64,
    #[serde(skip_serializing_if = "is_zero", serialize_with = "finite")]
    pub frequency_penalty: f64,
    /// Token id to bias, from -100 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<BTreeMap<String, i32>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// JSON has no NaN or infinity; reject them instead of sending `null`.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn finite<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(serde::ser::Error::custom(format!(
            "non-finite number {value} is not representable in JSON"
        )))
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_count(value: &u32) -> bool {
    *value == 0
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            model: MODEL_GPT35_TURBO.to_string(),
            messages: Vec::new(),
            temperature: 0.0,
            top_p: 0.0,
            n: 0,
            stream: false,
            stop: None,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            logit_bias: None,
            user: String::new(),
        }
    }
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    #[must_use]
    pub fn with_n(mut self, n: u32) -> Self {
        self.n = n;
        self
    }

    /// Ask the API to stream. Streamed bodies are not JSON documents, so
    /// [`ChatClient::get_chat`](crate::ChatClient::get_chat) reports them as
    /// decode errors.
    #[must_use]
    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    #[must_use]
    pub fn with_stop(mut self, stop: impl Into<Stop>) -> Self {
        self.stop = Some(stop.into());
        self
    }

    #[must_use]
    pub fn with_presence_penalty(mut self, penalty: f64) -> Self {
        self.presence_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_logit_bias(mut self, token: impl Into<String>, bias: i32) -> Self {
        self.logit_bias
            .get_or_insert_with(BTreeMap::new)
            .insert(token.into(), bias);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }
}
