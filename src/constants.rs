//! Process-wide constants for the chat completions API.

/// Default chat model identifier.
pub const MODEL_GPT35_TURBO: &str = "gpt-3.5-turbo";

/// Context window of [`MODEL_GPT35_TURBO`] in tokens.
///
/// Informational only. Requests are never checked against it.
pub const MAX_TOKENS_GPT35_TURBO: u32 = 4096;

/// Chat completions endpoint used when no URL override is configured.
pub const DEFAULT_URL: &str = "https://api.openai.com/v1/chat/completions";
