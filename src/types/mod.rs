//! Request and response values exchanged with the chat completions API.

mod de;
mod request;
mod response;

pub use request::{ChatRequest, Message, Role, Stop};
pub use response::{ApiError, ChatResponse, Choice, Usage};
