//! OpenAI Chat Completions provider
//!
//! Implements [`LlmGateway`](takedown_application::ports::llm_gateway::LlmGateway)
//! against any OpenAI-compatible `/chat/completions` endpoint with native
//! function tools.

mod gateway;
mod session;
mod transport;
pub mod types;

pub use gateway::OpenAiGateway;
pub use session::{OpenAiSession, SamplingParams};
pub use transport::{ChatTransport, ReqwestChatTransport};
