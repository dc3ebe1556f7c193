//! Async runtime adapter: runs background work and sends messages back to the UI layer.

mod async_runtime;
mod message;

pub use async_runtime::{AsyncRuntime, ExplainJob};
pub use message::AppMessage;
