//! Shared messages.

mod model;
mod service;

pub use model::{Message, ShareMessageRequest};
pub use service::MessageService;
