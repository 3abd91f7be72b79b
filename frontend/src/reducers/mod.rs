//! Sub-reducers called from `update.rs`.
//!
//! Each domain (agent directory, chat session, attachments) lives in its
//! own module and returns `true` when it consumed the message.

pub mod agents;
pub mod attachments;
pub mod chat;
