//! Career Advisor Backend
//!
//! Stateful core of a conversational career-development assistant:
//! - Session store with workflow stages and an interaction timeline
//! - Skill-gap, stage and auto-chain rules over tool results
//! - Domain tools backed by a static knowledge base
//! - actix-web surface for the tool-dispatch layer

pub mod agent;
pub mod api;
pub mod config;
pub mod error;

pub use agent::*;
pub use api::*;
pub use config::*;
pub use error::*;
