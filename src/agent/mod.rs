//! Agent Module - Core of the Career Advisor
//!
//! Architecture:
//! - Session: per-user profile, progress, stage and interaction count
//! - Memory: interaction timeline behind the session store
//! - Stage / Chain: rules over the shape of tool results
//! - Tools: the callable tools and the dispatcher that wraps them

pub mod chain;
pub mod knowledge;
pub mod memory;
pub mod motivation;
pub mod session;
pub mod skill_gap;
pub mod stage;
pub mod tools;
pub mod types;

pub use chain::*;
pub use knowledge::*;
pub use memory::*;
pub use motivation::*;
pub use session::*;
pub use skill_gap::*;
pub use stage::*;
pub use tools::*;
pub use types::*;
