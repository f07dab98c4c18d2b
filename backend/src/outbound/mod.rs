//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing
//! concrete implementations of domain port traits:
//!
//! - **persistence**: file- and memory-backed snapshot stores
//! - **remote**: HTTP record gateway (reqwest)
//! - **prompt**: terminal delete confirmation
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod persistence;
pub mod prompt;
pub mod remote;

pub use prompt::ConsolePrompt;
