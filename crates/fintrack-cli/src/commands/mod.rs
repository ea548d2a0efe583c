//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init/status commands and shared utilities (open_db)
//! - `entries` - Entry commands (add, list, stats)
//! - `serve` - Web server command

pub mod core;
pub mod entries;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use entries::*;
pub use serve::*;
