//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - The per-invocation [`AppContext`]
//! - Terminal rendering of store notices

mod context;
mod notifier;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
