//! UI primitives for the Shelf CLI.
//!
//! - **Context**: Output mode and terminal detection (TTY, color, unicode)
//! - **Theme**: Badges, symbols and `owo-colors` styles
//! - **Render**: Headers, key-value lines, tables, bars, errors
//! - **Format**: String utilities (truncate, pad, short ids)
//!
//! # Usage
//!
//! ```ignore
//! let ui = ctx.ui_context(args.json, format);
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//! print(&ui, &header(&ui, "list", Some("3 entries")));
//! print(&ui, &simple_table(&ui, &columns, &rows));
//! ```

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use theme::Badge;

pub use render::{
    badge, bar, blank_line, header, hint, kv, print, print_error, simple_table, Column,
};

pub use format::{format_date, format_datetime, pad_right, short_id, truncate};
