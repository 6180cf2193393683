//! Output formatting for entries and statistics.
//!
//! JSON goes through `serde_json` using the same field names as the stored
//! document; text output goes through the `ui` renderers.

mod json;
mod text;

pub use json::{entries_json, entry_json, print_json};
pub use text::{print_entry, print_entry_list, print_receipt, print_stats};
