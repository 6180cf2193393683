//! Parsing and lookup helpers shared by the command handlers.

mod lookup;
mod parsing;

pub use lookup::find_entry;
pub use parsing::{
    optional_text, parse_category, parse_output_format, parse_rating, parse_sort_key, parse_viewed,
    OutputFormat,
};
