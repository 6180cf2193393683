use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::VERSION;

/// Shelf - track your manga, manhwa and other serialized reads
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the collection
    #[arg(short, long, global = true, env = "SHELF_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where the collection will be stored
    #[arg(value_name = "DIR")]
    pub dir: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Name of the work
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Category (manga, manhwa, outro)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Rating (EX, +S, S, -S, +A, A, -A, +B, B, C, D, E, F, DeixarPraMaisTarde)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rating: Option<String>,

    /// External link
    #[arg(long)]
    pub link: Option<String>,

    /// Last chapter/episode read
    #[arg(short, long)]
    pub position: Option<String>,

    /// View date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub viewed: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New rating
    #[arg(short, long, allow_hyphen_values = true)]
    pub rating: Option<String>,

    /// New link (empty string clears it)
    #[arg(long)]
    pub link: Option<String>,

    /// New last position (empty string clears it)
    #[arg(short, long)]
    pub position: Option<String>,

    /// New view date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub viewed: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl EditArgs {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.category.is_some()
            || self.rating.is_some()
            || self.link.is_some()
            || self.position.is_some()
            || self.viewed.is_some()
    }
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only names containing this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Filter by category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by rating
    #[arg(short, long, allow_hyphen_values = true)]
    pub rating: Option<String>,

    /// Sort key (name, rating, category, viewed)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain); defaults to table on a terminal
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain); defaults to table on a terminal
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and choose where the collection lives
    Init(InitArgs),

    /// Add an entry to the collection
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Remove an entry
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List entries (search, filter, sort)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Collection statistics
    Stats(StatsArgs),

    /// Export the collection as JSON
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
