//! Shelf CLI - a personal catalog of manga, manhwa and other serialized reads
//!
//! This is the command-line interface for Shelf. It wires the core entry
//! store, query engine and aggregator to the terminal.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use shelf_core::VERSION;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, misc, stats};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.no_color);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (message, hint) = split_error_hint(&format!("{}", e));
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr, filtered by `SHELF_LOG` (default `warn`). Colors follow
/// the same rules as the rest of the output.
fn init_tracing(no_color: bool) {
    let ansi = !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();
    let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init();
}

/// Split an error into its message and hint, either an explicit
/// `\nHint:` line or a contextual hint for common failures.
fn split_error_hint(error: &str) -> (String, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            let hint = error[idx + marker.len()..].trim().to_string();
            return (error[..idx].to_string(), Some(hint));
        }
    }

    let lower = error.to_lowercase();
    let hint = if lower.contains("unknown rating") {
        Some("Ratings are EX, +S, S, -S, +A, A, -A, +B, B, C, D, E, F, DeixarPraMaisTarde.")
    } else if lower.contains("unknown category") {
        Some("Categories are manga, manhwa and outro.")
    } else if lower.contains("ambiguous") {
        Some("Use more characters of the entry ID.")
    } else if lower.contains("failed to parse config") {
        Some("Fix the TOML file or point SHELF_CONFIG at another one.")
    } else {
        None
    };
    (error.to_string(), hint.map(str::to_string))
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Add(args)) => entries::handle_add(ctx, args),
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args),
        Some(Commands::Remove(args)) => entries::handle_remove(ctx, args),
        Some(Commands::List(args)) => entries::handle_list(ctx, args),
        Some(Commands::Show(args)) => entries::handle_show(ctx, args),
        Some(Commands::Stats(args)) => stats::handle_stats(ctx, args),
        Some(Commands::Export(args)) => entries::handle_export(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            println!("Shelf v{}", VERSION);
            println!("\nQuickstart:");
            println!("  shelf init");
            println!("  shelf add \"One Piece\" --rating EX --position 1100");
            println!("  shelf list --sort rating");
            println!("  shelf stats");
            println!("\nRun `shelf --help` for full usage.");
            Ok(())
        }
    }
}
