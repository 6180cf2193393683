//! `shelf init`: write the config file and create the data directory.

use std::path::PathBuf;

use tracing::info;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_dir, write_config, ShelfConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let data_dir = match args.dir.as_deref().or(ctx.cli().data_dir.as_deref()) {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir()?,
    };
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        )
    })?;
    write_config(&config_path, &ShelfConfig::new(data_dir.clone()))?;
    info!(config = %config_path.display(), data = %data_dir.display(), "initialized");

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    if ui.mode.is_pretty() {
        print(&ui, &badge(&ui, Badge::Ok, "Shelf is ready"));
        print(&ui, &format!("  {}", kv(&ui, "Config", &config_path.display().to_string())));
        print(&ui, &format!("  {}", kv(&ui, "Data", &data_dir.display().to_string())));
        print(&ui, &hint(&ui, "shelf add \"One Piece\" --rating EX"));
    } else {
        println!("status=ok");
        println!("{}", kv(&ui, "Config", &config_path.display().to_string()));
        println!("{}", kv(&ui, "Data", &data_dir.display().to_string()));
    }
    Ok(())
}
