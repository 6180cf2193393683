use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::errors::{from_core, CliError};
use crate::helpers::find_entry;
use crate::output::print_receipt;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store_for_write()?;
    let entry = find_entry(&store, &args.id)?;
    let ui = ctx.ui_context(false, None);

    if !args.yes {
        if !ui.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to remove without confirmation.\nHint: Pass --yes to remove non-interactively.",
            )
            .into());
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Remove \"{}\" from your collection?", entry.name))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                match ui.mode {
                    OutputMode::Pretty => print(&ui, &badge(&ui, Badge::Info, "Cancelled")),
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    if let Some(removed) = store.remove(&entry.id).map_err(from_core)? {
        print_receipt(&ui, "Removed entry", &removed, ctx.quiet());
    }
    Ok(())
}
