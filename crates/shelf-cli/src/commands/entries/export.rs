use std::path::Path;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::from_core;
use crate::ui::{badge, print, Badge};

/// Write the collection as a pretty-printed JSON document, in stored order.
///
/// An unreadable collection is an error rather than an empty export.
pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let (store, load_error) = ctx.open_store()?;
    if let Some(err) = load_error {
        return Err(from_core(err));
    }
    let document = serde_json::to_string_pretty(store.entries())?;

    match args.output.as_deref() {
        None => println!("{}", document),
        Some(path) => {
            let path = Path::new(path);
            std::fs::write(path, format!("{}\n", document)).map_err(|e| {
                anyhow::anyhow!("Failed to write export to {}: {}", path.display(), e)
            })?;
            if !ctx.quiet() {
                let ui = ctx.ui_context(false, None);
                let message = format!("Exported {} entries to {}", store.len(), path.display());
                if ui.mode.is_pretty() {
                    print(&ui, &badge(&ui, Badge::Ok, &message));
                } else {
                    println!("status=ok");
                    println!("exported={}", store.len());
                }
            }
        }
    }
    Ok(())
}
