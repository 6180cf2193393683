use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::find_entry;
use crate::output::{entry_json, print_entry, print_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let (store, _load_error) = ctx.open_store()?;
    let entry = find_entry(&store, &args.id)?;

    if args.json {
        return print_json(&entry_json(&entry)?);
    }
    print_entry(&ctx.ui_context(false, None), &entry);
    Ok(())
}
