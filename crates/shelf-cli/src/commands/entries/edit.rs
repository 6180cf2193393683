use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::{from_core, CliError};
use crate::helpers::{find_entry, optional_text, parse_category, parse_rating, parse_viewed};
use crate::output::{entry_json, print_json, print_receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if !args.has_changes() {
        return Err(CliError::invalid_input(
            "Nothing to change.\nHint: Pass at least one of --name, --category, --rating, --link, --position or --viewed.",
        )
        .into());
    }

    // Parse everything before touching the collection.
    let category = args.category.as_deref().map(parse_category).transpose()?;
    let rating = args.rating.as_deref().map(parse_rating).transpose()?;
    let viewed = args.viewed.as_deref().map(parse_viewed).transpose()?;

    let mut store = ctx.open_store_for_write()?;
    let mut entry = find_entry(&store, &args.id)?;

    if let Some(name) = &args.name {
        entry.name = name.clone();
    }
    if let Some(category) = category {
        entry.category = category;
    }
    if let Some(rating) = rating {
        entry.rating = rating;
    }
    if let Some(link) = args.link.as_deref() {
        entry.link = optional_text(link);
    }
    if let Some(position) = args.position.as_deref() {
        entry.last_position = optional_text(position);
    }
    if viewed.is_some() {
        entry.view_date = viewed;
    }

    let updated = store.update(entry).map_err(from_core)?;

    if args.json {
        print_json(&entry_json(&updated)?)?;
    } else {
        let ui = ctx.ui_context(false, None);
        print_receipt(&ui, "Updated entry", &updated, ctx.quiet());
    }
    Ok(())
}
