use shelf_core::EntryDraft;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::from_core;
use crate::helpers::{optional_text, parse_category, parse_rating, parse_viewed};
use crate::output::{entry_json, print_json, print_receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let category = match args.category.as_deref() {
        Some(value) => parse_category(value)?,
        None => config.default_category()?,
    };
    let rating = match args.rating.as_deref() {
        Some(value) => parse_rating(value)?,
        None => config.default_rating()?,
    };

    let mut draft = EntryDraft::new(args.name.as_str(), category, rating);
    draft.link = args.link.as_deref().and_then(optional_text);
    draft.last_position = args.position.as_deref().and_then(optional_text);
    if let Some(viewed) = args.viewed.as_deref() {
        draft.view_date = Some(parse_viewed(viewed)?);
    }

    let mut store = ctx.open_store_for_write()?;
    let entry = store.add(draft).map_err(from_core)?;

    if args.json {
        print_json(&entry_json(&entry)?)?;
    } else {
        let ui = ctx.ui_context(false, None);
        print_receipt(&ui, "Added entry", &entry, ctx.quiet());
    }
    Ok(())
}
