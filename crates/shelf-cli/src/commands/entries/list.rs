use shelf_core::{view, Criteria};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_category, parse_output_format, parse_rating, parse_sort_key};
use crate::output::{entries_json, print_entry_list, print_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let format = parse_output_format(args.format.as_deref())?;

    let mut criteria = Criteria::new().sort_by(match args.sort.as_deref() {
        Some(value) => parse_sort_key(value)?,
        None => config.default_sort()?,
    });
    if args.desc || (args.sort.is_none() && config.defaults.descending) {
        criteria = criteria.descending();
    }
    if let Some(text) = args.search.as_deref() {
        criteria = criteria.search(text);
    }
    if let Some(value) = args.category.as_deref() {
        criteria = criteria.category(parse_category(value)?);
    }
    if let Some(value) = args.rating.as_deref() {
        criteria = criteria.rating(parse_rating(value)?);
    }

    let (store, _load_error) = ctx.open_store()?;
    let entries = view(store.entries(), &criteria);

    if args.json {
        return print_json(&entries_json(&entries)?);
    }
    let ui = ctx.ui_context(false, format);
    print_entry_list(&ui, &entries, store.entries());
    Ok(())
}
