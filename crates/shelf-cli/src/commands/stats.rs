use shelf_core::{summarize, Clock, SystemClock};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_json, print_stats};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let (store, _load_error) = ctx.open_store()?;
    let stats = summarize(store.entries(), SystemClock.now());

    if args.json {
        return print_json(&stats);
    }
    print_stats(&ctx.ui_context(false, format), &stats);
    Ok(())
}
