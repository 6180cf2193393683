//! Text and table output for entries and statistics.

use shelf_core::{Entry, Stats};

use crate::ui::{
    badge, bar, blank_line, format_date, format_datetime, header, hint, kv, pad_right, print,
    short_id, simple_table, truncate, Badge, Column, UiContext,
};

const NAME_WIDTH: usize = 40;
const BAR_WIDTH: usize = 30;

/// Print a single entry as key-value lines.
pub fn print_entry(ui: &UiContext, entry: &Entry) {
    let pretty = ui.mode.is_pretty();
    let lines = [
        kv(ui, "ID", &entry.id),
        kv(ui, "Name", &entry.name),
        kv(ui, "Category", entry.category.as_str()),
        kv(ui, "Rating", entry.rating.as_str()),
        kv(ui, "Link", entry.link.as_deref().unwrap_or("-")),
        kv(ui, "Last Position", entry.last_position.as_deref().unwrap_or("-")),
        kv(ui, "Viewed", &format_date(entry.view_date)),
        kv(ui, "Added", &format_datetime(&entry.date_added, pretty)),
    ];
    for line in lines {
        print(ui, &line);
    }
}

/// Summary printed after a mutation.
///
/// Quiet mode prints only the entry id so it can be captured by scripts.
pub fn print_receipt(ui: &UiContext, title: &str, entry: &Entry, quiet: bool) {
    if quiet {
        println!("{}", entry.id);
        return;
    }
    if ui.mode.is_pretty() {
        print(ui, &badge(ui, Badge::Ok, title));
        print(ui, &format!("  {}", kv(ui, "ID", &entry.id)));
        print(ui, &format!("  {}", kv(ui, "Name", &entry.name)));
    } else {
        print(ui, "status=ok");
        print(ui, &kv(ui, "ID", &entry.id));
    }
}

/// Print entries as a table (pretty) or tab-separated rows (plain).
///
/// `collection` is the whole store, so the short ids shown in pretty mode
/// stay unique across entries the view filtered out.
pub fn print_entry_list(ui: &UiContext, entries: &[&Entry], collection: &[Entry]) {
    let total = collection.len();
    if ui.mode.is_pretty() {
        let context = format!("{} of {}", entries.len(), total);
        print(ui, &header(ui, "list", Some(&context)));
        blank_line(ui);
    }

    if entries.is_empty() {
        if ui.mode.is_pretty() {
            let text = if total == 0 {
                "Your collection is empty. Add one with `shelf add <NAME>`."
            } else {
                "No entries match. Try a broader search."
            };
            print(ui, &hint(ui, text));
        }
        return;
    }

    let columns = [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Category"),
        Column::new("Rating"),
        Column::new("Position"),
        Column::new("Viewed"),
    ];
    let rows = entry_rows(entries, collection, ui.mode.is_pretty());
    print(ui, &simple_table(ui, &columns, &rows));
}

fn entry_rows(entries: &[&Entry], collection: &[Entry], pretty: bool) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|entry| {
            let (id, name) = if pretty {
                (
                    short_id(&entry.id, collection.iter().map(|e| e.id.as_str())),
                    truncate(&entry.name, NAME_WIDTH),
                )
            } else {
                (entry.id.clone(), entry.name.clone())
            };
            vec![
                id,
                name,
                entry.category.as_str().to_string(),
                entry.rating.as_str().to_string(),
                entry.last_position.clone().unwrap_or_else(|| "-".to_string()),
                format_date(entry.view_date),
            ]
        })
        .collect()
}

/// Print collection statistics. Pretty mode draws one bar per rating, scaled
/// to the largest rating count.
pub fn print_stats(ui: &UiContext, stats: &Stats) {
    for line in stats_lines(ui, stats) {
        print(ui, &line);
    }
}

/// Only categories and ratings present in the collection are listed.
fn stats_lines(ui: &UiContext, stats: &Stats) -> Vec<String> {
    let mut lines = Vec::new();
    if !ui.mode.is_pretty() {
        lines.push(format!("total={}", stats.total));
        lines.push(format!("recent={}", stats.recent_count));
        for (category, count) in &stats.by_category {
            lines.push(format!("category.{}={}", category, count));
        }
        for row in &stats.by_rating {
            lines.push(format!("rating.{}={}", row.rating, row.count));
        }
        return lines;
    }

    lines.push(header(ui, "stats", None));
    lines.push(String::new());
    lines.push(kv(ui, "Total", &stats.total.to_string()));
    lines.push(kv(ui, "Added (last 30 days)", &stats.recent_count.to_string()));
    for (category, count) in &stats.by_category {
        lines.push(kv(ui, category.as_str(), &count.to_string()));
    }
    if stats.by_rating.is_empty() {
        return lines;
    }
    lines.push(String::new());

    let label_width = stats
        .by_rating
        .iter()
        .map(|row| row.rating.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let max = stats.max_rating_count();
    for row in &stats.by_rating {
        lines.push(format!(
            "{}  {} {}",
            pad_right(row.rating.as_str(), label_width),
            bar(ui, row.count, max, BAR_WIDTH),
            row.count
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shelf_core::{summarize, Category, Rating};

    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            mode: OutputMode::Pretty,
            is_tty: true,
            ..plain_ctx()
        }
    }

    fn entry(id: &str, rating: Rating) -> Entry {
        Entry {
            id: id.to_string(),
            name: format!("Work {}", id),
            category: Category::Manga,
            rating,
            link: None,
            last_position: None,
            view_date: None,
            date_added: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_stats_bars_follow_canonical_order() {
        let entries = vec![entry("1", Rating::B), entry("2", Rating::Ex), entry("3", Rating::B)];
        let stats = summarize(&entries, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
        let ex = stats.by_rating.iter().position(|r| r.rating == Rating::Ex);
        let b = stats.by_rating.iter().position(|r| r.rating == Rating::B);
        assert!(ex < b);
        assert_eq!(stats.max_rating_count(), 2);

        let ui = plain_ctx();
        assert_eq!(bar(&ui, 2, stats.max_rating_count(), BAR_WIDTH), "#".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_stats_list_only_present_categories() {
        let entries = vec![entry("1", Rating::B), entry("2", Rating::Ex)];
        let stats = summarize(&entries, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());

        let plain = stats_lines(&plain_ctx(), &stats);
        assert!(plain.contains(&"category.manga=2".to_string()));
        assert!(!plain.iter().any(|l| l.starts_with("category.manhwa")));
        assert!(!plain.iter().any(|l| l.starts_with("category.outro")));
        assert!(!plain.iter().any(|l| l.starts_with("rating.C=")));

        let pretty = stats_lines(&pretty_ctx(), &stats);
        assert!(pretty.contains(&"manga: 2".to_string()));
        assert!(!pretty.iter().any(|l| l.starts_with("manhwa")));
    }

    #[test]
    fn test_pretty_rows_use_unique_short_ids_for_timestamp_ids() {
        let mut collection = vec![
            entry("1700000000001", Rating::B),
            entry("1700000000002", Rating::A),
            entry("1700000050000", Rating::C),
        ];
        collection[2].category = Category::Outro;
        let shown: Vec<&Entry> = collection.iter().skip(1).collect();

        let rows = entry_rows(&shown, &collection, true);
        assert_eq!(rows[0][0], "1700000000002");
        assert_eq!(rows[1][0], "170000005");

        let plain = entry_rows(&shown, &collection, false);
        assert_eq!(plain[1][0], "1700000050000");
    }
}
