//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, Badge, BAR, DOT};

/// Header line for a command.
///
/// Pretty mode: "Shelf · command (context)"
/// Plain mode: "shelf command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return format!("shelf {}", command);
    }
    let title = styled("Shelf", styles::bold(), ctx.color);
    let dot = DOT.get(ctx.unicode);
    match context {
        Some(c) => format!("{} {} {} ({})", title, dot, command, c),
        None => format!("{} {} {}", title, dot, command),
    }
}

/// Badge followed by an optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let shown = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        shown
    } else {
        format!("{} {}", shown, message)
    }
}

/// Key-value line.
///
/// Pretty mode: "Key: value" with a dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Borderless table for entry lists.
///
/// Pretty mode: aligned columns under dim headers
/// Plain mode: one tab-separated line per row, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Horizontal bar of `count` scaled against `max` over `width` cells.
/// A non-zero count always gets at least one cell.
pub fn bar(ctx: &UiContext, count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 || width == 0 {
        return String::new();
    }
    let cells = ((count * width) / max).clamp(1, width);
    styled(&BAR.get(ctx.unicode).repeat(cells), styles::cyan(), ctx.color)
}

/// Print to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Error message with optional hint.
///
/// Pretty mode: badge line plus "Hint: ..." on the next line
/// Plain mode: "error=message" plus "hint=..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
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
            is_tty: true,
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(header(&plain_ctx(), "list", Some("3 entries")), "shelf list");
        let h = header(&pretty_ctx(), "list", Some("3 entries"));
        assert!(h.starts_with("Shelf"));
        assert!(h.contains("list (3 entries)"));
    }

    #[test]
    fn test_kv() {
        assert_eq!(kv(&plain_ctx(), "Last Position", "Ch. 12"), "last_position=Ch. 12");
        assert_eq!(kv(&pretty_ctx(), "Rating", "EX"), "Rating: EX");
    }

    #[test]
    fn test_hint() {
        assert_eq!(hint(&plain_ctx(), "shelf add"), "hint=shelf add");
        assert_eq!(hint(&pretty_ctx(), "shelf add"), "Hint: shelf add");
    }

    #[test]
    fn test_simple_table_plain_is_tab_separated() {
        let columns = [Column::new("ID"), Column::new("Name")];
        let rows = vec![
            vec!["7a2e3c0b".to_string(), "Berserk".to_string()],
            vec!["9b3f4d1c".to_string(), "Solo Leveling".to_string()],
        ];
        let t = simple_table(&plain_ctx(), &columns, &rows);
        assert_eq!(t, "7a2e3c0b\tBerserk\n9b3f4d1c\tSolo Leveling");
    }

    #[test]
    fn test_simple_table_pretty_has_headers() {
        let columns = [Column::new("ID"), Column::new("Name")];
        let rows = vec![vec!["7a2e3c0b".to_string(), "Berserk".to_string()]];
        let t = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("ID"));
        assert!(t.contains("Name"));
        assert!(t.contains("Berserk"));
    }

    #[test]
    fn test_bar_scales_to_max() {
        let ctx = plain_ctx();
        assert_eq!(bar(&ctx, 4, 4, 20), "#".repeat(20));
        assert_eq!(bar(&ctx, 2, 4, 20), "#".repeat(10));
        assert_eq!(bar(&ctx, 1, 100, 20), "#");
        assert_eq!(bar(&ctx, 0, 4, 20), "");
        assert_eq!(bar(&ctx, 0, 0, 20), "");
    }

    #[test]
    fn test_error_message() {
        let e = error_message(&plain_ctx(), "Entry abcd not found", Some("Run `shelf list`"));
        assert_eq!(e, "error=Entry abcd not found\nhint=Run `shelf list`");

        let e = error_message(&pretty_ctx(), "Entry abcd not found", None);
        assert!(e.contains("[\u{2717}]"));
        assert!(e.contains("Entry abcd not found"));
    }
}
