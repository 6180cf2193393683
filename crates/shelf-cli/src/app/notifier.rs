//! Renders store notices as badges on stderr.

use shelf_core::{NoticeKind, Notifier};

use crate::ui::{badge, Badge, UiContext};

pub struct TerminalNotifier {
    ui: UiContext,
    quiet: bool,
}

impl TerminalNotifier {
    pub fn new(ui: UiContext, quiet: bool) -> Self {
        Self { ui, quiet }
    }

    /// Badge line for a notice, e.g. `[OK] Entry added: Berserk was added ...`.
    pub fn render(&self, kind: NoticeKind, title: &str, message: &str) -> String {
        let kind = match kind {
            NoticeKind::Info => Badge::Ok,
            NoticeKind::Error => Badge::Err,
        };
        badge(&self.ui, kind, &format!("{}: {}", title, message))
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        if self.quiet && kind == NoticeKind::Info {
            return;
        }
        eprintln!("{}", self.render(kind, title, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ascii_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_info_notice_renders_ok_badge() {
        let notifier = TerminalNotifier::new(ascii_ctx(), false);
        let line = notifier.render(
            NoticeKind::Info,
            "Entry added",
            "OnePiece was added to your collection.",
        );
        assert_eq!(
            line,
            "[OK] Entry added: OnePiece was added to your collection."
        );
    }

    #[test]
    fn test_error_notice_renders_err_badge() {
        let notifier = TerminalNotifier::new(ascii_ctx(), true);
        let line = notifier.render(
            NoticeKind::Error,
            "Could not load collection",
            "Your saved entries could not be read.",
        );
        assert!(line.starts_with("[ERR]"));
    }
}
