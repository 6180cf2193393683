//! Output mode and terminal detection.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

/// How a command formats its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Tab-separated rows and `key=value` lines
    #[default]
    Plain,
    /// Tables, badges and rating bars
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// What the process can tell about its terminal.
#[derive(Debug, Clone, Copy, Default)]
struct Terminal {
    stdout_tty: bool,
    dumb: bool,
    no_color: bool,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }

    /// `--json` wins and an explicit `--format` is taken as given. Without
    /// either, a capable terminal gets tables and anything else plain rows.
    fn mode(&self, json: bool, format: Option<OutputFormat>) -> OutputMode {
        match (json, format) {
            (true, _) => OutputMode::Json,
            (false, Some(OutputFormat::Table)) => OutputMode::Pretty,
            (false, Some(OutputFormat::Plain)) => OutputMode::Plain,
            (false, None) if self.stdout_tty && !self.dumb => OutputMode::Pretty,
            (false, None) => OutputMode::Plain,
        }
    }
}

/// Rendering decisions for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether ANSI styling is allowed
    pub color: bool,
    /// Whether badges and bars may use unicode symbols
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    pub fn new(
        json: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::for_terminal(Terminal::detect(), json, format, no_color_flag, ascii_flag)
    }

    fn for_terminal(
        term: Terminal,
        json: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self {
            is_tty: term.stdout_tty,
            color: term.stdout_tty && !term.dumb && !term.no_color && !no_color_flag,
            unicode: !ascii_flag,
            mode: term.mode(json, format),
        }
    }

    /// Interactive prompts need both stdin and stdout on a terminal.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Terminal = Terminal {
        stdout_tty: true,
        dumb: false,
        no_color: false,
    };

    const PIPE: Terminal = Terminal {
        stdout_tty: false,
        dumb: false,
        no_color: false,
    };

    #[test]
    fn test_json_flag_beats_format() {
        let ui = UiContext::for_terminal(TTY, true, Some(OutputFormat::Table), false, false);
        assert_eq!(ui.mode, OutputMode::Json);
    }

    #[test]
    fn test_list_defaults_follow_stdout() {
        assert_eq!(UiContext::for_terminal(TTY, false, None, false, false).mode, OutputMode::Pretty);
        assert_eq!(UiContext::for_terminal(PIPE, false, None, false, false).mode, OutputMode::Plain);

        let dumb = Terminal { dumb: true, ..TTY };
        let ui = UiContext::for_terminal(dumb, false, None, false, false);
        assert_eq!(ui.mode, OutputMode::Plain);
        assert!(!ui.color);
    }

    #[test]
    fn test_table_format_is_honored_when_piped() {
        let ui = UiContext::for_terminal(PIPE, false, Some(OutputFormat::Table), false, false);
        assert_eq!(ui.mode, OutputMode::Pretty);
        assert!(!ui.color);

        let ui = UiContext::for_terminal(TTY, false, Some(OutputFormat::Plain), false, false);
        assert_eq!(ui.mode, OutputMode::Plain);
    }

    #[test]
    fn test_color_needs_a_terminal_and_no_opt_out() {
        assert!(UiContext::for_terminal(TTY, false, None, false, false).color);
        assert!(!UiContext::for_terminal(TTY, false, None, true, false).color);

        let no_color_env = Terminal { no_color: true, ..TTY };
        let ui = UiContext::for_terminal(no_color_env, false, None, false, false);
        assert!(!ui.color);
        assert_eq!(ui.mode, OutputMode::Pretty);
    }

    #[test]
    fn test_ascii_flag_disables_unicode() {
        assert!(!UiContext::for_terminal(TTY, false, None, false, true).unicode);
    }
}
