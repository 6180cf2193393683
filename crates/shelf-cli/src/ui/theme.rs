//! Badges, symbols and color styles.

use owo_colors::{OwoColorize, Style};

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Filled cell of a distribution bar.
pub const BAR: SymbolPair = SymbolPair::new("#", "\u{2588}");

/// Separator between a title and its context.
pub const DOT: SymbolPair = SymbolPair::new("-", "\u{00B7}");

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    /// Badge text, e.g. `[OK]`.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Badge as displayed. Unicode mode swaps the word for a symbol, except
    /// `[OK]` which reads better as text in notices.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Err, true) => "[\u{2717}]",
            (Self::Info, true) => "[\u{2139}]",
            _ => self.text(),
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Err => styles::red(),
            Self::Info => styles::cyan(),
        }
    }
}

/// Named styles used across the renderers.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn red() -> Style {
        Style::new().red()
    }

    pub fn cyan() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
