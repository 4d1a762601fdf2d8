//! # Application Configuration
//!
//! Everything the console app needs to start, with code defaults.
//!
//! ## Configuration Sources
//! There are no flags and no config file: the app always opens
//! `inventario.db` in the working directory with the colored theme. Tests
//! build their own `AppConfig` pointing at a temporary file.
//!
//! The color shortcuts live in [`Theme`], which is handed to the presentation
//! layer. Nothing in the core or database crates knows about colors.

use colored::{Color, Colorize};
use inventory_db::DbConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Where and how to open the store.
    pub db: DbConfig,

    /// Console styling.
    pub theme: Theme,
}

/// Semantic console styles.
///
/// Each role maps to a bold foreground color, or to no styling at all when
/// the color is `None`.
///
/// | Role    | Used for                            | Default  |
/// |---------|-------------------------------------|----------|
/// | `info`  | prompts                             | cyan     |
/// | `menu`  | menu numbers, field labels          | blue     |
/// | `ok`    | success messages                    | green    |
/// | `err`   | error messages, "nothing found"     | red      |
/// | `title` | banners and section headers         | magenta  |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub info: Option<Color>,
    pub menu: Option<Color>,
    pub ok: Option<Color>,
    pub err: Option<Color>,
    pub title: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            info: Some(Color::Cyan),
            menu: Some(Color::Blue),
            ok: Some(Color::Green),
            err: Some(Color::Red),
            title: Some(Color::Magenta),
        }
    }
}

impl Theme {
    /// A theme that emits no escape codes (tests, dumb terminals).
    pub fn plain() -> Self {
        Theme {
            info: None,
            menu: None,
            ok: None,
            err: None,
            title: None,
        }
    }

    pub fn info(&self, text: &str) -> String {
        paint(text, self.info)
    }

    pub fn menu(&self, text: &str) -> String {
        paint(text, self.menu)
    }

    pub fn ok(&self, text: &str) -> String {
        paint(text, self.ok)
    }

    pub fn err(&self, text: &str) -> String {
        paint(text, self.err)
    }

    pub fn title(&self, text: &str) -> String {
        paint(text, self.title)
    }
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.color(color).bold().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_untouched() {
        let theme = Theme::plain();
        assert_eq!(theme.err("Error: boom"), "Error: boom");
        assert_eq!(theme.title("MAIN MENU"), "MAIN MENU");
    }

    #[test]
    fn test_default_theme_styles_every_role() {
        colored::control::set_override(true);
        let theme = Theme::default();

        for styled in [
            theme.info("x"),
            theme.menu("x"),
            theme.ok("x"),
            theme.err("x"),
            theme.title("x"),
        ] {
            assert!(styled.contains("\u{1b}["), "expected ANSI codes in {styled:?}");
        }
    }
}
