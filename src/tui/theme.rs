//! Color palettes and semantic styles.
//!
//! One palette per theme; the rendering layer never names a raw color,
//! it asks the active palette for a semantic style. Pure data.
//!
//! Color semantics:
//! - accent: interactive elements, links, keybinding hints
//! - muted: de-emphasized metadata and help text
//! - success / danger: form status and validation messages
//! - focus: the focus ring, shown only in keyboard navigation mode

use ratatui::style::{Color, Modifier, Style};

use crate::types::Theme;

// ============================================================================
// PALETTES
// ============================================================================

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub heading: Color,
    pub accent: Color,
    pub muted: Color,
    pub success: Color,
    pub danger: Color,
}

/// Default theme palette.
pub const DARK: Palette = Palette {
    background: Color::Rgb(16, 18, 27),
    surface: Color::Rgb(30, 33, 45),
    foreground: Color::Rgb(205, 209, 222),
    heading: Color::Rgb(235, 238, 248),
    accent: Color::Rgb(120, 170, 255),
    muted: Color::Rgb(110, 117, 136),
    success: Color::Rgb(120, 200, 150),
    danger: Color::Rgb(235, 120, 120),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(246, 247, 250),
    surface: Color::Rgb(232, 234, 240),
    foreground: Color::Rgb(40, 44, 56),
    heading: Color::Rgb(18, 20, 28),
    accent: Color::Rgb(35, 90, 200),
    muted: Color::Rgb(130, 136, 150),
    success: Color::Rgb(30, 130, 75),
    danger: Color::Rgb(180, 45, 45),
};

impl Palette {
    /// Palette for a theme.
    pub fn of(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    // ------------------------------------------------------------------
    // Semantic styles
    // ------------------------------------------------------------------

    /// Document base: default text on the theme background.
    pub fn base(&self) -> Style {
        Style::new().fg(self.foreground).bg(self.background)
    }

    /// Section titles and the hero name.
    pub fn heading(&self) -> Style {
        Style::new().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    /// Interactive elements and keybinding hints.
    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent)
    }

    /// Links: accent plus underline.
    pub fn link(&self) -> Style {
        Style::new()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// De-emphasized metadata, rules, help lines.
    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Input fields and cards: text on the raised surface color.
    pub fn surface(&self) -> Style {
        Style::new().fg(self.foreground).bg(self.surface)
    }

    /// Success status (submission delivered).
    pub fn success(&self) -> Style {
        Style::new().fg(self.success)
    }

    /// Errors: validation messages and failed-submission status.
    pub fn danger(&self) -> Style {
        Style::new().fg(self.danger)
    }

    /// Focus ring for the focused interactive element.
    pub fn focus(&self) -> Style {
        Style::new().add_modifier(Modifier::REVERSED)
    }

    /// The active nav link / tab.
    pub fn active(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_theme_resolves_to_its_palette() {
        assert_eq!(Palette::of(Theme::Dark), &DARK);
        assert_eq!(Palette::of(Theme::Light), &LIGHT);
    }

    #[test]
    fn palettes_differ_where_it_matters() {
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.foreground, LIGHT.foreground);
    }

    #[test]
    fn focus_style_is_reversed() {
        assert!(DARK.focus().add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn headings_are_bold() {
        assert!(LIGHT.heading().add_modifier.contains(Modifier::BOLD));
    }
}
