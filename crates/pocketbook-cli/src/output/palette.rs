use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;
use pocketbook_client::theme::Theme;

pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Foreground colors for text output, chosen for the resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
    income: Color,
    expense: Color,
    info: Color,
    warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                enabled: true,
                income: Color::DarkGreen,
                expense: Color::DarkRed,
                info: Color::DarkBlue,
                warning: Color::DarkYellow,
            },
            Theme::Dark => Self {
                enabled: true,
                income: Color::Green,
                expense: Color::Red,
                info: Color::Cyan,
                warning: Color::Yellow,
            },
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::for_theme(Theme::Light)
        }
    }

    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect(theme: Theme) -> Self {
        let no_color = std::env::var_os(NO_COLOR_ENV_VAR).is_some_and(|value| !value.is_empty());
        if no_color || !std::io::stdout().is_tty() {
            return Self::plain();
        }
        Self::for_theme(theme)
    }

    pub fn income(&self, text: &str) -> String {
        self.paint(text, self.income)
    }

    pub fn expense(&self, text: &str) -> String {
        self.paint(text, self.expense)
    }

    /// Colors a signed figure: negative as expense, otherwise as income.
    pub fn signed(&self, text: &str, negative: bool) -> String {
        if negative {
            self.expense(text)
        } else {
            self.income(text)
        }
    }

    pub fn level(&self, level: &str, text: &str) -> String {
        match level {
            "success" => self.paint(text, self.income),
            "info" => self.paint(text, self.info),
            "warning" => self.paint(text, self.warning),
            "error" => self.paint(text, self.expense),
            _ => text.to_string(),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.with(color).to_string()
    }
}

#[cfg(test)]
mod tests {
    use pocketbook_client::theme::Theme;

    use super::Palette;

    #[test]
    fn plain_palette_leaves_text_untouched() {
        let palette = Palette::plain();
        assert_eq!(palette.income("+$10.00"), "+$10.00");
        assert_eq!(palette.level("error", "Failed"), "Failed");
    }

    #[test]
    fn themed_palette_wraps_text_in_escape_codes() {
        let light = Palette::for_theme(Theme::Light).expense("-$4.50");
        let dark = Palette::for_theme(Theme::Dark).expense("-$4.50");
        assert!(light.contains("-$4.50"));
        assert!(light.starts_with('\u{1b}'));
        assert_ne!(light, dark);
    }
}
