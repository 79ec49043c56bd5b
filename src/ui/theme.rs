use crate::theme::ThemeTarget;
use ratatui::style::{Color, Modifier, Style};

/// Style source for every widget. The dark flag is the root visual marker
/// the theme controller applies; all styles derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    dark: bool,
}

impl Palette {
    pub fn light() -> Self {
        Self { dark: false }
    }

    pub fn dark() -> Self {
        Self { dark: true }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn background(&self) -> Style {
        if self.dark {
            Style::default().bg(Color::Black).fg(Color::Gray)
        } else {
            Style::default().bg(Color::White).fg(Color::Black)
        }
    }

    pub fn border(&self) -> Style {
        if self.dark {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title(&self) -> Style {
        let fg = if self.dark { Color::White } else { Color::Black };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn brand(&self) -> Style {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    }

    pub fn body(&self) -> Style {
        let fg = if self.dark { Color::Gray } else { Color::Black };
        Style::default().fg(fg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn notice(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn spinner(&self) -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn status_bar(&self) -> Style {
        if self.dark {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        }
    }
}

impl ThemeTarget for Palette {
    fn apply_dark(&mut self, enabled: bool) {
        self.dark = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dark_is_idempotent() {
        let mut palette = Palette::light();
        palette.apply_dark(true);
        palette.apply_dark(true);
        assert_eq!(palette, Palette::dark());

        palette.apply_dark(false);
        assert_eq!(palette, Palette::light());
    }
}
