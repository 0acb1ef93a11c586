use ratatui::style::{Color, Modifier, Style};

/// Amber-on-charcoal dashboard theme.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(18, 18, 20);
    pub const FG: Color = Color::Rgb(230, 225, 210);
    pub const FG_DIM: Color = Color::Rgb(150, 145, 135);
    pub const FG_MUTED: Color = Color::Rgb(90, 90, 95);

    pub const AMBER: Color = Color::Rgb(255, 176, 0);
    pub const GREEN: Color = Color::Rgb(120, 220, 110);
    pub const RED: Color = Color::Rgb(255, 90, 80);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Border of the focused field.
    pub fn border_focused() -> Style {
        Style::default().fg(Self::AMBER)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::AMBER).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn key() -> Style {
        Style::default().fg(Self::AMBER)
    }

    pub fn ok() -> Style {
        Style::default().fg(Self::GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::RED).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::AMBER)
            .add_modifier(Modifier::BOLD)
    }
}
