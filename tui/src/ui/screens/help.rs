use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::{theme::Theme, widgets};

const KEYS: &[(&str, &str)] = &[
    ("tab / ↓", "next field"),
    ("shift-tab / ↑", "previous field"),
    ("← / →", "change selection or weight"),
    ("type", "edit car name or weight"),
    ("enter", "predict fuel efficiency"),
    ("esc", "quit"),
];

/// Draws the key reference over the form.
pub fn draw(f: &mut Frame, area: Rect) {
    let popup = widgets::centered_rect(50, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(" Keys ")
        .title_style(Theme::title())
        .style(Theme::base());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    widgets::render_hints(f, chunks[0], KEYS);
    f.render_widget(
        Paragraph::new(Span::styled("any key to close", Theme::muted())),
        chunks[1],
    );
}
