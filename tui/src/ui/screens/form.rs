use std::sync::Arc;

use crossterm::event::KeyCode;
use fuel_core::{predict, Assets, PredictionOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::form::{Field, FormState, Select};
use crate::ui::{theme::Theme, widgets};

use super::{help, Action};

const TITLE: &str = "Fuel Efficiency App";
const BUTTON: &str = " Predict Fuel Efficiency ";

/// The prediction form, holding the assets it predicts with.
pub struct FormScreen {
    assets: Arc<Assets>,
    pub form: FormState,
    pub outcome: Option<PredictionOutcome>,
    pub show_help: bool,
}

impl FormScreen {
    pub fn new(assets: Arc<Assets>) -> Self {
        let form = FormState::new(&assets.encoders);
        Self {
            assets,
            form,
            outcome: None,
            show_help: false,
        }
    }

    /// Builds a record from the current values and runs the model on it.
    pub fn submit(&mut self) {
        let record = self.form.to_record();
        self.outcome = Some(predict(&self.assets.model, record));
    }
}

pub fn handle_key(state: &mut FormScreen, key: KeyCode) -> Action {
    if state.show_help {
        state.show_help = false;
        return Action::None;
    }

    let focus = state.form.focus;

    match key {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Enter => state.submit(),
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Left => adjust(&mut state.form, -1),
        KeyCode::Right => adjust(&mut state.form, 1),
        KeyCode::Char('?') if focus != Field::CarName => state.show_help = true,
        KeyCode::Char(c) => match focus {
            Field::CarName => state.form.car_name.push(c),
            Field::Weight => state.form.weight.push(c),
            _ => {}
        },
        KeyCode::Backspace => match focus {
            Field::CarName => {
                state.form.car_name.pop();
            }
            Field::Weight => state.form.weight.pop(),
            _ => {}
        },
        _ => {}
    }

    Action::None
}

fn adjust(form: &mut FormState, delta: i64) {
    let focus = form.focus;
    if focus == Field::Weight {
        form.weight.step(delta);
    } else if let Some(select) = form.select_mut(focus) {
        if delta < 0 {
            select.prev();
        } else {
            select.next();
        }
    }
}

pub fn draw(f: &mut Frame, state: &FormScreen) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = widgets::centered_rect(60, 96, area);

    let mut constraints = vec![
        Constraint::Length(1), // title
        Constraint::Length(1), // spacer
    ];
    constraints.extend(Field::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.extend([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // button
        Constraint::Length(1), // spacer
        Constraint::Min(3),    // outcome
        Constraint::Length(1), // hints
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(TITLE, Theme::title())).alignment(Alignment::Center),
        chunks[0],
    );

    for (i, field) in Field::ALL.iter().enumerate() {
        draw_field(f, chunks[2 + i], state, *field);
    }

    let after_fields = 2 + Field::ALL.len();
    f.render_widget(
        Paragraph::new(Span::styled(BUTTON, Theme::button())).alignment(Alignment::Center),
        chunks[after_fields + 1],
    );

    draw_outcome(f, chunks[after_fields + 3], state.outcome.as_ref());
    draw_hint(f, chunks[after_fields + 4]);

    if state.show_help {
        help::draw(f, area);
    }
}

fn draw_field(f: &mut Frame, area: Rect, state: &FormScreen, field: Field) {
    let focused = state.form.focus == field;

    let content = match field {
        Field::CarName => {
            let mut spans = if state.form.car_name.is_empty() && !focused {
                vec![Span::styled("free text", Theme::muted())]
            } else {
                vec![Span::styled(state.form.car_name.as_str(), Theme::text())]
            };
            if focused {
                spans.push(widgets::cursor());
            }
            Line::from(spans)
        }
        Field::Weight => {
            let (min, max) = state.form.weight.bounds();
            let mut spans = vec![Span::styled(state.form.weight.buffer(), Theme::text())];
            if focused {
                spans.push(widgets::cursor());
            }
            spans.push(Span::styled(format!("   [{min}, {max}]"), Theme::muted()));
            Line::from(spans)
        }
        _ => match state.form.select(field) {
            Some(select) => select_line(select, focused),
            None => Line::default(),
        },
    };

    f.render_widget(widgets::field(field.label(), content, focused), area);
}

fn select_line(select: &Select, focused: bool) -> Line<'_> {
    let Some(label) = select.selected() else {
        return Line::from(Span::styled("no categories", Theme::error()));
    };

    let arrow = if focused { Theme::key() } else { Theme::muted() };

    Line::from(vec![
        Span::styled("◀ ", arrow),
        Span::styled(label, Theme::text()),
        Span::styled(" ▶", arrow),
        Span::styled(
            format!("   {}/{}", select.position() + 1, select.options().len()),
            Theme::muted(),
        ),
    ])
}

fn draw_outcome(f: &mut Frame, area: Rect, outcome: Option<&PredictionOutcome>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Result ")
        .title_style(Theme::dim());

    let lines = match outcome {
        None => vec![Line::from(Span::styled(
            "press enter to predict",
            Theme::muted(),
        ))],
        Some(o) if o.is_success() => {
            vec![Line::from(Span::styled(o.to_string(), Theme::ok()))]
        }
        Some(o) => {
            let mut lines = vec![Line::from(Span::styled(o.to_string(), Theme::error()))];
            if let Some(detail) = o.detail() {
                lines.push(Line::from(Span::styled(detail, Theme::dim())));
            }
            lines
        }
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("tab / ↑↓", Theme::dim()),
        Span::styled("  field    ", Theme::muted()),
        Span::styled("←→", Theme::dim()),
        Span::styled("  change    ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled("  predict    ", Theme::muted()),
        Span::styled("?", Theme::dim()),
        Span::styled("  help    ", Theme::muted()),
        Span::styled("esc", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use fuel_core::{EncoderSet, ModelAsset};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn screen(model: &str) -> FormScreen {
        let encoders: EncoderSet = serde_json::from_str(
            r#"{
                "Horsepower": { "classes": ["130", "165"] },
                "Displacement": { "classes": ["307", "350"] },
                "Model year": { "classes": ["70", "71"] }
            }"#,
        )
        .unwrap();
        let model: ModelAsset = serde_json::from_str(model).unwrap();

        FormScreen::new(Arc::new(Assets { model, encoders }))
    }

    fn rendered(state: &FormScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn type_str(state: &mut FormScreen, s: &str) {
        for c in s.chars() {
            handle_key(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_submits_current_values() {
        let mut s = screen(r#"{ "type": "constant", "value": 24.5 }"#);
        type_str(&mut s, "TestCar");
        handle_key(&mut s, KeyCode::Enter);

        assert_eq!(s.outcome, Some(PredictionOutcome::Success(24.5)));
        assert!(rendered(&s).contains("Predicted Fuel Efficiency: 24.5"));
    }

    #[test]
    fn failed_prediction_is_shown_and_form_stays_usable() {
        let mut s = screen(
            r#"{ "type": "linear", "intercept": 20.0, "categorical": { "Horsepower": { "165": 1.0 } } }"#,
        );
        handle_key(&mut s, KeyCode::Enter);

        let out = rendered(&s);
        assert!(out.contains("Prediction failed."));
        assert!(out.contains("previously unseen label '130'"));

        handle_key(&mut s, KeyCode::Tab);
        handle_key(&mut s, KeyCode::Right);
        handle_key(&mut s, KeyCode::Enter);
        assert_eq!(s.outcome, Some(PredictionOutcome::Success(21.0)));
    }

    #[test]
    fn question_mark_is_text_in_car_name_but_help_elsewhere() {
        let mut s = screen(r#"{ "type": "constant", "value": 1.0 }"#);
        handle_key(&mut s, KeyCode::Char('?'));
        assert_eq!(s.form.car_name, "?");
        assert!(!s.show_help);

        handle_key(&mut s, KeyCode::Tab);
        handle_key(&mut s, KeyCode::Char('?'));
        assert!(s.show_help);

        // any key closes help without acting
        assert!(matches!(handle_key(&mut s, KeyCode::Esc), Action::None));
        assert!(!s.show_help);
        assert!(matches!(handle_key(&mut s, KeyCode::Esc), Action::Quit));
    }

    #[test]
    fn weight_typed_out_of_range_is_clamped_on_submit() {
        let mut s = screen(
            r#"{ "type": "linear", "intercept": 0.0, "numeric": { "Weight_of_vehicle": 1.0 } }"#,
        );
        handle_key(&mut s, KeyCode::BackTab);
        assert_eq!(s.form.focus, Field::Weight);

        for _ in 0..3 {
            handle_key(&mut s, KeyCode::Backspace);
        }
        type_str(&mut s, "999");
        handle_key(&mut s, KeyCode::Enter);

        assert_eq!(s.outcome, Some(PredictionOutcome::Success(400.0)));
        assert_eq!(s.form.weight.buffer(), "400");
    }
}
