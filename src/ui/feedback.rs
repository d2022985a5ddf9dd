use std::time::Duration;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::options::{CORRECT, INCORRECT};

/// Shake offset units per terminal column.
const UNITS_PER_COLUMN: i16 = 5;

pub fn draw_feedback(f: &mut Frame, area: Rect, app: &App, now: Duration) {
    let Some(feedback) = app.quiz.feedback() else {
        return;
    };

    let color = if feedback.correct { CORRECT } else { INCORRECT };
    let columns = app.quiz.shake_offset(now) / UNITS_PER_COLUMN;
    let shifted = shift_x(area, columns).intersection(f.area());

    let widget = Paragraph::new(Span::styled(
        feedback.message,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(widget, shifted);
}

pub fn shift_x(area: Rect, columns: i16) -> Rect {
    let x = (area.x as i32 + columns as i32).max(0) as u16;
    Rect { x, ..area }
}
