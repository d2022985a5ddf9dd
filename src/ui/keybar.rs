use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Popup};

pub fn draw_keybar(f: &mut Frame, area: Rect, app: &App) {
    let bindings: Vec<(&str, &str)> = match app.top_popup() {
        Some(Popup::Badge) => vec![("Enter", "close"), ("Ctrl+Q", "quit")],
        Some(Popup::Incorrect) => vec![("Enter", "try again"), ("Ctrl+Q", "quit")],
        Some(Popup::Help) => vec![("Esc", "close help"), ("Ctrl+Q", "quit")],
        None => vec![
            ("a-z", "answer"),
            ("↑/↓", "move"),
            ("Space", "pick"),
            ("Enter", "submit"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
