use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::state::OptionHighlight;

pub const ACCENT: Color = Color::Rgb(111, 66, 193);
pub const CORRECT: Color = Color::Rgb(76, 175, 80);
pub const INCORRECT: Color = Color::Rgb(244, 67, 54);

pub fn draw_options(f: &mut Frame, rects: &[Rect], app: &App) {
    let question = app.quiz.current_question();
    let show_cursor = app.top_popup().is_none();

    for (idx, (option, rect)) in question.options.iter().zip(rects).enumerate() {
        let (border, fill) = option_colors(app.quiz.option_highlight(idx));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if app.quiz.option_highlight(idx) != OptionHighlight::Plain {
            block = block.border_type(BorderType::Thick);
        }

        let marker = if show_cursor && app.choice_cursor == idx {
            "▸ "
        } else {
            "  "
        };
        let label = (b'a' + (idx as u8 % 26)) as char;
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(format!("{}. ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(
                option.label.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let mut widget = Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center);
        if let Some(bg) = fill {
            widget = widget.style(Style::default().bg(bg));
        }
        f.render_widget(widget, *rect);
    }
}

/// Border colour and optional fill for each highlight state.
pub fn option_colors(highlight: OptionHighlight) -> (Color, Option<Color>) {
    match highlight {
        OptionHighlight::Plain => (Color::DarkGray, None),
        OptionHighlight::Selected => (ACCENT, None),
        OptionHighlight::Correct => (CORRECT, Some(CORRECT)),
        OptionHighlight::Incorrect => (INCORRECT, Some(INCORRECT)),
    }
}

pub fn draw_submit(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let widget = Paragraph::new(Span::styled(
        "Submit",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .block(block)
    .alignment(Alignment::Center)
    .style(Style::default().bg(ACCENT));
    f.render_widget(widget, area);
}
