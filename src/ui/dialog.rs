use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, Popup};
use crate::ui::layout::{centered_rect, wrap_words};
use crate::ui::options::ACCENT;

const POPUP_WIDTH: u16 = 44;

/// Draws every visible popup, the incorrect-answer hint above the badge.
pub fn draw_popups(f: &mut Frame, area: Rect, app: &App) {
    if app.quiz.show_badge_popup() {
        draw_popup(f, area, app, Popup::Badge);
    }
    if app.quiz.show_incorrect_popup() {
        draw_popup(f, area, app, Popup::Incorrect);
    }
    if app.show_help {
        draw_popup(f, area, app, Popup::Help);
    }
}

fn draw_popup(f: &mut Frame, area: Rect, app: &App, popup: Popup) {
    let (lines, _) = popup_lines(app, popup);
    let rect = popup_rect(area, lines.len());

    let border = match popup {
        Popup::Badge => Color::Yellow,
        Popup::Incorrect => Color::Red,
        Popup::Help => Color::Cyan,
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if popup == Popup::Help {
        block = block.title(" Help ");
    }

    f.render_widget(Clear, rect);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, rect);
}

fn popup_rect(area: Rect, line_count: usize) -> Rect {
    centered_rect(POPUP_WIDTH, line_count as u16 + 2, area)
}

/// The clickable row of a popup's only button.
pub fn button_rect(area: Rect, app: &App, popup: Popup) -> Rect {
    let (lines, button_row) = popup_lines(app, popup);
    let rect = popup_rect(area, lines.len());
    Rect::new(
        rect.x + 1,
        rect.y + 1 + button_row as u16,
        rect.width.saturating_sub(2),
        1,
    )
    .intersection(area)
}

fn button(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("[ {} ]", label),
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Popup content and the index of its button line.
fn popup_lines(app: &App, popup: Popup) -> (Vec<Line<'static>>, usize) {
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match popup {
        Popup::Badge => {
            let badge = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled(" ╭───╮ ", badge)));
            lines.push(Line::from(Span::styled(" │ ★ │ ", badge)));
            lines.push(Line::from(Span::styled(" ╰┬─┬╯ ", badge)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "You earned a badge!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(button("Close"));
        }
        Popup::Incorrect => {
            let hint = format!("Hint: \"{}\"", app.quiz.current_question().hint_text());
            for l in wrap_words(&hint, POPUP_WIDTH as usize - 6) {
                lines.push(Line::from(Span::styled(l, Style::default().fg(Color::Gray))));
            }
            lines.push(Line::from(""));
            lines.push(button("Try Again"));
        }
        Popup::Help => {
            for (key, action) in [
                ("a-z / 1-9", "Select answer"),
                ("↑/↓ Space", "Move and select"),
                ("Enter", "Submit"),
                ("Enter/Esc", "Close popup"),
                ("?", "This help"),
                ("q / Ctrl+Q", "Quit"),
            ] {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>10}  ", key),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:<16}", action)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(button("Close"));
        }
    }

    let button_row = lines.len() - 1;
    lines.push(Line::from(""));
    (lines, button_row)
}
