use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout::wrap_words;

const CODE_FG: Color = Color::Rgb(74, 85, 104);
const CODE_BG: Color = Color::Rgb(237, 237, 237);

pub fn draw_question(f: &mut Frame, area: Rect, app: &App) {
    let question = app.quiz.current_question();

    let title = format!(
        " Question {} of {} ",
        app.quiz.current_question_index() + 1,
        app.quiz.question_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let prompt_lines = wrap_words(&question.prompt, inner.width as usize).len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(prompt_lines),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    let prompt = Paragraph::new(Span::styled(
        question.prompt.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    f.render_widget(prompt, rows[0]);

    let code_lines: Vec<Line> = question
        .code_snippet
        .lines()
        .map(|l| Line::from(format!(" {}", l)))
        .collect();
    let mut code_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    if let Some(lang) = &question.language {
        code_block = code_block.title(format!(" {} ", lang));
    }
    let code = Paragraph::new(code_lines)
        .block(code_block)
        .style(Style::default().fg(CODE_FG).bg(CODE_BG));
    f.render_widget(code, rows[2]);
}
