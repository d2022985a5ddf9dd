use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::Question;

pub const MAX_CONTENT_WIDTH: u16 = 72;
pub const OPTION_HEIGHT: u16 = 3;

pub struct ScreenLayout {
    pub titlebar: Rect,
    pub question: Rect,
    pub options: Vec<Rect>,
    pub submit: Rect,
    pub feedback: Rect,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect, question: &Question) -> ScreenLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(5),    // content column
            Constraint::Length(1), // keybar
        ])
        .split(area);

    let content = centered_column(vertical[1], MAX_CONTENT_WIDTH);
    let n = question.options.len();

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(question_height(question, content.width)),
        Constraint::Length(1),
    ];
    constraints.extend(std::iter::repeat(Constraint::Length(OPTION_HEIGHT)).take(n));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(3)); // submit button
    constraints.push(Constraint::Length(2)); // feedback line
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(content);

    ScreenLayout {
        titlebar: vertical[0],
        question: rows[1],
        options: rows[3..3 + n].to_vec(),
        submit: rows[3 + n + 1],
        feedback: rows[3 + n + 2],
        keybar: vertical[2],
    }
}

/// Height of the question panel: borders, prompt, a blank line and the snippet box.
pub fn question_height(question: &Question, width: u16) -> u16 {
    let inner = width.saturating_sub(2) as usize;
    let prompt_lines = wrap_words(&question.prompt, inner).len().max(1) as u16;
    let snippet_lines = question.code_snippet.lines().count().max(1) as u16;
    2 + prompt_lines + 1 + snippet_lines + 2
}

pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let current_len = current.chars().count();
        if current.is_empty() {
            current = word;
        } else if current_len + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
