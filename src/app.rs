use std::time::Duration;

use crate::error::Result;
use crate::model::Quiz;
use crate::state::QuizState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Badge,
    Incorrect,
    Help,
}

/// Screen-level state wrapped around the quiz state machine.
#[derive(Debug, Clone)]
pub struct App {
    pub title: String,
    pub quiz: QuizState,
    pub choice_cursor: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(quiz: Quiz, question_index: usize) -> Result<Self> {
        let title = quiz.title.clone();
        let state = QuizState::from_quiz(quiz, question_index)?;
        Ok(Self::with_state(title, state))
    }

    pub fn with_state(title: String, quiz: QuizState) -> Self {
        Self {
            title,
            quiz,
            choice_cursor: 0,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn option_count(&self) -> usize {
        self.quiz.current_question().options.len()
    }

    /// The popup that currently receives input. The incorrect-answer popup is
    /// drawn above the badge popup, and help above both.
    pub fn top_popup(&self) -> Option<Popup> {
        if self.show_help {
            Some(Popup::Help)
        } else if self.quiz.show_incorrect_popup() {
            Some(Popup::Incorrect)
        } else if self.quiz.show_badge_popup() {
            Some(Popup::Badge)
        } else {
            None
        }
    }

    pub fn choose(&mut self, index: usize) {
        if self.quiz.select_answer(index).is_ok() {
            self.choice_cursor = index;
        }
    }

    pub fn choose_cursor(&mut self) {
        self.choose(self.choice_cursor);
    }

    pub fn cursor_up(&mut self) {
        self.choice_cursor = self.choice_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.choice_cursor + 1 < self.option_count() {
            self.choice_cursor += 1;
        }
    }

    pub fn submit(&mut self, now: Duration) {
        if self.quiz.submit(now).is_none() {
            log::debug!("submit ignored: no answer selected");
        }
    }

    /// Activates the only button of the top popup.
    pub fn dismiss_popup(&mut self) {
        match self.top_popup() {
            Some(Popup::Help) => self.show_help = false,
            Some(Popup::Incorrect) => {
                self.quiz.close_incorrect_popup();
                self.choice_cursor = 0;
            }
            Some(Popup::Badge) => self.quiz.close_badge_popup(),
            None => {}
        }
    }
}
