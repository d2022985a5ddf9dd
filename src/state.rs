use std::time::Duration;

use log::{debug, info};

use crate::error::{QuizError, Result};
use crate::model::*;
use crate::schedule::{Effect, Fired, Scheduler, SubmissionId};
use crate::shake::Shake;

pub const CONFETTI_COUNT: u16 = 200;
pub const CONFETTI_ORIGIN: (i16, i16) = (-10, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionHighlight {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiBurst {
    pub count: u16,
    pub origin: (i16, i16),
    pub fired_at: Duration,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub message: &'static str,
}

/// Selection and submission state of the quiz screen.
///
/// Time is passed in as the elapsed `Duration` since the screen mounted, so
/// callers decide what clock drives the delayed effects.
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<Question>,
    timing: Timing,
    policy: StaleTimerPolicy,
    current_question_index: usize,
    selected_answer: Option<usize>,
    has_submitted: bool,
    is_correct: bool,
    show_feedback: bool,
    explode_confetti: bool,
    show_badge_popup: bool,
    show_incorrect_popup: bool,
    shake: Option<Shake>,
    confetti: Option<ConfettiBurst>,
    last_submission: SubmissionId,
    active_submission: Option<SubmissionId>,
    scheduler: Scheduler,
}

impl QuizState {
    pub fn new(
        questions: Vec<Question>,
        question_index: usize,
        timing: Timing,
        policy: StaleTimerPolicy,
    ) -> Result<Self> {
        if question_index >= questions.len() {
            return Err(QuizError::QuestionOutOfRange {
                number: question_index + 1,
                len: questions.len(),
            });
        }

        Ok(Self {
            questions,
            timing,
            policy,
            current_question_index: question_index,
            selected_answer: None,
            has_submitted: false,
            is_correct: false,
            show_feedback: false,
            explode_confetti: false,
            show_badge_popup: false,
            show_incorrect_popup: false,
            shake: None,
            confetti: None,
            last_submission: 0,
            active_submission: None,
            scheduler: Scheduler::new(),
        })
    }

    pub fn from_quiz(quiz: Quiz, question_index: usize) -> Result<Self> {
        let timing = quiz.frontmatter.timing;
        let policy = quiz.frontmatter.stale_timers;
        Self::new(quiz.questions, question_index, timing, policy)
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_question_index]
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn show_feedback(&self) -> bool {
        self.show_feedback
    }

    pub fn explode_confetti(&self) -> bool {
        self.explode_confetti
    }

    pub fn show_badge_popup(&self) -> bool {
        self.show_badge_popup
    }

    pub fn show_incorrect_popup(&self) -> bool {
        self.show_incorrect_popup
    }

    pub fn has_popup(&self) -> bool {
        self.show_badge_popup || self.show_incorrect_popup
    }

    pub fn set_policy(&mut self, policy: StaleTimerPolicy) {
        self.policy = policy;
    }

    pub fn pending_effects(&self) -> usize {
        self.scheduler.len()
    }

    pub fn select_answer(&mut self, index: usize) -> Result<()> {
        let len = self.current_question().options.len();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }

        debug!("select answer {} (was {:?})", index, self.selected_answer);
        self.selected_answer = Some(index);
        self.has_submitted = false;
        self.active_submission = None;
        Ok(())
    }

    /// Evaluates the selected answer. Does nothing and returns `None` when no
    /// answer is selected.
    pub fn submit(&mut self, now: Duration) -> Option<Submission> {
        let selected = self.selected_answer?;
        let correct = self.current_question().options[selected].is_correct;

        self.is_correct = correct;
        self.has_submitted = true;
        self.show_feedback = true;
        self.explode_confetti = correct;

        self.last_submission += 1;
        let id = self.last_submission;
        self.active_submission = Some(id);

        info!(
            "submission {}: option {} is {}",
            id,
            selected,
            if correct { "correct" } else { "incorrect" }
        );

        let ms = Duration::from_millis;
        if correct {
            self.confetti = Some(ConfettiBurst {
                count: CONFETTI_COUNT,
                origin: CONFETTI_ORIGIN,
                fired_at: now,
                seed: id,
            });
            self.scheduler
                .schedule(now + ms(self.timing.badge_delay_ms), id, Effect::ShowBadgePopup);
        } else {
            self.trigger_shake(now);
            self.scheduler.schedule(
                now + ms(self.timing.hint_delay_ms),
                id,
                Effect::ShowIncorrectPopup,
            );
        }
        self.scheduler
            .schedule(now + ms(self.timing.feedback_window_ms), id, Effect::EndFeedback);

        Some(Submission { id, correct })
    }

    pub fn close_badge_popup(&mut self) {
        debug!("close badge popup");
        self.show_badge_popup = false;
    }

    pub fn close_incorrect_popup(&mut self) {
        debug!("close incorrect popup");
        self.show_incorrect_popup = false;
        self.selected_answer = None;
        self.has_submitted = false;
        self.active_submission = None;
    }

    /// Applies every scheduled effect due at `now`.
    pub fn advance(&mut self, now: Duration) {
        if !self.scheduler.is_empty() {
            for fired in self.scheduler.drain_due(now) {
                self.apply(fired);
            }
        }

        if self.shake.is_some_and(|s| s.is_finished(now)) {
            self.shake = None;
        }
    }

    fn apply(&mut self, fired: Fired) {
        if !self.should_fire(&fired) {
            debug!(
                "dropping stale {:?} from submission {}",
                fired.effect, fired.submission
            );
            return;
        }

        debug!(
            "timer {:?} from submission {} at {:?}",
            fired.effect, fired.submission, fired.due
        );
        match fired.effect {
            Effect::ShowBadgePopup => self.show_badge_popup = true,
            Effect::ShowIncorrectPopup => self.show_incorrect_popup = true,
            Effect::EndFeedback => {
                self.show_feedback = false;
                self.explode_confetti = false;
                self.confetti = None;
            }
        }
    }

    fn should_fire(&self, fired: &Fired) -> bool {
        match self.policy {
            StaleTimerPolicy::FireAndForget => true,
            StaleTimerPolicy::ActiveSubmissionOnly => match fired.effect {
                Effect::ShowBadgePopup | Effect::ShowIncorrectPopup => {
                    self.active_submission == Some(fired.submission)
                }
                Effect::EndFeedback => fired.submission == self.last_submission,
            },
        }
    }

    // A shake already in progress runs to completion.
    fn trigger_shake(&mut self, now: Duration) {
        if self.shake.is_some_and(|s| !s.is_finished(now)) {
            return;
        }
        self.shake = Some(Shake::new(
            now,
            Duration::from_millis(self.timing.shake_step_ms),
        ));
    }

    pub fn shake(&self) -> Option<Shake> {
        self.shake
    }

    pub fn shake_offset(&self, now: Duration) -> i16 {
        self.shake.map(|s| s.offset_at(now)).unwrap_or(0)
    }

    pub fn confetti(&self) -> Option<ConfettiBurst> {
        if self.explode_confetti {
            self.confetti
        } else {
            None
        }
    }

    pub fn feedback(&self) -> Option<Feedback> {
        if !self.show_feedback {
            return None;
        }
        Some(Feedback {
            correct: self.is_correct,
            message: if self.is_correct {
                "Correct! Great job!"
            } else {
                "Oops! That's not right."
            },
        })
    }

    pub fn option_highlight(&self, index: usize) -> OptionHighlight {
        if self.selected_answer != Some(index) {
            return OptionHighlight::Plain;
        }
        if !self.has_submitted {
            return OptionHighlight::Selected;
        }
        let correct = self
            .current_question()
            .options
            .get(index)
            .map(|o| o.is_correct)
            .unwrap_or(false);
        if correct {
            OptionHighlight::Correct
        } else {
            OptionHighlight::Incorrect
        }
    }
}
