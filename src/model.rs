use serde::Deserialize;

pub const DEFAULT_HINT: &str = "Think about how JavaScript handles different data types.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub stale_timers: StaleTimerPolicy,
}

/// Delays of the feedback sequence, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub feedback_window_ms: u64,
    pub badge_delay_ms: u64,
    pub hint_delay_ms: u64,
    pub shake_step_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            feedback_window_ms: 3000,
            badge_delay_ms: 3000,
            hint_delay_ms: 1000,
            shake_step_ms: 100,
        }
    }
}

/// What happens to effects scheduled by a submission that is no longer current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleTimerPolicy {
    /// Every scheduled effect fires, even after a re-selection or a newer submit.
    #[default]
    FireAndForget,
    /// Popups only fire for the active submission; feedback expiry only for the latest one.
    ActiveSubmissionOnly,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub frontmatter: Frontmatter,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Lines printed by `--check`: title, timers, then one line per question.
    pub fn summary_lines(&self) -> Vec<String> {
        let timing = self.frontmatter.timing;
        let mut lines = vec![
            self.title.clone(),
            format!(
                "Timers: badge {}ms, hint {}ms, feedback {}ms, shake step {}ms ({:?})",
                timing.badge_delay_ms,
                timing.hint_delay_ms,
                timing.feedback_window_ms,
                timing.shake_step_ms,
                self.frontmatter.stale_timers,
            ),
        ];
        for (i, q) in self.questions.iter().enumerate() {
            let correct: Vec<&str> = q
                .options
                .iter()
                .filter(|o| o.is_correct)
                .map(|o| o.label.as_str())
                .collect();
            lines.push(format!(
                "  {}. {} [{} options, correct: {}]",
                i + 1,
                q.prompt,
                q.options.len(),
                correct.join(", ")
            ));
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub code_snippet: String,
    pub language: Option<String>,
    pub options: Vec<AnswerOption>,
    pub hint: Option<String>,
}

impl Question {
    pub fn hint_text(&self) -> &str {
        self.hint.as_deref().unwrap_or(DEFAULT_HINT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub label: String,
    pub is_correct: bool,
}

impl AnswerOption {
    fn new(label: &str, is_correct: bool) -> Self {
        Self {
            label: label.to_string(),
            is_correct,
        }
    }
}

/// The question list compiled into the binary.
pub fn builtin_quiz() -> Quiz {
    Quiz {
        frontmatter: Frontmatter::default(),
        title: "Code Quiz".to_string(),
        questions: vec![Question {
            prompt: "What is the output of the following code?".to_string(),
            code_snippet: "console.log(1 + \"2\" + \"2\");".to_string(),
            language: Some("js".to_string()),
            options: vec![
                AnswerOption::new("\"122\"", true),
                AnswerOption::new("\"32\"", false),
                AnswerOption::new("\"14\"", false),
                AnswerOption::new("\"NaN\"", false),
            ],
            hint: Some(DEFAULT_HINT.to_string()),
        }],
    }
}
