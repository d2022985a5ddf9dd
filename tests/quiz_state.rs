use std::time::Duration;

use codequiz::error::QuizError;
use codequiz::model::{builtin_quiz, StaleTimerPolicy, Timing};
use codequiz::state::{OptionHighlight, QuizState, CONFETTI_COUNT, CONFETTI_ORIGIN};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn new_state() -> QuizState {
    QuizState::from_quiz(builtin_quiz(), 0).unwrap()
}

fn strict_state() -> QuizState {
    let mut state = new_state();
    state.set_policy(StaleTimerPolicy::ActiveSubmissionOnly);
    state
}

/// (selected, submitted, correct, feedback, confetti, badge, incorrect)
fn flags(s: &QuizState) -> (Option<usize>, bool, bool, bool, bool, bool, bool) {
    (
        s.selected_answer(),
        s.has_submitted(),
        s.is_correct(),
        s.show_feedback(),
        s.explode_confetti(),
        s.show_badge_popup(),
        s.show_incorrect_popup(),
    )
}

#[test]
fn test_initial_state() {
    let state = new_state();
    assert_eq!(state.current_question_index(), 0);
    assert_eq!(flags(&state), (None, false, false, false, false, false, false));
    assert_eq!(state.pending_effects(), 0);
    assert!(state.feedback().is_none());
}

#[test]
fn test_question_index_must_be_valid() {
    let err = QuizState::from_quiz(builtin_quiz(), 1).unwrap_err();
    assert!(matches!(err, QuizError::QuestionOutOfRange { number: 2, len: 1 }));

    let err = QuizState::new(Vec::new(), 0, Timing::default(), StaleTimerPolicy::default())
        .unwrap_err();
    assert!(matches!(err, QuizError::QuestionOutOfRange { number: 1, len: 0 }));
}

#[test]
fn test_select_answer_sets_selection_and_clears_submission() {
    for i in 0..4 {
        let mut state = new_state();
        state.select_answer(3).unwrap();
        state.submit(ms(0));
        assert!(state.has_submitted());

        state.select_answer(i).unwrap();
        assert_eq!(state.selected_answer(), Some(i));
        assert!(!state.has_submitted());
        // Correctness is only recomputed on the next submit
        assert!(!state.is_correct());
        assert!(state.show_feedback());
    }
}

#[test]
fn test_select_answer_rejects_out_of_range() {
    let mut state = new_state();
    state.select_answer(2).unwrap();

    let err = state.select_answer(4).unwrap_err();
    assert!(matches!(err, QuizError::OptionOutOfRange { index: 4, len: 4 }));
    assert_eq!(state.selected_answer(), Some(2));
}

#[test]
fn test_submit_without_selection_is_noop() {
    let mut state = new_state();
    let before = flags(&state);

    assert!(state.submit(ms(0)).is_none());
    assert_eq!(flags(&state), before);
    assert_eq!(state.pending_effects(), 0);

    state.advance(ms(10_000));
    assert_eq!(flags(&state), before);
}

#[test]
fn test_correct_submission_sequence() {
    let mut state = new_state();
    state.select_answer(0).unwrap();
    let submission = state.submit(ms(100)).unwrap();
    assert!(submission.correct);

    assert_eq!(flags(&state), (Some(0), true, true, true, true, false, false));
    let burst = state.confetti().unwrap();
    assert_eq!(burst.count, CONFETTI_COUNT);
    assert_eq!(burst.origin, CONFETTI_ORIGIN);
    assert_eq!(burst.fired_at, ms(100));
    assert!(state.shake().is_none());
    assert_eq!(state.feedback().unwrap().message, "Correct! Great job!");

    state.advance(ms(3099));
    assert_eq!(flags(&state), (Some(0), true, true, true, true, false, false));

    state.advance(ms(3100));
    assert_eq!(flags(&state), (Some(0), true, true, false, false, true, false));
    assert!(state.confetti().is_none());
    assert_eq!(state.pending_effects(), 0);
}

#[test]
fn test_incorrect_submission_sequence() {
    let mut state = new_state();
    state.select_answer(2).unwrap();
    let submission = state.submit(ms(0)).unwrap();
    assert!(!submission.correct);

    assert_eq!(flags(&state), (Some(2), true, false, true, false, false, false));
    assert!(state.confetti().is_none());
    assert_eq!(state.feedback().unwrap().message, "Oops! That's not right.");

    // The shake starts immediately
    assert_eq!(state.shake_offset(ms(100)), 10);
    assert_eq!(state.shake_offset(ms(200)), -10);

    state.advance(ms(999));
    assert!(!state.show_incorrect_popup());
    state.advance(ms(1000));
    assert!(state.show_incorrect_popup());
    assert!(state.shake().is_none());
    assert!(state.show_feedback());

    state.advance(ms(3000));
    assert!(!state.show_feedback());
    assert!(state.show_incorrect_popup());
    assert!(!state.show_badge_popup());
}

#[test]
fn test_close_incorrect_popup_resets_selection() {
    let mut state = new_state();
    state.select_answer(1).unwrap();
    state.submit(ms(0));
    state.advance(ms(1000));

    state.close_incorrect_popup();
    assert_eq!(state.selected_answer(), None);
    assert!(!state.has_submitted());
    assert!(!state.show_incorrect_popup());
    // Feedback is still running until its own timer fires
    assert!(state.show_feedback());

    // Also holds when nothing was showing
    let mut fresh = new_state();
    fresh.select_answer(0).unwrap();
    fresh.close_incorrect_popup();
    assert_eq!(flags(&fresh), (None, false, false, false, false, false, false));
}

#[test]
fn test_close_badge_popup_only_clears_badge() {
    let mut state = new_state();
    state.select_answer(0).unwrap();
    state.submit(ms(0));
    state.advance(ms(3000));
    assert!(state.show_badge_popup());

    state.close_badge_popup();
    assert_eq!(flags(&state), (Some(0), true, true, false, false, false, false));
}

#[test]
fn test_reselect_before_popup_reruns_machine() {
    let mut state = new_state();
    assert_eq!(state.current_question().code_snippet, "console.log(1 + \"2\" + \"2\");");

    state.select_answer(0).unwrap();
    assert!(state.submit(ms(0)).unwrap().correct);
    assert!(state.is_correct());

    state.select_answer(1).unwrap();
    let second = state.submit(ms(500)).unwrap();
    assert!(!second.correct);
    assert!(!state.is_correct());
    assert!(!state.explode_confetti());
    assert!(second.id > 1);
}

#[test]
fn test_stale_timers_fire_by_default() {
    let mut state = new_state();
    state.select_answer(0).unwrap();
    state.submit(ms(0));

    // Re-select before the badge appears
    state.select_answer(1).unwrap();
    state.submit(ms(2000));
    assert!(state.show_feedback());

    // The first submission's timers still run
    state.advance(ms(3000));
    assert!(state.show_badge_popup());
    assert!(state.show_incorrect_popup());
    assert!(!state.show_feedback());
}

#[test]
fn test_active_submission_only_drops_stale_popups() {
    let mut state = strict_state();
    state.select_answer(0).unwrap();
    state.submit(ms(0));

    state.select_answer(1).unwrap();
    state.submit(ms(2000));

    state.advance(ms(3000));
    assert!(!state.show_badge_popup());
    assert!(state.show_incorrect_popup());
    // The newer submission owns the feedback window
    assert!(state.show_feedback());

    state.advance(ms(5000));
    assert!(!state.show_feedback());
}

#[test]
fn test_active_submission_only_reselect_without_submit() {
    let mut state = strict_state();
    state.select_answer(3).unwrap();
    state.submit(ms(0));

    state.select_answer(0).unwrap();
    state.advance(ms(3000));
    assert!(!state.show_incorrect_popup());
    // Feedback still expires
    assert!(!state.show_feedback());
}

#[test]
fn test_option_highlight() {
    let mut state = new_state();
    assert_eq!(state.option_highlight(0), OptionHighlight::Plain);

    state.select_answer(1).unwrap();
    assert_eq!(state.option_highlight(1), OptionHighlight::Selected);
    assert_eq!(state.option_highlight(0), OptionHighlight::Plain);

    state.submit(ms(0));
    assert_eq!(state.option_highlight(1), OptionHighlight::Incorrect);
    // The correct answer is never revealed
    assert_eq!(state.option_highlight(0), OptionHighlight::Plain);

    state.select_answer(0).unwrap();
    assert_eq!(state.option_highlight(0), OptionHighlight::Selected);
    state.submit(ms(100));
    assert_eq!(state.option_highlight(0), OptionHighlight::Correct);
    assert_eq!(state.option_highlight(1), OptionHighlight::Plain);
}

#[test]
fn test_shake_is_not_interrupted() {
    let mut state = new_state();
    state.select_answer(1).unwrap();
    state.submit(ms(0));
    state.select_answer(2).unwrap();
    state.submit(ms(150));

    let shake = state.shake().unwrap();
    assert_eq!(shake.started_at(), ms(0));
    assert_eq!(state.shake_offset(ms(400)), 0);

    state.advance(ms(400));
    assert!(state.shake().is_none());

    state.select_answer(3).unwrap();
    state.submit(ms(450));
    assert_eq!(state.shake().unwrap().started_at(), ms(450));
}

#[test]
fn test_custom_timing() {
    let timing = Timing {
        feedback_window_ms: 500,
        badge_delay_ms: 200,
        hint_delay_ms: 100,
        shake_step_ms: 10,
    };
    let quiz = builtin_quiz();
    let mut state =
        QuizState::new(quiz.questions, 0, timing, StaleTimerPolicy::FireAndForget).unwrap();

    state.select_answer(0).unwrap();
    state.submit(ms(0));
    state.advance(ms(200));
    assert!(state.show_badge_popup());
    assert!(state.show_feedback());
    state.advance(ms(500));
    assert!(!state.show_feedback());
}
