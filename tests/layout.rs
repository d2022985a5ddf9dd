use ratatui::layout::Rect;

use codequiz::model::builtin_quiz;
use codequiz::ui::layout::{compute_layout, wrap_words, MAX_CONTENT_WIDTH, OPTION_HEIGHT};

#[test]
fn test_wrap_words_on_word_boundaries() {
    assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
    assert_eq!(wrap_words("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_words("", 10), vec![""]);
}

#[test]
fn test_one_rect_per_option_inside_content_column() {
    let quiz = builtin_quiz();
    let area = Rect::new(0, 0, 100, 40);
    let layout = compute_layout(area, &quiz.questions[0]);

    assert_eq!(layout.options.len(), 4);
    for (i, rect) in layout.options.iter().enumerate() {
        assert_eq!(rect.height, OPTION_HEIGHT, "option {}", i);
        assert_eq!(rect.width, MAX_CONTENT_WIDTH, "option {}", i);
        assert_eq!(rect.x, (100 - MAX_CONTENT_WIDTH) / 2);
    }
    let last = layout.options[3];
    assert!(layout.submit.y >= last.y + last.height);
    assert!(layout.feedback.y >= layout.submit.y + layout.submit.height);
    assert_eq!(layout.titlebar.y, 0);
    assert_eq!(layout.keybar.y, 39);
}
