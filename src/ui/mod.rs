pub mod confetti;
pub mod dialog;
pub mod feedback;
pub mod keybar;
pub mod layout;
pub mod options;
pub mod question;
pub mod titlebar;

use std::time::Duration;

use ratatui::Frame;

use crate::app::App;

/// Renders the whole quiz screen from `app` at clock time `now`.
pub fn draw(f: &mut Frame, app: &App, now: Duration) {
    let area = f.area();
    let layout = layout::compute_layout(area, app.quiz.current_question());

    titlebar::draw_titlebar(f, layout.titlebar, app, now);
    question::draw_question(f, layout.question, app);
    options::draw_options(f, &layout.options, app);
    options::draw_submit(f, layout.submit);
    feedback::draw_feedback(f, layout.feedback, app, now);
    keybar::draw_keybar(f, layout.keybar, app);

    if let Some(burst) = app.quiz.confetti() {
        confetti::draw_confetti(f, area, &burst, now);
    }

    dialog::draw_popups(f, area, app);
}
