use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{App, Popup};
use crate::error::Result;
use crate::timer::TimerEvent;
use crate::ui;

pub fn run_tui(
    mut app: App,
    timer_rx: mpsc::Receiver<TimerEvent>,
    tick: Duration,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &timer_rx, tick);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    timer_rx: &mpsc::Receiver<TimerEvent>,
    tick: Duration,
) -> Result<()> {
    let mounted = Instant::now();
    log::debug!("quiz screen mounted");

    loop {
        let now = mounted.elapsed();
        terminal.draw(|f| ui::draw(f, app, now))?;

        if app.should_quit {
            break;
        }

        if event::poll(tick)? {
            let now = mounted.elapsed();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, app, now);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(mouse, app, area, now);
                }
                _ => {}
            }
        }

        // Scheduled effects fire on the UI thread
        while let Ok(TimerEvent::Tick) = timer_rx.try_recv() {
            app.quiz.advance(mounted.elapsed());
        }
    }

    log::debug!("quiz screen unmounted after {:?}", mounted.elapsed());
    Ok(())
}

pub fn handle_key(key: KeyEvent, app: &mut App, now: Duration) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    // Popups are modal
    if let Some(popup) = app.top_popup() {
        match (popup, key.code) {
            (Popup::Help, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) => {
                app.dismiss_popup();
            }
            (
                Popup::Badge | Popup::Incorrect,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' '),
            ) => {
                app.dismiss_popup();
            }
            _ => {}
        }
        return;
    }

    if ctrl {
        return;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_lowercase() && !matches!(c, 'j' | 'k' | 'q' | 's') => {
            app.choose((c as u8 - b'a') as usize);
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.choose((c as u8 - b'1') as usize);
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') => app.choose_cursor(),
        KeyCode::Enter | KeyCode::Char('s') => app.submit(now),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_mouse(mouse: MouseEvent, app: &mut App, area: Rect, now: Duration) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);

    if let Some(popup) = app.top_popup() {
        if ui::dialog::button_rect(area, app, popup).contains(pos) {
            app.dismiss_popup();
        }
        return;
    }

    let layout = ui::layout::compute_layout(area, app.quiz.current_question());
    if let Some(idx) = layout.options.iter().position(|r| r.contains(pos)) {
        app.choose(idx);
    } else if layout.submit.contains(pos) {
        app.submit(now);
    }
}
