use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
}

/// Sends a `Tick` every `rate` until the receiver is dropped.
pub fn spawn_ticker(rate: Duration) -> mpsc::Receiver<TimerEvent> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || loop {
        if tx.send(TimerEvent::Tick).is_err() {
            break;
        }
        thread::sleep(rate);
    });

    rx
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}", minutes, seconds)
}
