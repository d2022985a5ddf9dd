use std::time::Duration;

/// Offsets the feedback line passes through, one per step.
pub const SHAKE_SEQUENCE: [i16; 4] = [10, -10, 10, 0];

/// A horizontal shake, linearly interpolated between sequence targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shake {
    started_at: Duration,
    step: Duration,
}

impl Shake {
    pub fn new(started_at: Duration, step: Duration) -> Self {
        Self { started_at, step }
    }

    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    pub fn total(&self) -> Duration {
        self.step * SHAKE_SEQUENCE.len() as u32
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.total()
    }

    pub fn offset_at(&self, now: Duration) -> i16 {
        let step_ms = self.step.as_millis();
        if step_ms == 0 || now < self.started_at || self.is_finished(now) {
            return 0;
        }

        let elapsed = (now - self.started_at).as_millis();
        let idx = (elapsed / step_ms) as usize;
        let from = if idx == 0 { 0.0 } else { SHAKE_SEQUENCE[idx - 1] as f64 };
        let to = SHAKE_SEQUENCE[idx] as f64;
        let t = (elapsed % step_ms) as f64 / step_ms as f64;

        (from + (to - from) * t).round() as i16
    }
}
