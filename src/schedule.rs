use std::time::Duration;

pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ShowBadgePopup,
    ShowIncorrectPopup,
    EndFeedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub submission: SubmissionId,
    pub effect: Effect,
    pub due: Duration,
}

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    submission: SubmissionId,
    effect: Effect,
}

/// Delayed, uncancellable effects on a clock measured from screen mount.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, submission: SubmissionId, effect: Effect) {
        self.pending.push(Pending {
            due,
            seq: self.next_seq,
            submission,
            effect,
        });
        self.next_seq += 1;
    }

    /// Removes and returns every effect due at or before `now`, earliest first.
    /// Effects with the same due time come out in the order they were scheduled.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Fired> {
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter()
            .map(|p| Fired {
                submission: p.submission,
                effect: p.effect,
                due: p.due,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
