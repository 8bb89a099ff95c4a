//! Hold-to-dismiss gesture
//!
//! A hold starts on pointer-down over the evader and completes once the
//! pointer has stayed over it for `hold_ms`. Any frame without overlap
//! cancels it.

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoldState {
    #[default]
    Idle,
    Holding {
        pointer_id: i32,
        /// Timestamp (ms) of the pointer-down
        started_at: f64,
    },
}

/// Result of advancing the gesture by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldOutcome {
    /// No hold in progress
    Idle,
    /// Still holding, with progress in [0, 1)
    Progress(f32),
    /// Pointer drifted off the evader
    Cancelled,
    /// Held long enough; the tracker is idle again
    Completed,
}

#[derive(Debug, Clone, Default)]
pub struct HoldTracker {
    state: HoldState,
    progress: f32,
}

impl HoldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, HoldState::Holding { .. })
    }

    /// Pointer that started the current hold
    pub fn pointer_id(&self) -> Option<i32> {
        match self.state {
            HoldState::Holding { pointer_id, .. } => Some(pointer_id),
            HoldState::Idle => None,
        }
    }

    /// Progress in [0, 1], exposed every frame for the fill effect
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Start (or restart) a hold; only one can be active
    pub fn begin(&mut self, pointer_id: i32, now: f64) {
        self.state = HoldState::Holding {
            pointer_id,
            started_at: now,
        };
        self.progress = 0.0;
    }

    pub fn cancel(&mut self) {
        self.state = HoldState::Idle;
        self.progress = 0.0;
    }

    /// Advance one frame given whether the pointer still overlaps the evader
    pub fn update(&mut self, now: f64, overlapping: bool, hold_ms: f64) -> HoldOutcome {
        let HoldState::Holding { started_at, .. } = self.state else {
            return HoldOutcome::Idle;
        };

        if !overlapping {
            self.cancel();
            return HoldOutcome::Cancelled;
        }

        let progress = if hold_ms > 0.0 {
            (now - started_at) / hold_ms
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.cancel();
            return HoldOutcome::Completed;
        }

        self.progress = progress.clamp(0.0, 1.0) as f32;
        HoldOutcome::Progress(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD_MS: f64 = 3000.0;

    #[test]
    fn test_idle_stays_idle() {
        let mut hold = HoldTracker::new();
        assert_eq!(hold.update(100.0, true, HOLD_MS), HoldOutcome::Idle);
        assert_eq!(hold.progress(), 0.0);
    }

    #[test]
    fn test_completes_after_threshold_once() {
        let mut hold = HoldTracker::new();
        hold.begin(1, 1000.0);

        let mut completions = 0;
        let mut t = 1000.0;
        while t <= 5000.0 {
            if hold.update(t, true, HOLD_MS) == HoldOutcome::Completed {
                completions += 1;
            }
            t += 16.0;
        }
        assert_eq!(completions, 1);
        assert!(!hold.is_holding());
        assert_eq!(hold.progress(), 0.0);
    }

    #[test]
    fn test_progress_reported_while_holding() {
        let mut hold = HoldTracker::new();
        hold.begin(1, 0.0);
        assert_eq!(hold.update(1500.0, true, HOLD_MS), HoldOutcome::Progress(0.5));
        assert_eq!(hold.progress(), 0.5);
        assert_eq!(hold.pointer_id(), Some(1));
    }

    #[test]
    fn test_losing_overlap_cancels() {
        let mut hold = HoldTracker::new();
        hold.begin(3, 0.0);
        hold.update(2000.0, true, HOLD_MS);
        assert_eq!(hold.update(2016.0, false, HOLD_MS), HoldOutcome::Cancelled);
        assert_eq!(hold.progress(), 0.0);
        // Stays cancelled even once enough time has passed
        assert_eq!(hold.update(4000.0, true, HOLD_MS), HoldOutcome::Idle);
    }

    #[test]
    fn test_begin_replaces_existing_hold() {
        let mut hold = HoldTracker::new();
        hold.begin(1, 0.0);
        hold.begin(2, 2500.0);
        assert_eq!(hold.pointer_id(), Some(2));
        assert!(matches!(hold.update(3000.0, true, HOLD_MS), HoldOutcome::Progress(_)));
    }
}
