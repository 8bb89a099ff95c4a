//! Single-slot notification
//!
//! Showing a new message replaces the old one and restarts its timer, so
//! auto-hide deadlines never stack.

#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: Option<String>,
    /// Timestamp (ms) after which the toast hides
    hide_at: f64,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` for `duration_ms` starting at `now`, replacing any pending hide
    pub fn show(&mut self, message: impl Into<String>, now: f64, duration_ms: f64) {
        self.message = Some(message.into());
        self.hide_at = now + duration_ms;
    }

    /// Hide if the deadline passed; returns `true` when it just hid
    pub fn expire(&mut self, now: f64) -> bool {
        if self.message.is_some() && now >= self.hide_at {
            self.message = None;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_after_duration() {
        let mut toast = Toast::new();
        toast.show("hi", 1000.0, 1600.0);
        assert!(!toast.expire(2599.0));
        assert_eq!(toast.message(), Some("hi"));
        assert!(toast.expire(2600.0));
        assert!(!toast.is_visible());
        assert!(!toast.expire(3000.0), "already hidden");
    }

    #[test]
    fn test_new_message_replaces_timer() {
        let mut toast = Toast::new();
        toast.show("first", 0.0, 1600.0);
        toast.show("second", 1500.0, 1600.0);
        // The first deadline no longer applies
        assert!(!toast.expire(1700.0));
        assert_eq!(toast.message(), Some("second"));
        assert!(toast.expire(3100.0));
    }
}
