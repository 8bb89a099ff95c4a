//! Question/success screen state
//!
//! The location fragment is the only persisted state: `#success` shows the
//! success screen, anything else shows the question.

/// Which view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Question,
    Success,
}

impl Screen {
    /// Derive the screen from a location fragment, with or without its leading `#`
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment.strip_prefix('#').unwrap_or(fragment) {
            "success" => Screen::Success,
            _ => Screen::Question,
        }
    }

    /// Fragment to push when entering this screen
    pub fn fragment(&self) -> &'static str {
        match self {
            Screen::Question => "#",
            Screen::Success => "#success",
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Screen::Question)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Question => "question",
            Screen::Success => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        assert_eq!(Screen::from_fragment("#success"), Screen::Success);
        assert_eq!(Screen::from_fragment("success"), Screen::Success);
        assert_eq!(Screen::from_fragment(""), Screen::Question);
        assert_eq!(Screen::from_fragment("#"), Screen::Question);
        assert_eq!(Screen::from_fragment("#Success"), Screen::Question);
        assert_eq!(Screen::from_fragment("#success/extra"), Screen::Question);
    }

    #[test]
    fn test_fragment_round_trips_to_screen() {
        for screen in [Screen::Question, Screen::Success] {
            assert_eq!(Screen::from_fragment(screen.fragment()), screen);
        }
    }
}
