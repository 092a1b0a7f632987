//! Page lifecycle shared by the submission and confirmation steps.

/// One page's state: waiting for data, usable, or failed with a message.
///
/// The `Ready` payload carries everything the page needs, so a page cannot be
/// usable without its data.
#[derive(Debug, Clone, PartialEq)]
pub enum StepState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> StepState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// `Ready` on success; on failure, `Error` with the caller's message.
    pub fn from_result<E>(result: Result<T, E>, message: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(_) => Self::Error(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_variant() {
        let mut state: StepState<u32> = StepState::Loading;
        assert!(state.is_loading());
        assert!(state.ready().is_none());

        state = StepState::Ready(4);
        *state.ready_mut().unwrap() += 1;
        assert_eq!(state.ready(), Some(&5));

        state = StepState::Error("boom".into());
        assert_eq!(state.error(), Some("boom"));
        assert!(!state.is_ready());
    }

    #[test]
    fn from_result_replaces_error_detail() {
        let state: StepState<u32> = StepState::from_result(Err::<u32, _>("io"), "try again");
        assert_eq!(state, StepState::Error("try again".into()));
    }
}
