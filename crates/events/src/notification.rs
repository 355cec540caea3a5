use serde::{Deserialize, Serialize};

/// Notification published after a dispatcher accepts an action.
///
/// Notes:
/// - `sequence_number` starts at 1 and increases by exactly 1 per accepted action.
/// - `state` is the full state after the transition, not a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChanged<S> {
    sequence_number: u64,
    action_type: String,
    state: S,
}

impl<S> StateChanged<S> {
    pub fn new(sequence_number: u64, action_type: impl Into<String>, state: S) -> Self {
        Self {
            sequence_number,
            action_type: action_type.into(),
            state,
        }
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }
}
