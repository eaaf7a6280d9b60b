/*
[INPUT]:  Backend JSON shapes and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Lifecycle state of a log input as reported by the log-aggregation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputState {
    Created,
    Initialized,
    InvalidConfiguration,
    Starting,
    Running,
    Failed,
    Stopping,
    Stopped,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl InputState {
    pub fn is_running(self) -> bool {
        matches!(self, InputState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_wire_names() {
        let state: InputState = serde_json::from_str(r#""INVALID_CONFIGURATION""#).unwrap();
        assert_eq!(state, InputState::InvalidConfiguration);
        assert_eq!(serde_json::to_string(&InputState::Running).unwrap(), r#""RUNNING""#);
    }

    #[test]
    fn test_unrecognized_input_state() {
        let state: InputState = serde_json::from_str(r#""SETUP""#).unwrap();
        assert_eq!(state, InputState::Unknown);
        assert!(!state.is_running());
    }
}
