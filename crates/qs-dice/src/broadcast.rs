//! Roll broadcast payload.
//!
//! After a roll, the host platform's messaging channel can relay it to
//! other connected clients as a named event. The transport is an external
//! collaborator; this module only owns the event name and payload shape.
//! Delivery is fire-and-forget, at most once per user action.

use serde::{Deserialize, Serialize};

use crate::notation::RollMode;
use crate::roll::RollRequest;

/// Channel name for relayed rolls.
pub const ROLL_EVENT: &str = "quasit.roll";

/// The payload relayed for one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEvent {
    /// The base notation that was rolled.
    pub notation: String,
    /// Roll mode.
    pub mode: RollMode,
    /// Advantage/disadvantage stack count.
    pub stack_count: u32,
    /// Whether crit explosions were enabled.
    pub crit_enabled: bool,
}

impl RollEvent {
    /// Build the event for a request.
    pub fn from_request(request: &RollRequest) -> Self {
        Self {
            notation: request.notation.clone(),
            mode: request.mode,
            stack_count: request.stack_count,
            crit_enabled: request.crit_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_request() {
        let request = RollRequest::new("2d6+1")
            .with_mode(RollMode::Advantage)
            .with_stack_count(2)
            .with_crit(true);
        let event = RollEvent::from_request(&request);
        assert_eq!(event.notation, "2d6+1");
        assert_eq!(event.mode, RollMode::Advantage);
        assert_eq!(event.stack_count, 2);
        assert!(event.crit_enabled);
    }

    #[test]
    fn serde_round_trip() {
        let event = RollEvent {
            notation: "1d20+3".to_string(),
            mode: RollMode::Disadvantage,
            stack_count: 1,
            crit_enabled: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"disadvantage\""));
        let back: RollEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
