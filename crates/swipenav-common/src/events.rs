use serde::{Deserialize, Serialize};

use crate::types::PanelCoord;

/// Things the navigator did, recorded for the host to drain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NavEvent {
    TransitionStarted { from: PanelCoord, to: PanelCoord },
    TransitionCompleted { at: PanelCoord },
    NavigationDropped { from: PanelCoord, to: PanelCoord },
    GestureIgnored,
    MediaPlay { index: usize },
    MediaPause { index: usize },
    Resized { width: f64, height: f64 },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_event_json_shape() {
        let event = NavEvent::TransitionStarted {
            from: PanelCoord::HOME,
            to: PanelCoord::new(1, 0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"TransitionStarted","data":{"from":[0,0],"to":[1,0]}}"#
        );
    }

    #[test]
    fn unit_event_json_shape() {
        let json = serde_json::to_string(&NavEvent::GestureIgnored).unwrap();
        assert_eq!(json, r#"{"type":"GestureIgnored"}"#);
    }

    #[test]
    fn media_event_deserializes() {
        let json = r#"{"type":"MediaPlay","data":{"index":2}}"#;
        let event: NavEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, NavEvent::MediaPlay { index: 2 });
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: NavEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, NavEvent::Unknown));
    }
}
