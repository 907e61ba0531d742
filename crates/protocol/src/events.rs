use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle stage of a transfer-engine event.
///
/// `ListEnter`/`ListItem`/`ListExit` bracket the item-listing phase of a
/// copy operation; `Pasv` carries a negotiated data-connection endpoint
/// descriptor. Engines emit further stages the bridge does not act on;
/// those round-trip through `Other` with their name preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventStage {
    ListEnter,
    ListItem,
    ListExit,
    Pasv,
    Other(String),
}

impl EventStage {
    /// Returns the engine's name for this stage.
    pub fn as_str(&self) -> &str {
        match self {
            EventStage::ListEnter => "LIST_ENTER",
            EventStage::ListItem => "LIST_ITEM",
            EventStage::ListExit => "LIST_EXIT",
            EventStage::Pasv => "PASV",
            EventStage::Other(name) => name,
        }
    }
}

impl From<&str> for EventStage {
    fn from(name: &str) -> Self {
        match name {
            "LIST_ENTER" => EventStage::ListEnter,
            "LIST_ITEM" => EventStage::ListItem,
            "LIST_EXIT" => EventStage::ListExit,
            "PASV" => EventStage::Pasv,
            other => EventStage::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventStage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventStage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(EventStage::from(name.as_str()))
    }
}

/// A lifecycle event as delivered by the transfer engine.
///
/// `description` is a UTF-8 payload whose grammar depends on the stage:
/// a `" => "`-separated path pair for `ListItem`, a `host:[ip]:port`
/// descriptor for `Pasv`. `domain` names the emitting engine subsystem
/// and `timestamp_ms` is the engine-side clock in milliseconds; routing
/// consults neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineEvent {
    pub stage: EventStage,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub timestamp_ms: i64,
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

impl EngineEvent {
    /// Creates an event with the given stage and description.
    pub fn new(stage: EventStage, description: impl Into<String>) -> Self {
        Self {
            stage,
            description: description.into(),
            domain: String::new(),
            timestamp_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_roundtrip() {
        for name in ["LIST_ENTER", "LIST_ITEM", "LIST_EXIT", "PASV"] {
            let stage = EventStage::from(name);
            assert!(!matches!(stage, EventStage::Other(_)), "{name}");
            assert_eq!(stage.as_str(), name);
        }
    }

    #[test]
    fn unknown_stage_preserves_name() {
        let stage = EventStage::from("TRANSFER_ENTER");
        assert_eq!(stage, EventStage::Other("TRANSFER_ENTER".into()));
        assert_eq!(stage.as_str(), "TRANSFER_ENTER");
        assert_eq!(stage.to_string(), "TRANSFER_ENTER");
    }

    #[test]
    fn stage_serializes_as_engine_name() {
        assert_eq!(
            serde_json::to_string(&EventStage::ListEnter).unwrap(),
            "\"LIST_ENTER\""
        );
        assert_eq!(serde_json::to_string(&EventStage::Pasv).unwrap(), "\"PASV\"");
    }

    #[test]
    fn stage_deserializes_unknown_into_other() {
        let stage: EventStage = serde_json::from_str("\"CHECKSUM\"").unwrap();
        assert_eq!(stage, EventStage::Other("CHECKSUM".into()));
    }

    #[test]
    fn event_new_leaves_supplemental_fields_empty() {
        let event = EngineEvent::new(EventStage::ListItem, "a => b");
        assert_eq!(event.stage, EventStage::ListItem);
        assert_eq!(event.description, "a => b");
        assert!(event.domain.is_empty());
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn event_json_roundtrip() {
        let event = EngineEvent {
            stage: EventStage::Pasv,
            description: "host:[192.168.1.5]:20123".into(),
            domain: "GRIDFTP".into(),
            timestamp_ms: 1_700_000_000_123,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"timestampMs\":1700000000123"));
        let parsed: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn event_omits_empty_supplemental_fields() {
        let event = EngineEvent::new(EventStage::ListExit, "");
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("domain"));
        assert!(!json.contains("timestampMs"));
    }

    #[test]
    fn event_parses_without_supplemental_fields() {
        let event: EngineEvent =
            serde_json::from_str(r#"{"stage":"LIST_ENTER","description":""}"#).unwrap();
        assert_eq!(event.stage, EventStage::ListEnter);
        assert!(event.domain.is_empty());
    }
}
