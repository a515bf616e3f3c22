use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ─── Domain types ────────────────────────────────────────────────

/// A single journal entry with metadata and media references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub content: String,
    pub mood: String,
    pub tags: Vec<String>,
    /// e.g. "file:///Users/me/memos/notes.md"
    pub media_refs: Vec<String>,
    /// Set by the store at creation, never by the caller.
    pub occurred_at: DateTime<Utc>,
}

/// Payload for `POST /api/v1/events`.
///
/// Missing and `null` fields both decode to empty, so an absent title
/// surfaces as the same "title is required" error as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEventInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mood: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_refs: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateEventInput {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

/// One OHLC-style data point for K-line rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub sheet: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// IDs of events linked to this data point
    pub events: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_camel_case() {
        let event = Event {
            id: "e1".into(),
            title: "t".into(),
            content: String::new(),
            mood: "Calm".into(),
            tags: vec!["a".into(), "a".into()],
            media_refs: vec!["file:///x".into()],
            occurred_at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("mediaRefs").is_some());
        assert!(json.get("occurredAt").is_some());
        assert_eq!(json["tags"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn input_fills_missing_fields() {
        let input: CreateEventInput = serde_json::from_str(r#"{"title":"hi"}"#).unwrap();
        assert!(input.has_title());
        assert!(input.tags.is_empty());
        assert!(input.media_refs.is_empty());

        let input: CreateEventInput = serde_json::from_str("{}").unwrap();
        assert!(!input.has_title());
    }

    #[test]
    fn input_treats_null_as_missing() {
        let input: CreateEventInput =
            serde_json::from_str(r#"{"title":null,"mood":null,"tags":null,"mediaRefs":null}"#)
                .unwrap();
        assert!(!input.has_title());
        assert!(input.mood.is_empty());
        assert!(input.tags.is_empty());
        assert!(input.media_refs.is_empty());
    }

    #[test]
    fn input_rejects_unknown_fields() {
        let res = serde_json::from_str::<CreateEventInput>(r#"{"title":"hi","id":"forged"}"#);
        assert!(res.is_err());
    }
}
