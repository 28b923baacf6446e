//! In-memory condolence feed: append-only, newest first, capped.
//!
//! Entries live for the process lifetime only.
//! Append and truncation happen in one critical section, so `list()`
//! never observes a half-truncated sequence.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Most recent entries kept; older ones are discarded.
pub const CONDOLENCE_CAP: usize = 50;

/// One published condolence message. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct CondolenceEntry {
    /// Unique and monotonically increasing by creation time. Serialized
    /// as a string, which is what the front-end expects.
    #[serde(serialize_with = "id_as_string")]
    pub id: u64,
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    pub message: String,
    pub date: DateTime<Utc>,
}

fn id_as_string<S>(id: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&id.to_string())
}

struct Inner {
    entries: VecDeque<CondolenceEntry>,
    last_id: u64,
}

/// Process-wide condolence store, cloned into handlers.
#[derive(Clone)]
pub struct CondolenceStore {
    inner: Arc<Mutex<Inner>>,
}

impl CondolenceStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: VecDeque::new(),
                last_id: 0,
            })),
        }
    }

    /// Append a new entry at the front and truncate to the cap.
    ///
    /// Ids are seeded from the submission time in milliseconds; two
    /// appends in the same millisecond still get distinct, increasing ids.
    pub fn append(
        &self,
        nom: String,
        relation: Option<String>,
        message: String,
    ) -> CondolenceEntry {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();
        let id = (now.timestamp_millis() as u64).max(inner.last_id + 1);
        inner.last_id = id;

        let entry = CondolenceEntry {
            id,
            nom,
            relation,
            message,
            date: now,
        };
        inner.entries.push_front(entry.clone());
        inner.entries.truncate(CONDOLENCE_CAP);
        entry
    }

    /// Snapshot of the current feed, newest first.
    pub fn list(&self) -> Vec<CondolenceEntry> {
        self.inner.lock().unwrap().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CondolenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = CondolenceStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list().len(), 0);
    }

    #[test]
    fn lists_newest_first() {
        let store = CondolenceStore::new();
        store.append("Premier".to_string(), None, "message 1".to_string());
        store.append("Deuxième".to_string(), None, "message 2".to_string());

        let entries = store.list();
        assert_eq!(entries[0].nom, "Deuxième");
        assert_eq!(entries[1].nom, "Premier");
    }

    #[test]
    fn ids_are_unique_and_increasing_even_within_one_millisecond() {
        let store = CondolenceStore::new();
        let ids: Vec<u64> = (0..10)
            .map(|i| {
                store
                    .append(format!("Nom {i}"), None, "message".to_string())
                    .id
            })
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn keeps_only_the_fifty_most_recent() {
        let store = CondolenceStore::new();
        for i in 0..55 {
            store.append(format!("Nom {i}"), None, format!("message {i}"));
        }

        let entries = store.list();
        assert_eq!(entries.len(), CONDOLENCE_CAP);
        // Newest first: the last append is at the front, the first five
        // appends fell off the back.
        assert_eq!(entries[0].nom, "Nom 54");
        assert_eq!(entries[49].nom, "Nom 5");
    }

    #[test]
    fn content_round_trips_unchanged() {
        let store = CondolenceStore::new();
        let appended = store.append(
            "Fatou Diabaté".to_string(),
            Some("Amie de la famille".to_string()),
            "  Un message avec des espaces conservés  ".to_string(),
        );

        let listed = &store.list()[0];
        assert_eq!(listed.id, appended.id);
        assert_eq!(listed.nom, "Fatou Diabaté");
        assert_eq!(listed.relation.as_deref(), Some("Amie de la famille"));
        assert_eq!(listed.message, "  Un message avec des espaces conservés  ");
    }

    #[test]
    fn serializes_id_as_string_and_skips_absent_relation() {
        let store = CondolenceStore::new();
        let entry = store.append("Nom".to_string(), None, "message".to_string());

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], serde_json::json!(entry.id.to_string()));
        assert!(value.get("relation").is_none());
        assert!(value["date"].is_string());
    }
}
