//! store.rs - Storage of verification-code records.
//!
//! One record per user: issuing a new code replaces any previous one. The
//! `CodeStore` trait keeps the backing storage pluggable; the in-memory
//! implementation covers single-process deployments and tests.
//!
//! License: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// A stored verification code: the hash of the code and when it was issued.
///
/// The plaintext code is never stored; it exists only in the value returned
/// to the issuance caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    pub code_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A trait for the backing storage of verification-code records, keyed by
/// the user's auth identifier.
pub trait CodeStore: Send + Sync {
    /// Stores `record` for `user_id`, replacing any existing record.
    fn put(&self, user_id: &str, record: CodeRecord);

    /// Returns the record for `user_id`, if any.
    fn get(&self, user_id: &str) -> Option<CodeRecord>;

    /// Removes the record for `user_id`. Returns whether one existed.
    fn remove(&self, user_id: &str) -> bool;

    /// Removes every record created before `cutoff`. Returns the number
    /// removed.
    fn remove_created_before(&self, cutoff: DateTime<Utc>) -> usize;
}

/// An in-memory `CodeStore` behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryCodeStore {
    records: RwLock<HashMap<String, CodeRecord>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeStore for InMemoryCodeStore {
    fn put(&self, user_id: &str, record: CodeRecord) {
        self.records
            .write()
            .unwrap()
            .insert(user_id.to_string(), record);
    }

    fn get(&self, user_id: &str) -> Option<CodeRecord> {
        self.records.read().unwrap().get(user_id).cloned()
    }

    fn remove(&self, user_id: &str) -> bool {
        self.records.write().unwrap().remove(user_id).is_some()
    }

    fn remove_created_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|_, record| record.created_at >= cutoff);
        before - records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(age_minutes: i64) -> CodeRecord {
        CodeRecord {
            code_hash: "hash".to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn put_replaces_the_previous_record() {
        let store = InMemoryCodeStore::new();
        store.put("42", record(10));
        store.put("42", record(0));
        let stored = store.get("42").unwrap();
        assert!(Utc::now() - stored.created_at < Duration::minutes(1));
    }

    #[test]
    fn remove_reports_presence() {
        let store = InMemoryCodeStore::new();
        store.put("42", record(0));
        assert!(store.remove("42"));
        assert!(!store.remove("42"));
        assert!(store.get("42").is_none());
    }

    #[test]
    fn remove_created_before_only_drops_old_records() {
        let store = InMemoryCodeStore::new();
        store.put("old", record(30));
        store.put("fresh", record(1));
        let removed = store.remove_created_before(Utc::now() - Duration::minutes(5));
        assert_eq!(removed, 1);
        assert!(store.get("old").is_none());
        assert!(store.get("fresh").is_some());
    }
}
