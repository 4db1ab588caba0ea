//! Hand-off of finished results to the persistence collaborator.
//!
//! Results are written to a shared string key/value store: the newest record
//! under [`LATEST_RESULT_KEY`], every record appended to the JSON array under
//! [`QUEUED_RESULTS_KEY`], and an RFC 3339 timestamp under
//! [`LAST_SHARE_KEY`] signalling that something new is waiting.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::{error::HandoffError, result::GameResult};

/// Key holding the most recent result.
pub const LATEST_RESULT_KEY: &str = "latestGameResult";

/// Key holding the JSON array of results awaiting ingestion.
pub const QUEUED_RESULTS_KEY: &str = "queuedGameResults";

/// Key holding the time of the last hand-off.
pub const LAST_SHARE_KEY: &str = "lastShareTimestamp";

/// A string key/value location shared with the host application.
pub trait SharedStore {
    /// Returns the value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Deletes `key`; a missing key is not an error.
    fn remove(&mut self, key: &str);
}

/// In-memory store, used in tests and by hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Reads the queued results; a missing key is an empty queue.
fn read_queue<S: SharedStore + ?Sized>(store: &S) -> Result<Vec<GameResult>, HandoffError> {
    match store.get(QUEUED_RESULTS_KEY) {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Writes a result as the latest record, queues it and stamps the signal key.
///
/// # Errors
///
/// Returns `HandoffError::Json` if the existing queue is not valid JSON.
/// Nothing is written in that case.
pub fn publish<S: SharedStore + ?Sized>(store: &mut S, result: &GameResult) -> Result<(), HandoffError> {
    let latest = serde_json::to_string(result)?;
    let mut queue = read_queue(store)?;
    queue.push(result.clone());
    let queue_json = serde_json::to_string(&queue)?;

    store.set(LATEST_RESULT_KEY, latest);
    store.set(QUEUED_RESULTS_KEY, queue_json);
    store.set(LAST_SHARE_KEY, Utc::now().to_rfc3339());

    debug!(
        game = result.game_name(),
        queued = queue.len(),
        "published result"
    );
    Ok(())
}

/// Returns the latest published result, if any.
pub fn latest<S: SharedStore + ?Sized>(store: &S) -> Result<Option<GameResult>, HandoffError> {
    store
        .get(LATEST_RESULT_KEY)
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(HandoffError::from)
}

/// Takes every queued result, leaving the queue empty.
pub fn drain_queue<S: SharedStore + ?Sized>(store: &mut S) -> Result<Vec<GameResult>, HandoffError> {
    let queue = read_queue(store)?;
    store.remove(QUEUED_RESULTS_KEY);
    Ok(queue)
}
