//! In-memory script store with lazy time-based expiry.
//!
//! Every operation runs under one exclusive lock, so submit, get, delete,
//! list, clear, and sweep never interleave. Nothing here performs I/O and
//! nothing awaits while the lock is held.
//!
//! Expiry policy: an entry expires once `now - created_at > SCRIPT_TTL_SECS`.
//! Submit, delete, and list sweep the whole map; get checks the requested
//! key only. The API crate additionally runs a periodic background sweep.
//! State lives only as long as the process.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::preview::preview;
use crate::types::{ScriptEntry, ScriptId, ScriptSummary, Timestamp, UNKNOWN_OWNER};

/// Age (in seconds) after which an entry becomes eligible for removal.
pub const SCRIPT_TTL_SECS: i64 = 300;

const ENTITY: &str = "Script";

#[derive(Default)]
struct Inner {
    entries: HashMap<ScriptId, ScriptEntry>,
    /// Last issued id, as milliseconds since the Unix epoch.
    last_id: i64,
}

impl Inner {
    /// Next strictly increasing millisecond id.
    fn next_id(&mut self, now: Timestamp) -> ScriptId {
        let now_ms = now.timestamp_millis();
        let id = if now_ms > self.last_id {
            now_ms
        } else {
            self.last_id + 1
        };
        self.last_id = id;
        id.to_string()
    }

    fn sweep(&mut self, now: Timestamp) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !is_expired(entry, now));
        before - self.entries.len()
    }
}

fn is_expired(entry: &ScriptEntry, now: Timestamp) -> bool {
    now - entry.created_at > chrono::Duration::seconds(SCRIPT_TTL_SECS)
}

/// Process-local store of short-lived script submissions.
///
/// Designed to be wrapped in `Arc` and shared across request handlers.
pub struct ScriptStore {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
}

impl ScriptStore {
    /// Create an empty store backed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            clock,
        }
    }

    /// Every mutation is a single map call, so a panic elsewhere never
    /// leaves the map half-updated and a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a new script and return its freshly issued id.
    ///
    /// Fails with [`CoreError::Validation`] when `content` is empty. A
    /// missing `owner` is recorded as `"Unknown"`; a supplied one is kept as is.
    pub fn submit(&self, content: String, owner: Option<String>) -> Result<ScriptId, CoreError> {
        if content.is_empty() {
            return Err(CoreError::Validation("script content is required".into()));
        }

        let owner = owner.unwrap_or_else(|| UNKNOWN_OWNER.to_string());

        let now = self.clock.now();
        let mut inner = self.lock();
        inner.sweep(now);

        let id = inner.next_id(now);
        inner.entries.insert(
            id.clone(),
            ScriptEntry {
                id: id.clone(),
                content,
                owner,
                created_at: now,
            },
        );
        Ok(id)
    }

    /// Fetch a script by id.
    ///
    /// An entry past its TTL is removed here and reported as not found,
    /// even if no sweep has run since it expired.
    pub fn get(&self, id: &str) -> Result<ScriptEntry, CoreError> {
        let now = self.clock.now();
        let mut inner = self.lock();

        let expired = match inner.entries.get(id) {
            Some(entry) if !is_expired(entry, now) => return Ok(entry.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            inner.entries.remove(id);
        }
        Err(not_found(id))
    }

    /// Remove a script by id.
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        let now = self.clock.now();
        let mut inner = self.lock();
        inner.sweep(now);

        match inner.entries.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }

    /// Snapshot of every live entry as `id -> {owner, preview}`, ordered by id.
    pub fn list_summaries(&self) -> BTreeMap<ScriptId, ScriptSummary> {
        let now = self.clock.now();
        let mut inner = self.lock();
        inner.sweep(now);

        inner
            .entries
            .iter()
            .map(|(id, entry)| {
                (
                    id.clone(),
                    ScriptSummary {
                        owner: entry.owner.clone(),
                        preview: preview(&entry.content),
                    },
                )
            })
            .collect()
    }

    /// Drop every entry regardless of age. Returns how many were removed.
    pub fn clear_all(&self) -> usize {
        let mut inner = self.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        removed
    }

    /// Number of entries held as of the most recent sweep.
    pub fn count(&self) -> usize {
        self.lock().entries.len()
    }

    /// Remove every entry older than the TTL. Returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        self.lock().sweep(now)
    }
}

impl Default for ScriptStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}
