use serde::{Serialize, Serializer};

/// Store-assigned script identifier (decimal millisecond timestamp).
pub type ScriptId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Owner label used when the caller does not supply one.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// One stored submission. Immutable once inserted.
///
/// Serializes with the field names existing clients already read:
/// `script`, `player`, and `time` (Unix seconds, fractional).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptEntry {
    pub id: ScriptId,
    #[serde(rename = "script")]
    pub content: String,
    #[serde(rename = "player")]
    pub owner: String,
    #[serde(rename = "time", serialize_with = "unix_seconds")]
    pub created_at: Timestamp,
}

/// Listing row for a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    #[serde(rename = "player")]
    pub owner: String,
    pub preview: String,
}

fn unix_seconds<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    let secs = ts.timestamp_millis() as f64 / 1000.0;
    serializer.serialize_f64(secs)
}
