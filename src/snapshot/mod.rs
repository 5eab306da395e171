//! Snapshot and restore for calculator sessions.
//!
//! A snapshot captures the current state, the theme and the transition
//! history so a front end can stash a session and pick it up later. The
//! library only produces and consumes encoded values; where they are kept
//! is up to the caller.

use crate::core::{CalculatorState, History};
use crate::session::Calculator;
use crate::theme::Theme;
use crate::validation::violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Current calculator state
    pub state: CalculatorState,

    /// Selected theme
    pub theme: Theme,

    /// Transition history at the time of the snapshot
    pub history: History,
}

impl Snapshot {
    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Serialize to an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON and check version and state.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.verify()
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format and check version and state.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.verify()
    }

    fn verify(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let found = violations(&self.state);
        if !found.is_empty() {
            tracing::warn!(id = %self.id, violations = found.len(), "rejecting snapshot");
            return Err(SnapshotError::InvalidState(found));
        }

        Ok(self)
    }
}

impl Calculator {
    /// Capture the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            state: self.state.clone(),
            theme: self.theme,
            history: self.history.clone(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Number format and history limit come from `self`; state, theme and
    /// history come from the snapshot. The restored history is trimmed to
    /// the local limit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::session::Calculator;
    /// use keycalc::snapshot::Snapshot;
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.press_line("7 × 6").unwrap();
    ///
    /// let json = calculator.snapshot().to_json().unwrap();
    /// let snapshot = Snapshot::from_json(&json).unwrap();
    ///
    /// let mut resumed = Calculator::new().restore(snapshot).unwrap();
    /// resumed.press_label("=").unwrap();
    /// assert_eq!(resumed.display(), "42");
    /// ```
    pub fn restore(self, snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let snapshot = snapshot.verify()?;
        tracing::debug!(id = %snapshot.id, taken_at = %snapshot.taken_at, "restoring snapshot");

        Ok(Self {
            state: snapshot.state,
            theme: snapshot.theme,
            history: snapshot.history.into_trimmed(self.history_limit),
            ..self
        })
    }
}
