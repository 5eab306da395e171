//! Transition history tracking.
//!
//! Provides immutable tracking of applied intents over time, following
//! functional programming principles.

use super::intent::Intent;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied intent.
///
/// Records are immutable values describing a move from one state to
/// another at a specific point in time.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{transition, CalculatorState, Intent, TransitionRecord};
/// use chrono::Utc;
///
/// let from = CalculatorState::new();
/// let intent = Intent::AddDigit('9');
/// let record = TransitionRecord {
///     to: transition(&from, &intent),
///     from,
///     intent,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.current_operand(), Some("9"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The intent that caused the transition
    pub intent: Intent,
    /// The state before the intent
    pub from: CalculatorState,
    /// The state after the intent
    pub to: CalculatorState,
    /// When the intent was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Build a record stamped with the current time.
    pub fn now(intent: Intent, from: CalculatorState, to: CalculatorState) -> Self {
        Self {
            intent,
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// True when this record is an evaluation that produced a result.
    pub fn is_evaluation(&self) -> bool {
        matches!(self.intent, Intent::Evaluate) && self.to.overwrite
    }
}

/// Ordered history of applied intents.
///
/// History is immutable - `record` returns a new history with the record
/// added.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{History, Intent, CalculatorState, TransitionRecord};
///
/// let empty = CalculatorState::new();
/// let one = empty.with_current("1");
///
/// let history = History::new();
/// let history = history.record(TransitionRecord::now(
///     Intent::AddDigit('1'),
///     empty,
///     one,
/// ));
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransitionRecord>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        self.clone().into_recorded(record, None)
    }

    /// Record a transition, keeping at most `limit` of the newest records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::{History, Intent, CalculatorState, TransitionRecord};
    ///
    /// let mut history = History::new();
    /// for digit in ['1', '2', '3'] {
    ///     history = history.record_bounded(
    ///         TransitionRecord::now(
    ///             Intent::AddDigit(digit),
    ///             CalculatorState::new(),
    ///             CalculatorState::new().with_current(digit.to_string()),
    ///         ),
    ///         2,
    ///     );
    /// }
    ///
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.records()[0].intent, Intent::AddDigit('2'));
    /// ```
    pub fn record_bounded(&self, record: TransitionRecord, limit: usize) -> Self {
        self.clone().into_recorded(record, Some(limit))
    }

    /// Consume the history and append a record without copying the
    /// existing ones, keeping at most `limit` of the newest when given.
    pub fn into_recorded(mut self, record: TransitionRecord, limit: Option<usize>) -> Self {
        self.records.push(record);
        self.into_trimmed(limit)
    }

    /// Consume the history, dropping the oldest records beyond `limit`.
    pub fn into_trimmed(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            let excess = self.records.len().saturating_sub(limit);
            self.records.drain(..excess);
        }
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first record's `from` state followed by the `to` state
    /// of each record.
    pub fn get_path(&self) -> Vec<&CalculatorState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time from the first to the last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Results produced by evaluations, oldest first.
    pub fn results(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.is_evaluation())
            .filter_map(|record| record.to.current_operand())
            .collect()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
