//! The calculator session: imperative shell around the pure reducer.
//!
//! A `Calculator` owns the single current `CalculatorState` and replaces it
//! wholesale on every intent. It also holds the theme, the display number
//! format and a bounded transition history.

pub mod builder;
pub mod error;

pub use builder::CalculatorBuilder;
pub use error::BuildError;

use crate::core::{transition, CalculatorState, History, Intent, TransitionRecord};
use crate::display::{DisplayLine, NumberFormat};
use crate::keypad::{keys_in, Key, KeyError};
use crate::theme::Theme;

/// Transition records kept by a session unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// A running calculator session.
///
/// # Example
///
/// ```rust
/// use keycalc::session::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.press_line("1200 × 3 =").unwrap();
///
/// assert_eq!(calculator.state().current_operand(), Some("3600"));
/// assert_eq!(calculator.display(), "3,600");
/// assert_eq!(calculator.history().results(), vec!["3600"]);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    pub(crate) state: CalculatorState,
    pub(crate) theme: Theme,
    pub(crate) format: NumberFormat,
    pub(crate) history: History,
    pub(crate) history_limit: Option<usize>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a session in the empty state with default settings.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::default(),
            theme: Theme::default(),
            format: NumberFormat::default(),
            history: History::new(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Apply an intent and return the new current state.
    ///
    /// Intents that leave the state unchanged are not recorded in history.
    pub fn dispatch(&mut self, intent: Intent) -> &CalculatorState {
        let next = transition(&self.state, &intent);

        if next == self.state {
            tracing::trace!(%intent, phase = self.state.phase().name(), "intent ignored");
            return &self.state;
        }

        tracing::debug!(
            %intent,
            from = self.state.phase().name(),
            to = next.phase().name(),
            "intent applied"
        );

        let previous = std::mem::replace(&mut self.state, next);
        let record = TransitionRecord::now(intent, previous, self.state.clone());
        self.history = std::mem::take(&mut self.history).into_recorded(record, self.history_limit);

        &self.state
    }

    /// Press a key.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        self.dispatch(key.intent())
    }

    /// Press the key with this label.
    pub fn press_label(&mut self, label: &str) -> Result<&CalculatorState, KeyError> {
        let key: Key = label.parse()?;
        Ok(self.press(key))
    }

    /// Press every key in a whitespace-separated line.
    ///
    /// Stops at the first unknown label; keys before it stay applied.
    pub fn press_line(&mut self, line: &str) -> Result<&CalculatorState, KeyError> {
        for key in keys_in(line) {
            match key {
                Ok(key) => {
                    self.press(key);
                }
                Err(err) => {
                    tracing::warn!(%err, line, "stopping at unknown key");
                    return Err(err);
                }
            }
        }
        Ok(&self.state)
    }

    /// Clear the state and forget the history.
    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
        self.history = History::new();
        tracing::debug!("session reset");
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to another theme preset.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            tracing::debug!(from = %self.theme, to = %theme, "theme changed");
        }
        self.theme = theme;
    }

    pub fn number_format(&self) -> NumberFormat {
        self.format
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Maximum number of records kept; `None` when unbounded.
    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// The formatted display line parts.
    pub fn display_line(&self) -> DisplayLine {
        DisplayLine::from_state(&self.state, &self.format)
    }

    /// The formatted display line as text.
    pub fn display(&self) -> String {
        self.display_line().to_string()
    }
}
