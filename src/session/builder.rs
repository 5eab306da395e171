//! Builder for constructing calculator sessions.

use crate::config::CalculatorConfig;
use crate::core::{CalculatorState, History};
use crate::display::NumberFormat;
use crate::session::error::BuildError;
use crate::session::{Calculator, DEFAULT_HISTORY_LIMIT};
use crate::theme::Theme;
use crate::validation::violations;

/// Builder for constructing a `Calculator` with a fluent API.
#[derive(Debug, Clone)]
pub struct CalculatorBuilder {
    initial: Option<CalculatorState>,
    theme: Option<Theme>,
    format: Option<NumberFormat>,
    history_limit: Option<usize>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self {
            initial: None,
            theme: None,
            format: None,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from this state instead of the empty record.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Keep at most `limit` transition records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every transition record for the life of the session.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Apply every setting from a configuration.
    pub fn config(self, config: &CalculatorConfig) -> Self {
        self.theme(config.theme)
            .number_format(config.number_format)
            .history_limit(config.history_limit)
    }

    /// Build the session.
    /// Returns an error if the initial state breaks an invariant.
    pub fn build(self) -> Result<Calculator, BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let state = self.initial.unwrap_or_default();
        let found = violations(&state);
        if !found.is_empty() {
            return Err(BuildError::InvalidInitialState(found));
        }

        Ok(Calculator {
            state,
            theme: self.theme.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            history: History::new(),
            history_limit: self.history_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn defaults_build_empty_session() {
        let calculator = CalculatorBuilder::new().build().unwrap();

        assert!(calculator.state().is_empty());
        assert_eq!(calculator.theme(), Theme::Theme1);
        assert!(calculator.history().is_empty());
        assert_eq!(calculator.history_limit(), Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn fluent_api_builds_session() {
        let calculator = CalculatorBuilder::new()
            .initial(CalculatorState::new().with_previous("4").with_operation(Operation::Add))
            .theme(Theme::Theme3)
            .number_format(NumberFormat::new('.', ','))
            .history_limit(10)
            .build()
            .unwrap();

        assert_eq!(calculator.state().previous_operand(), Some("4"));
        assert_eq!(calculator.theme(), Theme::Theme3);
        assert_eq!(calculator.display(), "4+");
    }

    #[test]
    fn builder_rejects_invalid_initial_state() {
        let result = CalculatorBuilder::new()
            .initial(CalculatorState::new().with_operation(Operation::Add).with_current("1.1.1"))
            .build();

        match result {
            Err(BuildError::InvalidInitialState(found)) => assert_eq!(found.len(), 2),
            other => panic!("Expected InvalidInitialState, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_result_without_overwrite() {
        let result = CalculatorBuilder::new()
            .initial(CalculatorState::new().with_current("Infinity"))
            .build();
        assert!(matches!(result, Err(BuildError::InvalidInitialState(_))));

        let mut calculator = CalculatorBuilder::new()
            .initial(CalculatorState::new().with_current("Infinity").with_overwrite(true))
            .build()
            .unwrap();
        calculator.dispatch(crate::core::Intent::AddDigit('5'));
        assert_eq!(calculator.state().current_operand(), Some("5"));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = CalculatorBuilder::new().history_limit(0).build();
        assert!(matches!(result, Err(BuildError::ZeroHistoryLimit)));
    }

    #[test]
    fn config_applies_settings() {
        let config = CalculatorConfig {
            theme: Theme::Theme2,
            number_format: NumberFormat::new(' ', '.'),
            history_limit: 5,
        };

        let calculator = CalculatorBuilder::new().config(&config).build().unwrap();
        assert_eq!(calculator.theme(), Theme::Theme2);
        assert_eq!(calculator.number_format(), NumberFormat::new(' ', '.'));
        assert_eq!(calculator.history_limit(), Some(5));
    }
}
