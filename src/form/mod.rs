//! Configuration form: three validated fields with cyclic focus.
//!
//! The form owns the raw text of each field and the single focused index.
//! It turns into a [`SimulationConfig`] on a successful [`ConfigForm::submit`].

mod validate;

pub use validate::{
    validate_chances, validate_cost, validate_interval, FieldKind, FieldValue, Validator,
    DEFAULT_COST, DEFAULT_INTERVAL_MS,
};

use crate::error::ValidationError;
use crate::render::{Line, Span, Theme};
use crate::sim::SimulationConfig;
use crate::widget::{Edit, TextInput};
use tracing::warn;

/// Direction of a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Next field, wrapping from the last to the first.
    Forward,
    /// Previous field, wrapping from the first to the last.
    Backward,
}

/// Result of pressing Enter in the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirm {
    /// Focus moved to the next field.
    Advanced,
    /// All fields validated.
    Accepted(SimulationConfig),
    /// A field failed validation; the error is now displayed.
    Rejected(ValidationError),
}

/// One labelled input of the form.
#[derive(Debug, Clone)]
struct Field {
    kind: FieldKind,
    input: TextInput,
}

/// The configuration form.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    fields: [Field; 3],
    focused: usize,
    error: Option<ValidationError>,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigForm {
    /// Create an empty form with the chances field focused.
    pub fn new() -> Self {
        let fields = FieldKind::ALL.map(|kind| Field {
            kind,
            input: TextInput::new(kind.placeholder()),
        });
        let mut form = Self {
            fields,
            focused: 0,
            error: None,
        };
        form.fields[0].input.set_focused(true);
        form
    }

    /// Index of the focused field, always in `0..3`.
    pub const fn focused_index(&self) -> usize {
        self.focused
    }

    /// Kind of the focused field.
    pub const fn focused_kind(&self) -> FieldKind {
        FieldKind::ALL[self.focused]
    }

    /// The input widget for `kind`.
    pub fn field(&self, kind: FieldKind) -> &TextInput {
        &self.fields[Self::index_of(kind)].input
    }

    /// Error currently displayed, if any.
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Whether the last field has focus, where Enter submits.
    pub const fn on_last_field(&self) -> bool {
        self.focused == FieldKind::ALL.len() - 1
    }

    fn index_of(kind: FieldKind) -> usize {
        match kind {
            FieldKind::Chances => 0,
            FieldKind::Interval => 1,
            FieldKind::Cost => 2,
        }
    }

    /// Replace the focused field's text.
    pub fn submit_field(&mut self, text: &str) {
        self.fields[self.focused].input.set_content(text);
        self.error = None;
    }

    /// Apply an editing operation to the focused field.
    ///
    /// Any change to the text clears the displayed error.
    pub fn edit(&mut self, edit: Edit) {
        if self.fields[self.focused].input.apply(edit) {
            self.error = None;
        }
    }

    /// Move focus cyclically. No validation happens here.
    pub fn advance_focus(&mut self, direction: Direction) {
        let len = self.fields.len();
        self.fields[self.focused].input.set_focused(false);
        self.focused = match direction {
            Direction::Forward => (self.focused + 1) % len,
            Direction::Backward => (self.focused + len - 1) % len,
        };
        self.fields[self.focused].input.set_focused(true);
    }

    /// Validate one field's current text.
    pub fn validate(&self, kind: FieldKind) -> Result<FieldValue, ValidationError> {
        (kind.validator())(self.field(kind).content())
    }

    /// Validate all fields in order and build the configuration.
    ///
    /// The first failure is stored for display and returned.
    pub fn submit(&mut self) -> Result<SimulationConfig, ValidationError> {
        match self.build() {
            Ok(config) => {
                self.error = None;
                Ok(config)
            }
            Err(err) => {
                warn!(field = %err.field(), error = %err, "configuration rejected");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn build(&self) -> Result<SimulationConfig, ValidationError> {
        let chances = match self.validate(FieldKind::Chances)? {
            FieldValue::Integer(n) => n,
            // Chances is required, so it never validates to anything else.
            FieldValue::Empty | FieldValue::Real(_) => {
                return Err(ValidationError::ChancesRequired)
            }
        };
        let interval_ms = match self.validate(FieldKind::Interval)? {
            FieldValue::Integer(ms) => ms,
            FieldValue::Empty | FieldValue::Real(_) => DEFAULT_INTERVAL_MS,
        };
        let cost = match self.validate(FieldKind::Cost)? {
            FieldValue::Real(cost) => cost,
            FieldValue::Empty | FieldValue::Integer(_) => DEFAULT_COST,
        };
        Ok(SimulationConfig::from_millis(chances, interval_ms, cost))
    }

    /// Enter key: advance on a non-last field, submit on the last one.
    pub fn confirm(&mut self) -> Confirm {
        if !self.on_last_field() {
            self.advance_focus(Direction::Forward);
            return Confirm::Advanced;
        }
        match self.submit() {
            Ok(config) => Confirm::Accepted(config),
            Err(err) => Confirm::Rejected(err),
        }
    }

    /// Render the form: error line, then each labelled field, then the hint.
    pub fn view(&self, theme: &Theme, width: usize) -> Vec<Line> {
        let mut lines = Vec::with_capacity(12);

        match &self.error {
            Some(err) => lines.push(Line::styled(err.to_string(), theme.error).truncated(width)),
            None => lines.push(Line::empty()),
        }
        lines.push(Line::empty());

        for field in &self.fields {
            let marker = if field.input.is_focused() { "> " } else { "  " };
            lines.push(
                Line::from_spans(vec![
                    Span::styled(marker, theme.input_label),
                    Span::styled(field.kind.label(), theme.input_label),
                ])
                .truncated(width),
            );
            let indent = Span::raw("  ");
            let input = field.input.view(theme, width.saturating_sub(2));
            let mut spans = vec![indent];
            spans.extend(input.spans);
            lines.push(Line::from_spans(spans));
            lines.push(Line::empty());
        }

        lines.push(Line::styled("  Continue ->", theme.hint).truncated(width));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn type_text(form: &mut ConfigForm, text: &str) {
        for c in text.chars() {
            form.edit(Edit::Insert(c));
        }
    }

    #[test]
    fn test_new_form_focuses_chances() {
        let form = ConfigForm::new();
        assert_eq!(form.focused_index(), 0);
        assert_eq!(form.focused_kind(), FieldKind::Chances);
        assert!(form.field(FieldKind::Chances).is_focused());
        assert!(!form.field(FieldKind::Cost).is_focused());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = ConfigForm::new();
        form.advance_focus(Direction::Backward);
        assert_eq!(form.focused_kind(), FieldKind::Cost);
        form.advance_focus(Direction::Forward);
        assert_eq!(form.focused_kind(), FieldKind::Chances);
    }

    #[test]
    fn test_submit_field_targets_focused() {
        let mut form = ConfigForm::new();
        form.advance_focus(Direction::Forward);
        form.submit_field("250");
        assert_eq!(form.field(FieldKind::Interval).content(), "250");
        assert_eq!(form.field(FieldKind::Chances).content(), "");
    }

    #[test]
    fn test_submit_applies_defaults() {
        let mut form = ConfigForm::new();
        form.submit_field("25_000_000");
        let config = form.submit().unwrap();
        assert_eq!(config.chances(), 25_000_000);
        assert_eq!(config.interval(), Duration::from_millis(DEFAULT_INTERVAL_MS));
        assert!((config.cost_per_ticket() - DEFAULT_COST).abs() < f64::EPSILON);
    }

    #[test]
    fn test_submit_reports_first_failure() {
        let mut form = ConfigForm::new();
        form.advance_focus(Direction::Backward);
        form.submit_field("abc");

        let err = form.submit().unwrap_err();
        assert_eq!(err, ValidationError::ChancesRequired);
        assert_eq!(form.error(), Some(&ValidationError::ChancesRequired));

        form.advance_focus(Direction::Forward);
        form.submit_field("10");
        let err = form.submit().unwrap_err();
        assert_eq!(err.field(), FieldKind::Cost);
    }

    #[test]
    fn test_edit_clears_error() {
        let mut form = ConfigForm::new();
        assert!(form.submit().is_err());
        assert!(form.error().is_some());

        // Cursor movement alone keeps the message.
        form.edit(Edit::Left);
        assert!(form.error().is_some());

        form.edit(Edit::Insert('7'));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_confirm_walks_then_submits() {
        let mut form = ConfigForm::new();
        type_text(&mut form, "10");
        assert_eq!(form.confirm(), Confirm::Advanced);
        type_text(&mut form, "0");
        assert_eq!(form.confirm(), Confirm::Advanced);
        type_text(&mut form, "1");

        match form.confirm() {
            Confirm::Accepted(config) => {
                assert_eq!(config, SimulationConfig::from_millis(10, 0, 1.0));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn test_confirm_rejection_stays_on_last_field() {
        let mut form = ConfigForm::new();
        form.advance_focus(Direction::Backward);
        assert!(matches!(form.confirm(), Confirm::Rejected(ValidationError::ChancesRequired)));
        assert_eq!(form.focused_kind(), FieldKind::Cost);
    }

    #[test]
    fn test_view_lists_fields_and_error() {
        let theme = Theme::default();
        let mut form = ConfigForm::new();
        let text: Vec<String> = form.view(&theme, 40).iter().map(Line::text).collect();
        assert_eq!(text[0], "");
        assert!(text.contains(&"> Chances".to_string()));
        assert!(text.contains(&"  Interval".to_string()));
        assert!(text.contains(&"  25_000_000".to_string()));
        assert_eq!(text.last().map(String::as_str), Some("  Continue ->"));

        let _ = form.submit();
        let text: Vec<String> = form.view(&theme, 40).iter().map(Line::text).collect();
        assert_eq!(text[0], "chances number is required");
    }

    proptest! {
        #[test]
        fn test_three_forward_steps_are_identity(start in 0usize..3, rounds in 0usize..10) {
            let mut form = ConfigForm::new();
            for _ in 0..start {
                form.advance_focus(Direction::Forward);
            }
            let before = form.focused_index();
            for _ in 0..rounds * 3 {
                form.advance_focus(Direction::Forward);
            }
            prop_assert_eq!(form.focused_index(), before);

            form.advance_focus(Direction::Forward);
            form.advance_focus(Direction::Backward);
            prop_assert_eq!(form.focused_index(), before);
            prop_assert!(form.focused_index() < 3);
        }
    }
}
