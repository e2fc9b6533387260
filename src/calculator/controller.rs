//! Input handling: applies user actions to the calculator state and renders
//! the two display lines.
//!
//! The controller is the only writer of [`CalculatorState`]. Each action is
//! handled to completion before the next, and the display is a pure function
//! of the state, so the rendered lines can never go stale.

use tracing::debug;

use super::{Action, CalculatorState, Evaluation, Operator, evaluate, format_number};

/// The two text regions fully replaced after every action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Display {
    /// Current expression, e.g. `12+5`. Never empty: an empty left operand
    /// renders as `0`.
    pub expression: String,
    /// Live result while the second operand is being entered, or the error
    /// label for an invalid computation. Empty otherwise.
    pub result: String,
}

/// Owns the calculator state and applies user actions to it.
pub struct InputController {
    state: CalculatorState,
    error_label: String,
}

impl InputController {
    /// Create a controller with an empty state. `error_label` is the text
    /// shown on the result line for an invalid computation.
    pub fn new(error_label: impl Into<String>) -> Self {
        Self {
            state: CalculatorState::new(),
            error_label: error_label.into(),
        }
    }

    /// Dispatch a single user action.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "apply");
        match action {
            Action::Digit(d) => self.enter_digit(d),
            Action::Decimal => self.enter_decimal_point(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Operator(op) => self.choose_operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.state.reset(),
        }
    }

    /// Read access to the state, mainly for the presentation layer.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Render the expression and live/result lines from the current state.
    pub fn display(&self) -> Display {
        let mut expression = String::new();
        if self.state.left.is_empty() {
            expression.push('0');
        } else {
            expression.push_str(&self.state.left);
        }
        if let Some(op) = self.state.operator {
            expression.push(op.symbol());
        }
        expression.push_str(&self.state.right);

        let result = match self.state.operator {
            Some(op) if self.state.is_ready() => {
                match evaluate(&self.state.left, &self.state.right, op) {
                    Evaluation::Value(value) => format_number(value),
                    Evaluation::Invalid => self.error_label.clone(),
                }
            }
            _ => String::new(),
        };

        Display { expression, result }
    }

    /// Text the copy key places on the clipboard: the live result while a
    /// computation is pending, otherwise the operand on the display.
    pub fn clipboard_text(&self) -> Option<String> {
        let display = self.display();
        if !display.result.is_empty() {
            Some(display.result)
        } else if !self.state.left.is_empty() {
            Some(self.state.left.clone())
        } else {
            None
        }
    }

    /// The operand currently receiving input: left before an operator is
    /// chosen, right after.
    fn entry_field(&mut self) -> &mut String {
        if self.state.operator.is_none() {
            &mut self.state.left
        } else {
            &mut self.state.right
        }
    }

    fn enter_digit(&mut self, digit: u8) {
        let field = self.entry_field();
        // A lone zero is replaced, not extended, so no redundant leading zero.
        if field == "0" {
            field.clear();
        }
        field.push(char::from(b'0' + digit % 10));
    }

    fn enter_decimal_point(&mut self) {
        let field = self.entry_field();
        if !field.contains('.') {
            if field.is_empty() {
                field.push('0');
            }
            field.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        let field = self.entry_field();
        if let Some(positive) = field.strip_prefix('-') {
            *field = positive.to_string();
        } else {
            if field.is_empty() {
                field.push('0');
            }
            field.insert(0, '-');
        }
    }

    fn choose_operator(&mut self, operator: Operator) {
        // Collapse the pending computation first, so operators chain
        // without pressing equals in between.
        if self.state.is_ready()
            && let Some(current) = self.state.operator
        {
            let result = evaluate(&self.state.left, &self.state.right, current);
            self.state.left = result.accepted_text();
            self.state.right.clear();
        }
        // Overwrites any previous choice; left may still be empty and will
        // evaluate as zero later.
        self.state.operator = Some(operator);
    }

    fn equals(&mut self) {
        if !self.state.is_ready() {
            return;
        }
        let Some(op) = self.state.operator else {
            return;
        };
        let result = evaluate(&self.state.left, &self.state.right, op);
        self.state.left = result.accepted_text();
        self.state.right.clear();
        self.state.operator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> InputController {
        InputController::new("Error")
    }

    fn press(controller: &mut InputController, actions: &[Action]) {
        for &action in actions {
            controller.apply(action);
        }
    }

    #[test]
    fn digits_accumulate_into_left() {
        let mut c = controller();
        press(&mut c, &[Action::Digit(1), Action::Digit(2)]);
        assert_eq!(c.display().expression, "12");
        assert!(c.state().right.is_empty());
    }

    #[test]
    fn lone_zero_is_replaced() {
        let mut c = controller();
        press(&mut c, &[Action::Digit(0), Action::Digit(7)]);
        assert_eq!(c.state().left, "7");
    }

    #[test]
    fn digit_after_clear_goes_into_left() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Operator(Operator::Add),
                Action::Digit(2),
                Action::Clear,
                Action::Digit(9),
            ],
        );
        assert_eq!(c.state().left, "9");
        assert!(c.state().right.is_empty());
        assert!(c.state().operator.is_none());
    }

    #[test]
    fn at_most_one_decimal_point_per_field() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Decimal,
                Action::Decimal,
                Action::Digit(5),
                Action::Decimal,
            ],
        );
        assert_eq!(c.state().left, "1.5");

        press(
            &mut c,
            &[
                Action::Operator(Operator::Add),
                Action::Decimal,
                Action::Decimal,
            ],
        );
        assert_eq!(c.state().right, "0.");
    }

    #[test]
    fn decimal_point_seeds_zero_on_empty_field() {
        let mut c = controller();
        c.apply(Action::Decimal);
        assert_eq!(c.state().left, "0.");
    }

    #[test]
    fn toggle_sign_twice_is_identity() {
        let mut c = controller();
        press(&mut c, &[Action::Digit(4), Action::Digit(2)]);
        c.apply(Action::ToggleSign);
        assert_eq!(c.state().left, "-42");
        c.apply(Action::ToggleSign);
        assert_eq!(c.state().left, "42");
    }

    #[test]
    fn toggle_sign_on_empty_field_anchors_to_zero() {
        let mut c = controller();
        c.apply(Action::ToggleSign);
        assert_eq!(c.state().left, "-0");
    }

    #[test]
    fn live_result_while_entering_right_operand() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Digit(2),
                Action::Operator(Operator::Add),
                Action::Digit(5),
            ],
        );
        let display = c.display();
        assert_eq!(display.expression, "12+5");
        assert_eq!(display.result, "17");
    }

    #[test]
    fn repeated_operator_press_keeps_right_empty() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Digit(2),
                Action::Operator(Operator::Add),
                Action::Operator(Operator::Add),
            ],
        );
        assert_eq!(c.state().operator, Some(Operator::Add));
        assert!(c.state().right.is_empty());
        assert_eq!(c.display().expression, "12+");
    }

    #[test]
    fn equals_accepts_result_and_clears_live_line() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Digit(2),
                Action::Operator(Operator::Add),
                Action::Digit(5),
                Action::Equals,
            ],
        );
        let display = c.display();
        assert_eq!(display.expression, "17");
        assert_eq!(display.result, "");
        assert!(c.state().operator.is_none());
    }

    #[test]
    fn equals_is_a_no_op_without_a_full_expression() {
        let mut c = controller();
        c.apply(Action::Equals);
        assert_eq!(c.display().expression, "0");

        press(&mut c, &[Action::Digit(3), Action::Equals]);
        assert_eq!(c.state().left, "3");

        c.apply(Action::Operator(Operator::Multiply));
        c.apply(Action::Equals);
        assert_eq!(c.state().operator, Some(Operator::Multiply));
        assert_eq!(c.display().expression, "3×");
    }

    #[test]
    fn division_by_zero_shows_error_label_live() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(8),
                Action::Operator(Operator::Divide),
                Action::Digit(0),
            ],
        );
        let display = c.display();
        assert_eq!(display.expression, "8÷0");
        assert_eq!(display.result, "Error");
    }

    #[test]
    fn accepting_division_by_zero_coerces_to_zero() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(8),
                Action::Operator(Operator::Divide),
                Action::Digit(0),
                Action::Equals,
            ],
        );
        let display = c.display();
        assert_eq!(c.state().left, "0");
        assert_eq!(display.expression, "0");
        assert_eq!(display.result, "");
    }

    #[test]
    fn operators_chain_by_collapsing_the_pending_computation() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Operator(Operator::Add),
                Action::Digit(2),
                Action::Operator(Operator::Add),
            ],
        );
        assert_eq!(c.state().left, "3");
        assert!(c.state().right.is_empty());
        assert_eq!(c.display().expression, "3+");

        press(&mut c, &[Action::Digit(3), Action::Equals]);
        assert_eq!(c.display().expression, "6");
    }

    #[test]
    fn operator_replacement_changes_pending_operator() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(6),
                Action::Operator(Operator::Add),
                Action::Operator(Operator::Divide),
                Action::Digit(2),
                Action::Equals,
            ],
        );
        assert_eq!(c.state().left, "3");
    }

    #[test]
    fn operator_with_empty_left_is_permitted() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Operator(Operator::Subtract),
                Action::Digit(5),
            ],
        );
        // Empty left renders as 0 but stays empty in the state, so the
        // live line stays empty too.
        let display = c.display();
        assert_eq!(display.expression, "0−5");
        assert_eq!(display.result, "");
        assert!(c.state().left.is_empty());
    }

    #[test]
    fn clear_always_restores_the_initial_display() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(8),
                Action::Operator(Operator::Divide),
                Action::Digit(0),
                Action::Clear,
            ],
        );
        let display = c.display();
        assert_eq!(display.expression, "0");
        assert_eq!(display.result, "");
        assert_eq!(*c.state(), CalculatorState::new());
    }

    #[test]
    fn sign_toggle_on_right_operand_updates_live_result() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(9),
                Action::Operator(Operator::Add),
                Action::Digit(4),
                Action::ToggleSign,
            ],
        );
        let display = c.display();
        assert_eq!(display.expression, "9+-4");
        assert_eq!(display.result, "5");
    }

    #[test]
    fn decimal_arithmetic_renders_trimmed_result() {
        let mut c = controller();
        press(
            &mut c,
            &[
                Action::Digit(1),
                Action::Decimal,
                Action::Digit(5),
                Action::Operator(Operator::Multiply),
                Action::Digit(2),
                Action::Equals,
            ],
        );
        assert_eq!(c.display().expression, "3");
    }

    #[test]
    fn clipboard_text_prefers_the_live_result() {
        let mut c = controller();
        assert_eq!(c.clipboard_text(), None);

        press(&mut c, &[Action::Digit(1), Action::Digit(2)]);
        assert_eq!(c.clipboard_text(), Some("12".to_string()));

        press(&mut c, &[Action::Operator(Operator::Add), Action::Digit(5)]);
        assert_eq!(c.clipboard_text(), Some("17".to_string()));
    }
}
