//! Calculator state: the two operand texts and the pending operator.

use super::Operator;

/// The whole state of the calculator, owned by the input controller and
/// mutated in place, one action at a time.
///
/// `right` is only ever non-empty while `operator` is set: entry of the
/// second operand is gated on choosing an operator first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    /// First operand text; empty means not yet entered.
    pub left: String,
    /// Second operand text; empty means not yet entered.
    pub right: String,
    /// Pending operator; `None` while the left operand is being entered.
    pub operator: Option<Operator>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once both operands and the operator are present, i.e. the
    /// pending computation can be evaluated.
    pub fn is_ready(&self) -> bool {
        !self.left.is_empty() && self.operator.is_some() && !self.right.is_empty()
    }

    /// Return to the initial configuration in place.
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.operator = None;
    }
}
