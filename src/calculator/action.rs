//! Tagged user actions consumed by the input controller.

use super::Operator;

/// A discrete user action on the calculator.
///
/// Produced by the presentation layer (the key map, or `--keys` replay) and
/// dispatched through the input controller's `apply`. Everything the user
/// can do to the calculator is one of these variants; keys that do not map
/// to an action (quit, copy) never reach the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// Toggle the sign of the operand being entered.
    ToggleSign,
    /// Select a binary operator.
    Operator(Operator),
    /// Accept the pending computation.
    Equals,
    /// Reset the calculator to its initial state.
    Clear,
}
