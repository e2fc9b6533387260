//! Calculator core: state, evaluation, and input handling.
//!
//! This module provides functionality to:
//! - Hold the calculator state (two operand texts and a pending operator)
//! - Apply tagged user actions and render the two display lines
//! - Evaluate the pending computation, treating division by zero as data
//! - Copy results to the clipboard

mod action;
mod clipboard;
mod controller;
mod evaluation;
mod state;

pub use action::Action;
pub use clipboard::copy_to_clipboard;
pub use controller::{Display, InputController};
pub use evaluation::{Evaluation, Operator, evaluate, format_number};
pub use state::CalculatorState;
