//! Two-operand arithmetic evaluation.
//!
//! The evaluator is a pure function over the operand texts held in the
//! calculator state: parse each side permissively, apply the operator, and
//! report division by zero as data rather than as an error.

use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map a key or display character to an operator.
    ///
    /// Accepts both the ASCII keys (`+ - * /`) and the glyphs the display
    /// uses (`− × ÷`), so replayed display output round-trips.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The glyph shown on the expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of evaluating the pending computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    /// A finite numeric result.
    Value(f64),
    /// Division by zero (or overflow to a non-finite value). Not an error:
    /// the caller renders a marker and the calculator keeps running.
    Invalid,
}

impl Evaluation {
    /// Check whether this is the invalid marker.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Text form of an accepted result, as fed back into the left operand.
    ///
    /// `Invalid` coerces to `"0"` so the calculator never gets stuck on a
    /// bad computation.
    pub fn accepted_text(&self) -> String {
        match self {
            Self::Value(value) => format_number(*value),
            Self::Invalid => "0".to_string(),
        }
    }
}

/// Evaluate `left op right` over the operand texts.
///
/// Operands that do not parse to a finite number (including the empty
/// string) count as zero. Division by zero yields [`Evaluation::Invalid`];
/// every other combination yields a value.
pub fn evaluate(left: &str, right: &str, operator: Operator) -> Evaluation {
    let a = parse_operand(left);
    let b = parse_operand(right);

    let value = match operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Evaluation::Invalid;
            }
            a / b
        }
    };

    // Finite operands can still overflow to infinity.
    if value.is_finite() {
        Evaluation::Value(value)
    } else {
        Evaluation::Invalid
    }
}

fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Format a result for display and re-entry.
///
/// Integer values print without a decimal part; fractional values are
/// trimmed of trailing zeros. No thousand separators: the text becomes the
/// next left operand and has to parse back.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
