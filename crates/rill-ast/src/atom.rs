//! Literal constants carried by the AST.

use smol_str::SmolStr;
use std::fmt;

/// A constant value scanned out of the source text.
///
/// `Literal` expression nodes hold one of these behind an `Rc`, so the
/// evaluator can hand the same allocation around without copying. This is a
/// parse-time artifact only; runtime objects (classes, instances, functions)
/// live in the interpreter, not here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Atom {
    Nil,
    Bool(bool),
    Number(f64),
    String(SmolStr),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Nil => write!(f, "nil"),
            Atom::Bool(value) => write!(f, "{}", value),
            Atom::Number(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    write!(f, "{:.0}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Atom::String(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for Atom {
    fn from(value: f64) -> Self {
        Atom::Number(value)
    }
}

impl From<bool> for Atom {
    fn from(value: bool) -> Self {
        Atom::Bool(value)
    }
}

impl From<&str> for Atom {
    fn from(value: &str) -> Self {
        Atom::String(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(Atom::Number(42.0).to_string(), "42");
        assert_eq!(Atom::Number(2.5).to_string(), "2.5");
        assert_eq!(Atom::Number(-0.0).to_string(), "-0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Atom::Nil.to_string(), "nil");
        assert_eq!(Atom::Bool(true).to_string(), "true");
        assert_eq!(Atom::String("hi".into()).to_string(), "hi");
    }
}
