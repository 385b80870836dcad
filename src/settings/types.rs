//! Core types for the settings registry

use std::fmt;

/// A strongly-typed option value. The kind tag and the payload travel
/// together, so a value of the wrong kind is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Int(i64),
    Bool(bool),
    String(String),
}

impl OptionValue {
    /// The kind of this value, for diagnostics.
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::String(_) => OptionKind::String,
        }
    }
}

/// The kind of an option, fixed when the option is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Int,
    Bool,
    String,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Int => write!(f, "integer"),
            OptionKind::Bool => write!(f, "boolean"),
            OptionKind::String => write!(f, "string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_value() {
        assert_eq!(OptionValue::Int(4000).kind(), OptionKind::Int);
        assert_eq!(OptionValue::Bool(true).kind(), OptionKind::Bool);
        assert_eq!(OptionValue::String("x".into()).kind(), OptionKind::String);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OptionKind::Int.to_string(), "integer");
        assert_eq!(OptionKind::Bool.to_string(), "boolean");
        assert_eq!(OptionKind::String.to_string(), "string");
    }
}
