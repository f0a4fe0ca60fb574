use thiserror::Error;

use crate::{environment::prelude::ValueType, utils::prelude::SrcSpan};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorType {
    #[error("variable `{name}` is not declared")]
    UndefinedVariable {
        name: String
    },
    #[error("cannot assign `{inner}` ({inner_type}) to `{outer}` ({outer_type})")]
    TypeMismatch {
        outer: String,
        outer_type: ValueType,
        inner: String,
        inner_type: ValueType
    },
    #[error("cannot convert `{value}` to a number")]
    CannotConvertToNumber {
        value: String
    },
    #[error("`{value}` is not a boolean literal, expected \"OO\" or \"DILI\"")]
    InvalidBooleanLiteral {
        value: String
    },
    #[error("a LETRA value must be a character literal or a LETRA variable")]
    InvalidCharacterExpression,
    #[error("`{name}` holds a {found} value, expected text")]
    ExpectedCharacterValue {
        name: String,
        found: &'static str
    },
    #[error("operator `{op}` cannot compare two booleans, only `==` and `<>` can")]
    InvalidBooleanComparison {
        op: String
    },
    #[error("division by zero in `{op}`")]
    DivisionByZero {
        op: String
    },
    #[error("expected {expected} comma separated value(s), got {got}")]
    InsufficientInput {
        expected: usize,
        got: usize
    },
    #[error("`{value}` is not a valid {value_type} value for `{name}`")]
    InvalidInputFormat {
        name: String,
        value_type: ValueType,
        value: String
    },
    #[error("`{value}` is not a boolean, expected OO or DILI")]
    InvalidBooleanInput {
        value: String
    },
    #[error("loop variable `{name}` holds a {found} value, expected a number")]
    NonNumericLoopVariable {
        name: String,
        found: &'static str
    },
    #[error("input/output failed: {kind}")]
    Io {
        kind: std::io::ErrorKind
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub span: SrcSpan
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        let title = match &self.error {
            RuntimeErrorType::UndefinedVariable { .. } => "Undefined variable",
            RuntimeErrorType::TypeMismatch { .. } => "Type mismatch",
            RuntimeErrorType::CannotConvertToNumber { .. } => "Cannot convert to number",
            RuntimeErrorType::InvalidBooleanLiteral { .. } => "Invalid boolean literal",
            RuntimeErrorType::InvalidCharacterExpression => "Invalid character expression",
            RuntimeErrorType::ExpectedCharacterValue { .. } => "Expected character value",
            RuntimeErrorType::InvalidBooleanComparison { .. } => "Invalid operator for boolean comparison",
            RuntimeErrorType::DivisionByZero { .. } => "Division by zero",
            RuntimeErrorType::InsufficientInput { .. } => "Insufficient input",
            RuntimeErrorType::InvalidInputFormat { .. } => "Invalid input format",
            RuntimeErrorType::InvalidBooleanInput { .. } => "Invalid boolean input",
            RuntimeErrorType::NonNumericLoopVariable { .. } => "Non-numeric loop variable",
            RuntimeErrorType::Io { .. } => "Input/output failure",
        };

        (title, vec![self.error.to_string()])
    }
}

impl From<(std::io::Error, SrcSpan)> for RuntimeError {
    fn from((err, span): (std::io::Error, SrcSpan)) -> Self {
        Self {
            error: RuntimeErrorType::Io { kind: err.kind() },
            span
        }
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, span: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, span })
}

/// Non fatal findings, reported through the warning emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    Redeclaration {
        variable: String,
        previous: ValueType,
        current: ValueType,
        location: SrcSpan
    },
    UnreachableCode {
        location: SrcSpan
    },
}
