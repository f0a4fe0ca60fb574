use std::fmt::Display;

use crate::lexer::prelude::Token;

pub const TRUE: Value = Value::Boolean { value: true };
pub const FALSE: Value = Value::Boolean { value: false };

pub const TRUE_LITERAL: &str = "OO";
pub const FALSE_LITERAL: &str = "DILI";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number {
        value: f64
    },
    Boolean {
        value: bool
    },
    Text {
        value: String
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number { value } => write!(f, "{}", format_number(*value)),
            Value::Boolean { value } => write!(f, "{}", format_boolean(*value)),
            Value::Text { value } => write!(f, "{value}")
        }
    }
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::Boolean { .. } => "boolean",
            Self::Text { .. } => "text"
        }
    }

    /// Formats the value the way `IPAKITA` shows a variable of `value_type`.
    pub fn display_as(&self, value_type: ValueType) -> String {
        match (value_type, self) {
            (ValueType::Numero, Value::Number { value }) => (value.trunc() as i64).to_string(),
            (ValueType::Tipik, Value::Number { value }) => format!("{value:?}"),
            _ => self.to_string()
        }
    }
}

/// Integral numbers print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

pub fn format_boolean(value: bool) -> &'static str {
    if value { TRUE_LITERAL } else { FALSE_LITERAL }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Numero,
    Tipik,
    Tinuod,
    Letra
}

impl ValueType {
    pub fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
            Token::Numero => Self::Numero,
            Token::Tipik => Self::Tipik,
            Token::Tinuod => Self::Tinuod,
            Token::Letra => Self::Letra,
            _ => return None
        })
    }

    pub fn default_value(&self) -> Value {
        match self {
            Self::Numero | Self::Tipik => Value::Number { value: 0.0 },
            Self::Tinuod => FALSE,
            Self::Letra => Value::Text { value: String::new() }
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value_type = match self {
            Self::Numero => "NUMERO",
            Self::Tipik => "TIPIK",
            Self::Tinuod => "TINUOD",
            Self::Letra => "LETRA"
        };

        write!(f, "{value_type}")
    }
}
