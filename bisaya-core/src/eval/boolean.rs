use std::cmp::Ordering;

use crate::{
    environment::prelude::{Environment, Value, FALSE_LITERAL, TRUE_LITERAL},
    lexer::prelude::Token,
    parser::prelude::{Expression, Infix, Prefix, Primitive},
};
use super::{
    error::{runtime_error, RuntimeError, RuntimeErrorType},
    eval_value, lookup,
    numeric::{coerce_to_number, eval_numeric},
};

/// Evaluates `expression` as a condition.
pub fn eval_boolean(expression: &Expression, env: &Environment) -> Result<bool, RuntimeError> {
    match expression {
        Expression::Primitive(primitive) => match primitive {
            Primitive::Bool { value, .. } => Ok(*value),
            Primitive::Number { value, .. } => Ok(*value != 0.0),
            Primitive::Char { value, location } => match value.as_str() {
                TRUE_LITERAL => Ok(true),
                FALSE_LITERAL => Ok(false),
                _ => runtime_error(
                    RuntimeErrorType::InvalidBooleanLiteral { value: value.clone() },
                    *location
                )
            },
        },
        Expression::Identifier(ident) => {
            let (_, value) = lookup(env, ident)?;

            Ok(truthy(value))
        },
        Expression::Nested { expression, .. } => eval_boolean(expression, env),
        Expression::Prefix(Prefix { operator: Token::Dili, expression, .. }) => {
            Ok(!eval_boolean(expression, env)?)
        },
        Expression::Prefix(_) => Ok(eval_numeric(expression, env)? != 0.0),
        Expression::Infix(infix) => match infix.operator {
            Token::Ug => {
                let left = eval_boolean(&infix.left, env)?;
                let right = eval_boolean(&infix.right, env)?;

                Ok(left && right)
            },
            Token::O => {
                let left = eval_boolean(&infix.left, env)?;
                let right = eval_boolean(&infix.right, env)?;

                Ok(left || right)
            },
            ref op if op.is_relational() => eval_relational(infix, env),
            _ => Ok(eval_numeric(expression, env)? != 0.0)
        },
    }
}

pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Number { value } => *value != 0.0,
        Value::Boolean { value } => *value,
        Value::Text { value } => !value.is_empty(),
    }
}

fn eval_relational(infix: &Infix, env: &Environment) -> Result<bool, RuntimeError> {
    let left = eval_value(&infix.left, env)?;
    let right = eval_value(&infix.right, env)?;

    let ordering = match (&left, &right) {
        (Value::Number { value: l }, Value::Number { value: r }) => l.partial_cmp(r),
        (Value::Boolean { value: l }, Value::Boolean { value: r }) => {
            return match infix.operator {
                Token::Equal => Ok(l == r),
                Token::NotEqual => Ok(l != r),
                _ => runtime_error(
                    RuntimeErrorType::InvalidBooleanComparison { op: infix.operator.as_literal() },
                    infix.location
                )
            }
        },
        _ => match (coerce_to_number(&left), coerce_to_number(&right)) {
            (Some(l), Some(r)) => l.partial_cmp(&r),
            _ => Some(left.to_string().cmp(&right.to_string()))
        }
    };

    // NaN compares unequal to everything
    let result = match (&infix.operator, ordering) {
        (Token::NotEqual, None) => true,
        (_, None) => false,
        (Token::Equal, Some(ord)) => ord == Ordering::Equal,
        (Token::NotEqual, Some(ord)) => ord != Ordering::Equal,
        (Token::LessThan, Some(ord)) => ord == Ordering::Less,
        (Token::LessThanOrEqual, Some(ord)) => ord != Ordering::Greater,
        (Token::GreaterThan, Some(ord)) => ord == Ordering::Greater,
        (Token::GreaterThanOrEqual, Some(ord)) => ord != Ordering::Less,
        _ => false
    };

    Ok(result)
}
