use crate::{
    environment::prelude::{Environment, Value},
    lexer::prelude::Token,
    parser::prelude::{Expression, Infix, Prefix, Primitive},
    utils::prelude::SrcSpan
};
use super::{
    boolean::eval_boolean,
    error::{runtime_error, RuntimeError, RuntimeErrorType},
    lookup,
};

/// Evaluates `expression` in the numeric domain.
pub fn eval_numeric(expression: &Expression, env: &Environment) -> Result<f64, RuntimeError> {
    match expression {
        Expression::Primitive(primitive) => match primitive {
            Primitive::Number { value, .. } => Ok(*value),
            Primitive::Bool { value, .. } => Ok(bool_to_number(*value)),
            Primitive::Char { value, location } => text_to_number(value, *location),
        },
        Expression::Identifier(ident) => {
            let (_, value) = lookup(env, ident)?;

            value_to_number(value, ident.location)
        },
        Expression::Nested { expression, .. } => eval_numeric(expression, env),
        Expression::Prefix(Prefix { operator: Token::Minus, expression, .. }) => {
            Ok(-eval_numeric(expression, env)?)
        },
        Expression::Prefix(_) => Ok(bool_to_number(eval_boolean(expression, env)?)),
        Expression::Infix(infix) if infix.operator.is_arithmetic() => eval_arithmetic(infix, env),
        Expression::Infix(_) => Ok(bool_to_number(eval_boolean(expression, env)?)),
    }
}

fn eval_arithmetic(infix: &Infix, env: &Environment) -> Result<f64, RuntimeError> {
    let left = eval_numeric(&infix.left, env)?;
    let right = eval_numeric(&infix.right, env)?;

    let value = match infix.operator {
        Token::Plus => left + right,
        Token::Minus => left - right,
        Token::Mult => left * right,
        Token::Div | Token::Mod if right == 0.0 => return runtime_error(
            RuntimeErrorType::DivisionByZero { op: infix.operator.as_literal() },
            infix.location
        ),
        Token::Div => left / right,
        Token::Mod => left % right,
        _ => unreachable!("only arithmetic operators reach eval_arithmetic")
    };

    Ok(value)
}

pub fn bool_to_number(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Numeric view of a value, `None` for text that does not look like a number.
pub fn coerce_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number { value } => Some(*value),
        Value::Boolean { value } => Some(bool_to_number(*value)),
        Value::Text { value } => value.trim().parse::<f64>().ok(),
    }
}

pub fn value_to_number(value: &Value, location: SrcSpan) -> Result<f64, RuntimeError> {
    match coerce_to_number(value) {
        Some(number) => Ok(number),
        None => runtime_error(
            RuntimeErrorType::CannotConvertToNumber { value: value.to_string() },
            location
        )
    }
}

fn text_to_number(text: &str, location: SrcSpan) -> Result<f64, RuntimeError> {
    match text.trim().parse::<f64>() {
        Ok(number) => Ok(number),
        Err(_) => runtime_error(
            RuntimeErrorType::CannotConvertToNumber { value: text.to_string() },
            location
        )
    }
}
