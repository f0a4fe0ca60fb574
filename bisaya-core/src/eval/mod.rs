pub mod error;
pub mod numeric;
pub mod boolean;
pub mod character;
pub mod interpreter;

pub mod prelude {
    pub use super::{
        error::*,
        numeric::*,
        boolean::*,
        character::*,
        interpreter::*,
        eval_value,
        display_value
    };
}


use crate::{
    environment::prelude::{Environment, Value, ValueType},
    lexer::prelude::Token,
    parser::prelude::{Expression, Identifier, Primitive},
};
use error::{runtime_error, RuntimeError, RuntimeErrorType};

/// Evaluates `expression` without a target type, picking the domain from the
/// shape of the tree: arithmetic yields numbers, logic and comparisons yield
/// booleans, leaves keep their own value.
pub fn eval_value(expression: &Expression, env: &Environment) -> Result<Value, RuntimeError> {
    let value = match expression {
        Expression::Primitive(primitive) => match primitive {
            Primitive::Number { value, .. } => Value::Number { value: *value },
            Primitive::Bool { value, .. } => Value::Boolean { value: *value },
            Primitive::Char { value, .. } => Value::Text { value: value.clone() },
        },
        Expression::Identifier(ident) => lookup(env, ident)?.1.clone(),
        Expression::Nested { expression, .. } => eval_value(expression, env)?,
        Expression::Prefix(prefix) if prefix.operator == Token::Minus => {
            Value::Number { value: numeric::eval_numeric(expression, env)? }
        },
        Expression::Infix(infix) if infix.operator.is_arithmetic() => {
            Value::Number { value: numeric::eval_numeric(expression, env)? }
        },
        Expression::Prefix(_) | Expression::Infix(_) => {
            Value::Boolean { value: boolean::eval_boolean(expression, env)? }
        },
    };

    Ok(value)
}

/// Renders `expression` for printing. A variable, grouped or not, keeps the
/// formatting of its declared type.
pub fn display_value(expression: &Expression, env: &Environment) -> Result<String, RuntimeError> {
    match expression {
        Expression::Identifier(ident) => {
            let (value_type, value) = lookup(env, ident)?;

            Ok(value.display_as(value_type))
        },
        Expression::Nested { expression, .. } => display_value(expression, env),
        expression => Ok(eval_value(expression, env)?.to_string())
    }
}

pub(crate) fn lookup<'a>(env: &'a Environment, ident: &Identifier) -> Result<(ValueType, &'a Value), RuntimeError> {
    match env.lookup(&ident.value) {
        Some(found) => Ok(found),
        None => runtime_error(
            RuntimeErrorType::UndefinedVariable { name: ident.value.clone() },
            ident.location
        )
    }
}
