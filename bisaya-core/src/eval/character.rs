use crate::{
    environment::prelude::{Environment, Value},
    parser::prelude::{Expression, Primitive},
};
use super::{
    error::{runtime_error, RuntimeError, RuntimeErrorType},
    lookup,
};

/// A `LETRA` value is a text literal or another text variable, nothing is computed.
pub fn eval_character(expression: &Expression, env: &Environment) -> Result<String, RuntimeError> {
    match expression {
        Expression::Primitive(Primitive::Char { value, .. }) => Ok(value.clone()),
        Expression::Identifier(ident) => match lookup(env, ident)? {
            (_, Value::Text { value }) => Ok(value.clone()),
            (_, value) => runtime_error(
                RuntimeErrorType::ExpectedCharacterValue {
                    name: ident.value.clone(),
                    found: value.kind()
                },
                ident.location
            )
        },
        Expression::Nested { expression, .. } => eval_character(expression, env),
        _ => runtime_error(RuntimeErrorType::InvalidCharacterExpression, expression.location())
    }
}
