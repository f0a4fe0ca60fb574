use std::io::{BufRead, Write};

use crate::{
    environment::prelude::{Environment, Value, ValueType},
    lexer::prelude::Token,
    parser::prelude::{
        Assignment, Conditional, Declaration, Expression, Identifier, Input, Loop, Print, PrintItem,
        Program, Statement,
    },
    utils::prelude::{SourceWarningEmitter, SrcSpan},
};
use super::{
    boolean::eval_boolean,
    character::eval_character,
    error::{runtime_error, RuntimeError, RuntimeErrorType, Warning},
    display_value, lookup,
    numeric::eval_numeric,
};

/// Tree-walking executor. Owns the variable store and the program's
/// standard input and output.
pub struct Interpreter<'a, R: BufRead, W: Write> {
    env: Environment,
    input: R,
    output: W,
    warnings: &'a SourceWarningEmitter,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    pub fn new(input: R, output: W, warnings: &'a SourceWarningEmitter) -> Self {
        Self {
            env: Environment::new(),
            input,
            output,
            warnings,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn execute(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.execute_block(&program.statements)?;

        self.output.flush()
            .map_err(|err| RuntimeError::from((err, program.location)))
    }

    fn execute_block(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute_statement(statement)?;
        }

        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match statement {
            Statement::Declaration(declaration) => self.declare(declaration),
            Statement::Assignment(assignment) => self.assign(assignment),
            Statement::Print(print) => self.print(print),
            Statement::Input(input) => self.read(input),
            Statement::Conditional(conditional) => self.branch(conditional),
            Statement::Loop(loop_) => self.repeat(loop_),
        }
    }

    /// Evaluates `expression` with the evaluator matching `value_type`.
    fn evaluate_as(&self, value_type: ValueType, expression: &Expression) -> Result<Value, RuntimeError> {
        let value = match value_type {
            ValueType::Numero | ValueType::Tipik => Value::Number {
                value: eval_numeric(expression, &self.env)?
            },
            ValueType::Tinuod => Value::Boolean {
                value: eval_boolean(expression, &self.env)?
            },
            ValueType::Letra => Value::Text {
                value: eval_character(expression, &self.env)?
            },
        };

        Ok(value)
    }

    fn declare(&mut self, declaration: &Declaration) -> Result<(), RuntimeError> {
        let value_type = declaration.value_type;

        for variable in &declaration.variables {
            let value = match &variable.initializer {
                Some(initializer) => self.evaluate_as(value_type, initializer)?,
                None => value_type.default_value()
            };

            let name = &variable.name;

            if let Some(previous) = self.env.declare(name.value.clone(), value_type, value) {
                self.warnings.emit(Warning::Redeclaration {
                    variable: name.value.clone(),
                    previous,
                    current: value_type,
                    location: name.location
                });
            }
        }

        Ok(())
    }

    fn assign(&mut self, assignment: &Assignment) -> Result<(), RuntimeError> {
        let mut targets = assignment.targets.iter().rev();

        let Some(innermost) = targets.next() else {
            return Ok(());
        };

        let (inner_type, _) = lookup(&self.env, innermost)?;
        let value = self.evaluate_as(inner_type, &assignment.value)?;

        self.env.set(&innermost.value, value.clone());

        let (mut inner, mut inner_type) = (innermost, inner_type);

        for outer in targets {
            let (outer_type, _) = lookup(&self.env, outer)?;

            if outer_type != inner_type {
                return runtime_error(
                    RuntimeErrorType::TypeMismatch {
                        outer: outer.value.clone(),
                        outer_type,
                        inner: inner.value.clone(),
                        inner_type
                    },
                    outer.location.to(inner.location)
                );
            }

            self.env.set(&outer.value, value.clone());

            (inner, inner_type) = (outer, outer_type);
        }

        Ok(())
    }

    fn print(&mut self, print: &Print) -> Result<(), RuntimeError> {
        let mut line = String::new();

        for item in &print.items {
            match item {
                PrintItem::Text { value, .. } => line.push_str(value),
                PrintItem::Variable(ident) => {
                    let (value_type, value) = lookup(&self.env, ident)?;

                    line.push_str(&value.display_as(value_type));
                },
                PrintItem::Expression(expression) => {
                    line.push_str(&display_value(expression, &self.env)?);
                },
                PrintItem::LineBreak { location } => {
                    self.write_line(&line, *location)?;
                    line.clear();
                }
            }
        }

        if !line.is_empty() {
            self.write_line(&line, print.location)?;
        }

        Ok(())
    }

    fn write_line(&mut self, line: &str, location: SrcSpan) -> Result<(), RuntimeError> {
        writeln!(self.output, "{line}")
            .and_then(|_| self.output.flush())
            .map_err(|err| RuntimeError::from((err, location)))
    }

    fn read(&mut self, input: &Input) -> Result<(), RuntimeError> {
        let mut types = vec![];

        for ident in &input.identifiers {
            let (value_type, _) = lookup(&self.env, ident)?;
            types.push(value_type);
        }

        let mut line = String::new();

        let read = self.input.read_line(&mut line)
            .map_err(|err| RuntimeError::from((err, input.location)))?;

        let line = line.trim_end_matches(['\n', '\r']);

        // an empty line is one empty field, end of input is none
        let fields = match read {
            0 => vec![],
            _ => line.split(',').map(str::trim).collect::<Vec<_>>()
        };

        if fields.len() < input.identifiers.len() {
            return runtime_error(
                RuntimeErrorType::InsufficientInput {
                    expected: input.identifiers.len(),
                    got: fields.len()
                },
                input.location
            );
        }

        for ((ident, value_type), field) in input.identifiers.iter().zip(types).zip(fields) {
            let value = parse_input(ident, value_type, field)?;

            self.env.set(&ident.value, value);
        }

        Ok(())
    }

    fn branch(&mut self, conditional: &Conditional) -> Result<(), RuntimeError> {
        for branch in &conditional.branches {
            if eval_boolean(&branch.condition, &self.env)? {
                return self.execute_block(&branch.body.statements);
            }
        }

        match &conditional.alternative {
            Some(alternative) => self.execute_block(&alternative.statements),
            None => Ok(())
        }
    }

    fn repeat(&mut self, loop_: &Loop) -> Result<(), RuntimeError> {
        self.assign(&loop_.initializer)?;

        while eval_boolean(&loop_.condition, &self.env)? {
            self.execute_block(&loop_.body.statements)?;

            let variable = &loop_.step.variable;

            let current = match lookup(&self.env, variable)? {
                (_, Value::Number { value }) => *value,
                (_, value) => return runtime_error(
                    RuntimeErrorType::NonNumericLoopVariable {
                        name: variable.value.clone(),
                        found: value.kind()
                    },
                    variable.location
                )
            };

            let next = match loop_.step.operator {
                Token::Decrement => current - 1.0,
                _ => current + 1.0
            };

            self.env.set(&variable.value, Value::Number { value: next });
        }

        Ok(())
    }
}

fn parse_input(ident: &Identifier, value_type: ValueType, field: &str) -> Result<Value, RuntimeError> {
    let invalid_format = || RuntimeError {
        error: RuntimeErrorType::InvalidInputFormat {
            name: ident.value.clone(),
            value_type,
            value: field.to_string()
        },
        span: ident.location
    };

    let value = match value_type {
        ValueType::Numero => Value::Number {
            value: field.parse::<i64>().map_err(|_| invalid_format())? as f64
        },
        ValueType::Tipik => Value::Number {
            value: field.parse::<f64>().map_err(|_| invalid_format())?
        },
        ValueType::Tinuod if field.eq_ignore_ascii_case("OO") => Value::Boolean { value: true },
        ValueType::Tinuod if field.eq_ignore_ascii_case("DILI") => Value::Boolean { value: false },
        ValueType::Tinuod => return runtime_error(
            RuntimeErrorType::InvalidBooleanInput { value: field.to_string() },
            ident.location
        ),
        ValueType::Letra => Value::Text { value: field.to_string() },
    };

    Ok(value)
}
