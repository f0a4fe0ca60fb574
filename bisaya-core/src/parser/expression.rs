use crate::{lexer::prelude::{Spanned, Token}, utils::prelude::SrcSpan};
use super::{
    ast::{Expression, Identifier, Infix, Prefix, Primitive},
    error::{ParseError, ParseErrorType},
    parser::{binary_precedence, parse_error, prefix_precedence, Parse, Parser},
};

// operator stack entries, groups remember where they were opened
#[derive(Debug)]
enum StackOperator {
    Binary { token: Token, location: SrcSpan },
    Prefix { token: Token, start: u32 },
    Paren { start: u32 },
    Bracket { start: u32 },
}

impl StackOperator {
    fn precedence(&self) -> u8 {
        match self {
            Self::Binary { token, .. } => binary_precedence(token),
            Self::Prefix { token, .. } => prefix_precedence(token),
            Self::Paren { .. } | Self::Bracket { .. } => 0,
        }
    }
}

struct ExpressionStacks {
    operands: Vec<Expression>,
    operators: Vec<StackOperator>,
}

impl ExpressionStacks {
    fn new() -> Self {
        Self {
            operands: vec![],
            operators: vec![],
        }
    }

    fn is_empty(&self) -> bool {
        self.operands.is_empty() && self.operators.is_empty()
    }

    fn pop_operand(&mut self, location: SrcSpan) -> Result<Expression, ParseError> {
        match self.operands.pop() {
            Some(operand) => Ok(operand),
            None => parse_error(ParseErrorType::ExpectedValue { found: Token::Eof }, location)
        }
    }

    /// Pops the top operator and folds it with its operands.
    fn reduce(&mut self) -> Result<(), ParseError> {
        let expression = match self.operators.pop() {
            Some(StackOperator::Binary { token, location }) => {
                let right = self.pop_operand(location)?;
                let left = self.pop_operand(location)?;
                let location = left.location().to(right.location());

                Expression::Infix(Infix {
                    left: Box::new(left),
                    operator: token,
                    right: Box::new(right),
                    location
                })
            },
            Some(StackOperator::Prefix { token, start }) => {
                let location = SrcSpan { start, end: start };
                let expression = self.pop_operand(location)?;
                let end = expression.location().end;

                Expression::Prefix(Prefix {
                    operator: token,
                    expression: Box::new(expression),
                    location: SrcSpan { start, end }
                })
            },
            Some(StackOperator::Paren { start }) | Some(StackOperator::Bracket { start }) => {
                return parse_error(
                    ParseErrorType::MismatchedParentheses,
                    SrcSpan { start, end: start + 1 }
                )
            },
            None => return Ok(())
        };

        self.operands.push(expression);

        Ok(())
    }

    /// Reduces while the top of the stack binds at least as tight as `precedence`.
    fn reduce_while(&mut self, precedence: u8) -> Result<(), ParseError> {
        while let Some(top) = self.operators.last() {
            match top {
                StackOperator::Paren { .. } | StackOperator::Bracket { .. } => break,
                op if op.precedence() >= precedence => self.reduce()?,
                _ => break
            }
        }

        Ok(())
    }

    /// Reduces up to the group opened by `(` or `[` and wraps it.
    fn close_group(&mut self, closing: &Token, end: u32) -> Result<(), ParseError> {
        self.reduce_while(0)?;

        let start = match (self.operators.pop(), closing) {
            (Some(StackOperator::Paren { start }), Token::RParen) => start,
            (Some(StackOperator::Bracket { start }), Token::RSBracket) => start,
            (Some(StackOperator::Paren { start }), _) | (Some(StackOperator::Bracket { start }), _) => {
                return parse_error(
                    ParseErrorType::MismatchedParentheses,
                    SrcSpan { start, end }
                )
            },
            _ => return parse_error(
                ParseErrorType::MismatchedParentheses,
                SrcSpan { start: end - 1, end }
            )
        };

        let location = SrcSpan { start, end };
        let expression = self.pop_operand(location)?;

        self.operands.push(Expression::Nested {
            expression: Box::new(expression),
            location
        });

        Ok(())
    }
}

// expression -> <operand> { <binary_operator> <operand> }
// operand -> { "-" | "DILI" } ( <primitive> | <identifier> | "(" <expression> ")" | "[" <expression> "]" )
impl<T: Iterator<Item = Spanned>> Parse<T> for Expression {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let mut stacks = ExpressionStacks::new();
        let mut expect_operand = true;
        let mut depth = 0usize;

        loop {
            let token = parser.current().clone();
            let SrcSpan { start, end } = parser.current_span();
            let location = SrcSpan { start, end };

            if expect_operand {
                let operand = match token {
                    Token::Int(lexeme) | Token::Decimal(lexeme) => {
                        let value = match lexeme.parse::<f64>() {
                            Ok(value) => value,
                            Err(_) => return parse_error(
                                ParseErrorType::ExpectedValue { found: Token::Int(lexeme) },
                                location
                            )
                        };

                        Some(Expression::Primitive(Primitive::Number { value, lexeme, location }))
                    },
                    Token::Char(value) => Some(Expression::Primitive(Primitive::Char { value, location })),
                    Token::Oo => Some(Expression::Primitive(Primitive::Bool { value: true, location })),
                    // `t = DILI` followed by `x = 5` on the next line keeps `DILI` literal
                    Token::Dili if parser.peek().starts_operand()
                        && !(matches!(parser.peek(), Token::Ident(_)) && parser.peek_second().is_assign()) => {
                        stacks.operators.push(StackOperator::Prefix { token, start });
                        None
                    },
                    Token::Dili => Some(Expression::Primitive(Primitive::Bool { value: false, location })),
                    Token::Minus => {
                        stacks.operators.push(StackOperator::Prefix { token, start });
                        None
                    },
                    Token::Ident(value) => Some(Expression::Identifier(Identifier { value, location })),
                    Token::LParen => {
                        stacks.operators.push(StackOperator::Paren { start });
                        depth += 1;
                        None
                    },
                    Token::LSBracket => {
                        stacks.operators.push(StackOperator::Bracket { start });
                        depth += 1;
                        None
                    },
                    found => {
                        let error = if stacks.is_empty() {
                            ParseErrorType::EmptyExpression
                        } else {
                            ParseErrorType::ExpectedValue { found }
                        };

                        return parse_error(error, location)
                    }
                };

                parser.step();

                if let Some(operand) = operand {
                    stacks.operands.push(operand);
                    expect_operand = false;
                }

                continue;
            }

            match token {
                Token::RParen | Token::RSBracket if depth > 0 => {
                    stacks.close_group(&token, end)?;
                    depth -= 1;
                    parser.step();
                },
                token if token.is_binary_operator() => {
                    stacks.reduce_while(binary_precedence(&token))?;
                    stacks.operators.push(StackOperator::Binary { token, location });
                    expect_operand = true;
                    parser.step();
                },
                _ => break
            }
        }

        while !stacks.operators.is_empty() {
            stacks.reduce()?;
        }

        let location = parser.current_span();
        let expression = stacks.pop_operand(location)?;

        if !stacks.operands.is_empty() {
            return parse_error(ParseErrorType::MismatchedParentheses, expression.location());
        }

        Ok(expression)
    }
}
