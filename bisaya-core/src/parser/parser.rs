use crate::{lexer::prelude::{tokenize, tokenize_stream, Spanned, Token}, utils::prelude::SrcSpan};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Parsed, Program};

pub trait Parse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError>;
}

pub struct Parser<T: Iterator<Item = Spanned>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,
    after_next_token: Option<Spanned>,
    /// End offset of the last consumed token.
    pub last_end: u32,

    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,
            after_next_token: None,
            last_end: 0,

            tokens: input,
        };

        parser.step();
        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();

        if let Some((_, _, end)) = &t {
            self.last_end = *end;
        }

        self.current_token = self.next_token.take();
        self.next_token = self.after_next_token.take();
        self.after_next_token = self.tokens.next();

        t
    }

    /// The token under the cursor, `Eof` once the stream is drained.
    pub fn current(&self) -> &Token {
        match &self.current_token {
            Some((_, token, _)) => token,
            None => &Token::Eof
        }
    }

    pub fn peek(&self) -> &Token {
        match &self.next_token {
            Some((_, token, _)) => token,
            None => &Token::Eof
        }
    }

    /// The token two positions after the cursor.
    pub fn peek_second(&self) -> &Token {
        match &self.after_next_token {
            Some((_, token, _)) => token,
            None => &Token::Eof
        }
    }

    /// Whether the cursor sits on an identifier that starts an assignment.
    pub fn at_assignment_target(&self) -> bool {
        matches!(self.current(), Token::Ident(_)) && self.peek().is_assign()
    }

    pub fn current_span(&self) -> SrcSpan {
        match &self.current_token {
            Some((start, _, end)) => SrcSpan { start: *start, end: *end },
            None => SrcSpan { start: self.last_end, end: self.last_end }
        }
    }

    pub fn parse(&mut self) -> Result<Parsed, ParseError> {
        let program = Program::parse(self)?;

        let trailing = match self.current() {
            Token::Eof => None,
            _ => {
                let start = self.current_span().start;

                while *self.current() != Token::Eof {
                    self.step();
                }

                Some(SrcSpan { start, end: self.last_end })
            }
        };

        Ok(Parsed {
            program,
            trailing
        })
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.take() {
            Some((start, tok, end)) if tok == token => {
                self.current_token = Some((start, tok, end));
                self.step();
                Ok((start, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                let error = match tok {
                    Token::Eof => ParseErrorType::UnexpectedEof {
                        expected: vec![token.as_literal()]
                    },
                    tok => ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec![token.as_literal()],
                    }
                };

                parse_error(error, SrcSpan { start, end })
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof { expected: vec![token.as_literal()] },
                self.current_span()
            )
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.take() {
            Some((start, Token::Ident(value), end)) => {
                self.current_token = Some((start, Token::Ident(value.clone()), end));
                self.step();
                Ok((start, value, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::ExpectedIdent { found: tok },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::ExpectedIdent { found: Token::Eof },
                self.current_span()
            )
        }
    }

    /// Consumes `=` or its `:=` alias.
    pub fn expect_assign(&mut self) -> Result<(u32, u32), ParseError> {
        if self.current().is_assign() {
            let span = self.current_span();
            self.step();

            return Ok((span.start, span.end));
        }

        self.expect_one(Token::Assign)
    }
}

/// Binding power of binary operators. Unary `DILI` binds at 5 and unary
/// minus at 8, see `prefix_precedence`.
pub fn binary_precedence(token: &Token) -> u8 {
    match token {
        Token::Mult | Token::Div | Token::Mod => 7,
        Token::Plus | Token::Minus => 6,
        Token::LessThan | Token::GreaterThan |
        Token::LessThanOrEqual | Token::GreaterThanOrEqual |
        Token::Equal | Token::NotEqual => 4,
        Token::Ug => 3,
        Token::O => 2,
        _ => 0,
    }
}

pub fn prefix_precedence(token: &Token) -> u8 {
    match token {
        Token::Minus => 8,
        Token::Dili => 5,
        _ => 0,
    }
}

pub fn parse_program(src: &str) -> Result<Parsed, ParseError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser::new(tokens.into_iter());
    let parsed = parser.parse()?;

    Ok(parsed)
}

pub fn parse_program_from_stream(stream: impl Iterator<Item = char>) -> Result<Parsed, ParseError> {
    let tokens = tokenize_stream(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    )?;
    let mut parser = Parser::new(tokens.into_iter());
    let parsed = parser.parse()?;

    Ok(parsed)
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
