use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedSugod,
    ExpectedKatapusan,
    ExpectedIdent { found: Token },
    ExpectedType { found: Token },
    ExpectedStep { found: Token },
    ExpectedValue { found: Token },
    EmptyExpression,
    MismatchedParentheses,
    MisplacedProgramMarker { token: Token },
    UnexpectedEof {
        expected: Vec<String>,
    },
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        Self {
            span: error.location,
            error: ParseErrorType::LexError { error },
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Int(_) | Token::Decimal(_) => "a Number".to_string(),
        Token::Char(_) => "a Text literal".to_string(),
        Token::Ident(_) => "an Identifier".to_string(),
        Token::Eof => "the end of file".to_string(),
        _ if token.is_reserved_word() => format!("the keyword `{}`", token.as_literal()),
        _ => format!("`{}`", token.as_literal())
    }
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedSugod => (
                "Expected `SUGOD`",
                vec!["Every program starts with `SUGOD`".to_string()]
            ),
            ParseErrorType::ExpectedKatapusan => (
                "Expected `KATAPUSAN`",
                vec!["Every program ends with `KATAPUSAN`".to_string()]
            ),
            ParseErrorType::ExpectedIdent { found } => (
                "Expected identifier",
                vec![format!("Found {}", describe(found))]
            ),
            ParseErrorType::ExpectedType { found } => (
                "Expected type",
                vec![
                    format!("Found {}, expected one of: ", describe(found)),
                    "- NUMERO".to_string(),
                    "- TIPIK".to_string(),
                    "- TINUOD".to_string(),
                    "- LETRA".to_string(),
                ]
            ),
            ParseErrorType::ExpectedStep { found } => (
                "Expected loop step",
                vec![format!("Found {}, expected `++` or `--`", describe(found))]
            ),
            ParseErrorType::ExpectedValue { found } => (
                "Expected value",
                vec![format!("Found {}, expected a literal, an identifier or `(`", describe(found))]
            ),
            ParseErrorType::EmptyExpression => ("Empty expression", vec![]),
            ParseErrorType::MismatchedParentheses => ("Mismatched parentheses", vec![]),
            ParseErrorType::MisplacedProgramMarker { token } => (
                "Misplaced program marker",
                vec![format!("`{}` may only appear once, around the whole program", token.as_literal())]
            ),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let messages = std::iter::once(format!("Found {}, expected one of: ", describe(token)))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnexpectedEof { expected } => {
                let messages = std::iter::once("Expected one of: ".to_string())
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Unexpected end of file", messages)
            },
            ParseErrorType::LexError { error } => error.details()
        }
    }
}
