use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedToken { tok: char },
    UnterminatedString,
    UnterminatedCharacter,
    MalformedCharacter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedToken { tok } => {
                ("Unexpected character", vec![format!("`{tok}` is not part of the language")])
            },
            LexicalErrorType::UnterminatedString => {
                ("Unterminated string literal", vec!["Add a closing `\"`".to_string()])
            },
            LexicalErrorType::UnterminatedCharacter => {
                ("Unterminated character literal", vec!["Add a closing `'`".to_string()])
            },
            LexicalErrorType::MalformedCharacter => {
                (
                    "Malformed character literal",
                    vec!["A character literal holds exactly one character, use `\"` for text".to_string()]
                )
            }
        }
    }
}
