use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

pub fn str_to_keyword(word: &str) -> Option<Token> {
	Some(match word {
		"SUGOD" => Token::Sugod,
		"KATAPUSAN" => Token::Katapusan,
		"MUGNA" => Token::Mugna,
		"IPAKITA" => Token::Ipakita,
		"DAWAT" => Token::Dawat,
		"KUNG" => Token::Kung,
		"WALA" => Token::Wala,
		"PUNDOK" => Token::Pundok,
		"ALANG" => Token::Alang,
		"SA" => Token::Sa,

		"NUMERO" => Token::Numero,
		"TIPIK" => Token::Tipik,
		"TINUOD" => Token::Tinuod,
		"LETRA" => Token::Letra,

		"OO" => Token::Oo,
		"DILI" => Token::Dili,

		"UG" => Token::Ug,
		"O" => Token::O,

		_ => return None
	})
}

/// Folds typographic quotes into the plain ones the lexer understands.
fn normalize_quote(ch: char) -> char {
	match ch {
		'\u{2018}' | '\u{2019}' => '\'',
		'\u{201C}' | '\u{201D}' => '"',
		ch => ch
	}
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	end_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,

	// end of the last identifier, `i--` is a decrement and not a comment
	last_ident_end: Option<u32>,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			next_position: 0,
			end_position: 0,
			ch: None,
			next_ch: None,
			input,

			last_ident_end: None,
		};

		lexer.next_char();
		lexer.next_char();

		lexer
	}

	pub fn next_token(&mut self) -> LexResult {
		let spanned = self.lex_token()?;

		self.last_ident_end = match &spanned {
			(_, Token::Ident(_), end) => Some(*end),
			_ => None
		};

		Ok(spanned)
	}

	fn lex_token(&mut self) -> LexResult {
		loop {
			let span = match self.ch {
				Some(ch) => match ch {
					'\n' | ' ' | '\t' | '\x0C' | '\r' => {
						self.next_char();
						continue;
					},
					'-' if self.next_ch == Some('-') => {
						if self.last_ident_end == Some(self.position) {
							self.eat_two_chars(Token::Decrement)
						} else {
							self.skip_comment();
							continue;
						}
					},
					'-' => self.eat_one_char(Token::Minus),
					'+' if self.next_ch == Some('+') => self.eat_two_chars(Token::Increment),
					'+' => self.eat_one_char(Token::Plus),
					'*' => self.eat_one_char(Token::Mult),
					'/' => self.eat_one_char(Token::Div),
					'%' => self.eat_one_char(Token::Mod),
					'<' if self.next_ch == Some('=') => self.eat_two_chars(Token::LessThanOrEqual),
					'<' if self.next_ch == Some('>') => self.eat_two_chars(Token::NotEqual),
					'<' => self.eat_one_char(Token::LessThan),
					'>' if self.next_ch == Some('=') => self.eat_two_chars(Token::GreaterThanOrEqual),
					'>' => self.eat_one_char(Token::GreaterThan),
					'=' if self.next_ch == Some('=') => self.eat_two_chars(Token::Equal),
					'=' => self.eat_one_char(Token::Assign),
					':' if self.next_ch == Some('=') => self.eat_two_chars(Token::ColonAssign),
					':' => self.eat_one_char(Token::Colon),
					'&' => self.eat_one_char(Token::Ampersand),
					'$' => self.eat_one_char(Token::Dollar),
					'#' => self.eat_one_char(Token::Hash),
					'.' => self.eat_one_char(Token::Dot),
					',' => self.eat_one_char(Token::Comma),
					'(' => self.eat_one_char(Token::LParen),
					')' => self.eat_one_char(Token::RParen),
					'{' => self.eat_one_char(Token::LBrace),
					'}' => self.eat_one_char(Token::RBrace),
					'[' => self.eat_one_char(Token::LSBracket),
					']' => self.eat_one_char(Token::RSBracket),
					'"' => return self.lex_string(),
					'\'' => return self.lex_character(),
					'0'..='9' => return Ok(self.lex_number()),
					c if c.is_alphabetic() || c == '_' => return Ok(self.lex_ident()),
					c => {
						let location = self.position;
						return Err(LexicalError {
							error: LexicalErrorType::UnrecognizedToken { tok: c },
							location: SrcSpan {
								start: location,
								end: self.next_position,
							},
						});
					}
				},
				None => self.eat_one_char(Token::Eof)
			};

			return Ok(span);
		}
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;
				self.end_position = pos + ch.len_utf8() as u32;

				Some(normalize_quote(ch))
			},
			None => {
				self.position = self.next_position;
				self.next_position = self.end_position;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn eat_two_chars(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch {
			if !(ch.is_alphanumeric() || ch == '_') {
				break;
			}

			ident.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		match str_to_keyword(&ident) {
			Some(tok) => (start_pos, tok, end_pos),
			None => (start_pos, Token::Ident(ident), end_pos)
		}
	}

	fn lex_digits(&mut self, value: &mut String) {
		while let Some(ch) = self.ch {
			if !ch.is_ascii_digit() {
				break;
			}

			value.push(ch);
			self.next_char();
		}
	}

	fn lex_number(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut value = String::new();

		self.lex_digits(&mut value);

		let is_decimal = self.ch == Some('.')
			&& self.next_ch.is_some_and(|ch| ch.is_ascii_digit());

		let token = if is_decimal {
			value.push('.');
			self.next_char();
			self.lex_digits(&mut value);

			Token::Decimal(value)
		} else {
			Token::Int(value)
		};

		(start_pos, token, self.position)
	}

	fn lex_string(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		self.next_char(); // skip quote

		loop {
			match self.ch {
				Some('"') => break,
				Some(ch) => {
					value.push(ch);
					self.next_char();
				},
				None => return Err(LexicalError {
					error: LexicalErrorType::UnterminatedString,
					location: SrcSpan::from(start_pos, self.position)
				})
			}
		}

		self.next_char(); // skip quote

		Ok((start_pos, Token::Char(value), self.position))
	}

	fn lex_character(&mut self) -> LexResult {
		let start_pos = self.position;

		self.next_char(); // skip quote

		let value = match self.next_char() {
			Some(ch) => ch,
			None => return Err(LexicalError {
				error: LexicalErrorType::UnterminatedCharacter,
				location: SrcSpan::from(start_pos, self.position)
			})
		};

		match self.ch {
			Some('\'') => {
				self.next_char();

				Ok((start_pos, Token::Char(value.to_string()), self.position))
			},
			Some(_) => Err(LexicalError {
				error: LexicalErrorType::MalformedCharacter,
				location: SrcSpan::from(start_pos, self.next_position)
			}),
			None => Err(LexicalError {
				error: LexicalErrorType::UnterminatedCharacter,
				location: SrcSpan::from(start_pos, self.position)
			})
		}
	}

	fn skip_comment(&mut self) {
		while let Some(ch) = self.ch {
			if ch == '\n' {
				break;
			}

			self.next_char();
		}
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();

		Some(token)
	}
}

/// Lexes the whole stream, stopping at the first lexical error.
pub fn tokenize_stream(stream: impl Iterator<Item = (u32, char)>) -> Result<Vec<Spanned>, LexicalError> {
	let mut lexer = Lexer::new(stream);
	let mut tokens = vec![];

	loop {
		let spanned = lexer.next_token()?;
		let is_eof = spanned.1 == Token::Eof;

		tokens.push(spanned);

		if is_eof {
			return Ok(tokens);
		}
	}
}

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexicalError> {
	tokenize_stream(src.char_indices().map(|(i, c)| (i as u32, c)))
}
