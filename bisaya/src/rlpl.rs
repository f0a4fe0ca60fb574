use std::io::Write;

use bisaya_core::lexer::prelude::{Lexer, Token};

const PROMPT: &str = "bisaya> ";

/// Lexes one line at a time and prints every token with its span.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			println!();
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

				for res in lexer {
					match res {
						Ok((start, token, end)) => {
							if token == Token::Eof {
								break;
							}

							println!("{start:>4}..{end:<4} {token:?}");
						},
						Err(err) => {
							let (title, extra) = err.details();
							println!("[at {}] Lexical Error: {}", err.location, title);
							if !extra.is_empty() {
								println!("{}", extra.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}
}
