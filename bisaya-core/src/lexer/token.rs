#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // (<letter>|_){<letter>|<digit>|_}
    Ident(String),
    // {<digit>}
    Int(String),
    // {<digit>}.{<digit>}
    Decimal(String),
    // "..." or 'x'
    Char(String),

    // Boolean literals
    Oo, // OO
    Dili, // DILI, also the unary not

    // Reserved words
    Sugod, // SUGOD
    Katapusan, // KATAPUSAN
    Mugna, // MUGNA
    Ipakita, // IPAKITA
    Dawat, // DAWAT
    Kung, // KUNG
    Wala, // WALA
    Pundok, // PUNDOK
    Alang, // ALANG
    Sa, // SA

    // Data types
    Numero, // NUMERO
    Tipik, // TIPIK
    Tinuod, // TINUOD
    Letra, // LETRA

    // Logical operators
    Ug, // UG
    O, // O

    // Relational operators
    Equal, // ==
    NotEqual, // <>
    LessThan, // <
    LessThanOrEqual, // <=
    GreaterThan, // >
    GreaterThanOrEqual, // >=

    // Arithmetic operators
    Plus, // +
    Minus, // -
    Mult, // *
    Div, // /
    Mod, // %

    Increment, // ++
    Decrement, // --

    // Assignment
    Assign, // =
    ColonAssign, // :=

    // Print joiners and symbols
    Ampersand, // &
    Dollar, // $
    Hash, // #
    Dot, // .

    // Delimiters
    Comma, // ,
    Colon, // :
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    LSBracket, // [
    RSBracket, // ]

    Eof,
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        matches!(self,
            Token::Sugod
            | Token::Katapusan
            | Token::Mugna
            | Token::Ipakita
            | Token::Dawat
            | Token::Kung
            | Token::Wala
            | Token::Pundok
            | Token::Alang
            | Token::Sa
            | Token::Numero
            | Token::Tipik
            | Token::Tinuod
            | Token::Letra
        )
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Mult | Token::Div | Token::Mod)
    }

    pub fn is_relational(&self) -> bool {
        matches!(self,
            Token::Equal
            | Token::NotEqual
            | Token::LessThan
            | Token::LessThanOrEqual
            | Token::GreaterThan
            | Token::GreaterThanOrEqual
        )
    }

    pub fn is_binary_operator(&self) -> bool {
        self.is_arithmetic() || self.is_relational() || matches!(self, Token::Ug | Token::O)
    }

    /// Tokens that may begin an operand of an expression.
    pub fn starts_operand(&self) -> bool {
        matches!(self,
            Token::Ident(_)
            | Token::Int(_)
            | Token::Decimal(_)
            | Token::Char(_)
            | Token::Oo
            | Token::Dili
            | Token::LParen
            | Token::LSBracket
            | Token::Minus
        )
    }

    pub fn is_assign(&self) -> bool {
        matches!(self, Token::Assign | Token::ColonAssign)
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value)
            | Token::Int(value)
            | Token::Decimal(value)
            | Token::Char(value) => value.clone(),

            Token::Oo => "OO".to_string(),
            Token::Dili => "DILI".to_string(),

            Token::Sugod => "SUGOD".to_string(),
            Token::Katapusan => "KATAPUSAN".to_string(),
            Token::Mugna => "MUGNA".to_string(),
            Token::Ipakita => "IPAKITA".to_string(),
            Token::Dawat => "DAWAT".to_string(),
            Token::Kung => "KUNG".to_string(),
            Token::Wala => "WALA".to_string(),
            Token::Pundok => "PUNDOK".to_string(),
            Token::Alang => "ALANG".to_string(),
            Token::Sa => "SA".to_string(),

            Token::Numero => "NUMERO".to_string(),
            Token::Tipik => "TIPIK".to_string(),
            Token::Tinuod => "TINUOD".to_string(),
            Token::Letra => "LETRA".to_string(),

            Token::Ug => "UG".to_string(),
            Token::O => "O".to_string(),

            Token::Equal => "==".to_string(),
            Token::NotEqual => "<>".to_string(),
            Token::LessThan => "<".to_string(),
            Token::LessThanOrEqual => "<=".to_string(),
            Token::GreaterThan => ">".to_string(),
            Token::GreaterThanOrEqual => ">=".to_string(),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Mult => "*".to_string(),
            Token::Div => "/".to_string(),
            Token::Mod => "%".to_string(),
            Token::Increment => "++".to_string(),
            Token::Decrement => "--".to_string(),

            Token::Assign => "=".to_string(),
            Token::ColonAssign => ":=".to_string(),

            Token::Ampersand => "&".to_string(),
            Token::Dollar => "$".to_string(),
            Token::Hash => "#".to_string(),
            Token::Dot => ".".to_string(),

            Token::Comma => ",".to_string(),
            Token::Colon => ":".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::LSBracket => "[".to_string(),
            Token::RSBracket => "]".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}
