use std::fmt::Display;

use crate::{
    environment::prelude::ValueType,
    lexer::prelude::{Spanned, Token},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

#[derive(Debug)]
pub struct Parsed {
    pub program: Program,
    /// Tokens found after `KATAPUSAN`, never executed.
    pub trailing: Option<SrcSpan>,
}

// program -> SUGOD { <statement> } KATAPUSAN
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Program {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = match parser.current() {
            Token::Sugod => parser.expect_one(Token::Sugod)?.0,
            _ => return parse_error(ParseErrorType::ExpectedSugod, parser.current_span())
        };

        let mut statements = vec![];

        loop {
            match parser.current() {
                Token::Katapusan => break,
                Token::Eof => return parse_error(
                    ParseErrorType::ExpectedKatapusan,
                    parser.current_span()
                ),
                _ => statements.push(Statement::parse(parser)?)
            }
        }

        let (_, end) = parser.expect_one(Token::Katapusan)?;

        Ok(Self {
            statements,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SUGOD")?;

        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }

        write!(f, "KATAPUSAN")
    }
}

// statement -> <declaration> | <assignment> | <print> | <input> | <conditional> | <loop>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
    Print(Print),
    Input(Input),
    Conditional(Conditional),
    Loop(Loop),
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Statement {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let res = match parser.current() {
            Token::Mugna => Self::Declaration(Declaration::parse(parser)?),
            Token::Ident(_) => Self::Assignment(Assignment::parse(parser)?),
            Token::Ipakita => Self::Print(Print::parse(parser)?),
            Token::Dawat => Self::Input(Input::parse(parser)?),
            Token::Kung => Self::Conditional(Conditional::parse(parser)?),
            Token::Alang => Self::Loop(Loop::parse(parser)?),
            token @ (Token::Sugod | Token::Katapusan) => return parse_error(
                ParseErrorType::MisplacedProgramMarker { token: token.clone() },
                parser.current_span()
            ),
            Token::Eof => return parse_error(
                ParseErrorType::UnexpectedEof { expected: vec!["a statement".to_string()] },
                parser.current_span()
            ),
            token => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec![
                        "MUGNA".to_string(),
                        "IPAKITA".to_string(),
                        "DAWAT".to_string(),
                        "KUNG".to_string(),
                        "ALANG SA".to_string(),
                        "an assignment".to_string(),
                    ]
                },
                parser.current_span()
            )
        };

        Ok(res)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declaration(declaration) => write!(f, "{declaration}"),
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Print(print) => write!(f, "{print}"),
            Self::Input(input) => write!(f, "{input}"),
            Self::Conditional(conditional) => write!(f, "{conditional}"),
            Self::Loop(loop_) => write!(f, "{loop_}")
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Declaration(declaration) => declaration.location,
            Self::Assignment(assignment) => assignment.location,
            Self::Print(print) => print.location,
            Self::Input(input) => input.location,
            Self::Conditional(conditional) => conditional.location,
            Self::Loop(loop_) => loop_.location
        }
    }
}

// block -> PUNDOK { { <statement> } }
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Block {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Pundok)?;
        parser.expect_one(Token::LBrace)?;

        let mut statements = vec![];

        while !matches!(parser.current(), Token::RBrace | Token::Eof) {
            statements.push(Statement::parse(parser)?);
        }

        let (_, end) = parser.expect_one(Token::RBrace)?;

        Ok(Self {
            statements,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PUNDOK {{")?;

        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }

        write!(f, "}}")
    }
}

// declaration -> MUGNA <type> <identifier> [= <expression>] {, <identifier> [= <expression>] }
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub value_type: ValueType,
    pub variables: Vec<DeclaredVariable>,
    pub location: SrcSpan
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredVariable {
    pub name: Identifier,
    pub initializer: Option<Expression>
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Declaration {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Mugna)?;

        let value_type = match ValueType::from_token(parser.current()) {
            Some(value_type) => {
                parser.step();
                value_type
            },
            None => return parse_error(
                ParseErrorType::ExpectedType { found: parser.current().clone() },
                parser.current_span()
            )
        };

        let mut variables = vec![];

        loop {
            let name = Identifier::from(parser.expect_ident()?);

            let initializer = if parser.current().is_assign() {
                parser.step();
                Some(Expression::parse(parser)?)
            } else {
                None
            };

            variables.push(DeclaredVariable { name, initializer });

            if *parser.current() != Token::Comma {
                break;
            }

            parser.step();
        }

        Ok(Self {
            value_type,
            variables,
            location: SrcSpan { start, end: parser.last_end }
        })
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variables = self.variables.iter()
            .map(|variable| match &variable.initializer {
                Some(initializer) => format!("{} = {}", variable.name, initializer),
                None => variable.name.to_string()
            })
            .collect::<Vec<String>>();

        write!(f, "MUGNA {} {}", self.value_type, variables.join(", "))
    }
}

// assignment -> <identifier> = { <identifier> = } <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Outermost target first.
    pub targets: Vec<Identifier>,
    pub value: Expression,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Assignment {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let ident = parser.expect_ident()?;
        let start = ident.0;

        parser.expect_assign()?;

        let mut targets = vec![Identifier::from(ident)];

        while parser.at_assignment_target() {
            targets.push(parser.expect_ident()?.into());
            parser.expect_assign()?;
        }

        let value = Expression::parse(parser)?;
        let end = value.location().end;

        Ok(Self {
            targets,
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for target in &self.targets {
            write!(f, "{target} = ")?;
        }

        write!(f, "{}", self.value)
    }
}

// print -> IPAKITA : { <print_item> }
#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub items: Vec<PrintItem>,
    pub location: SrcSpan
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrintItem {
    /// Emitted as is, no evaluation.
    Text {
        value: String,
        location: SrcSpan
    },
    Variable(Identifier),
    Expression(Expression),
    LineBreak {
        location: SrcSpan
    },
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Print {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Ipakita)?;
        parser.expect_one(Token::Colon)?;

        let mut items = vec![];
        let mut escaped = false;

        loop {
            let token = parser.current().clone();
            let location = parser.current_span();

            match token {
                Token::Eof | Token::RBrace => break,
                token if token.is_reserved_word() => break,
                Token::Ident(_) if !escaped && parser.peek().is_assign() => break,
                Token::LSBracket if escaped => {
                    items.push(PrintItem::Text { value: "[".to_string(), location });
                    parser.step();
                },
                Token::LSBracket => {
                    escaped = true;
                    parser.step();
                },
                Token::RSBracket if escaped => {
                    escaped = false;
                    parser.step();
                },
                token if escaped => {
                    items.push(PrintItem::Text { value: token.as_literal(), location });
                    parser.step();
                },
                Token::Ampersand => parser.step(),
                Token::Dollar => {
                    items.push(PrintItem::LineBreak { location });
                    parser.step();
                },
                Token::Ident(_) | Token::Int(_) | Token::Decimal(_) if parser.peek().is_arithmetic() => {
                    items.push(PrintItem::Expression(Expression::parse(parser)?));
                },
                Token::LParen => {
                    items.push(PrintItem::Expression(Expression::parse(parser)?));
                },
                Token::Ident(value) => {
                    items.push(PrintItem::Variable(Identifier { value, location }));
                    parser.step();
                },
                token => {
                    items.push(PrintItem::Text { value: token.as_literal(), location });
                    parser.step();
                }
            }
        }

        Ok(Self {
            items,
            location: SrcSpan { start, end: parser.last_end }
        })
    }
}

impl Display for PrintItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text { value, .. } if value == "\"" => write!(f, "'\"'"),
            Self::Text { value, .. } => write!(f, "\"{value}\""),
            Self::Variable(ident) => write!(f, "{ident}"),
            Self::Expression(expression) => write!(f, "{expression}"),
            Self::LineBreak { .. } => write!(f, "$")
        }
    }
}

impl Display for Print {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self.items.iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>();

        write!(f, "IPAKITA: {}", items.join(" & "))
    }
}

// input -> DAWAT : <identifier> {, <identifier> }
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub identifiers: Vec<Identifier>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Input {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Dawat)?;
        parser.expect_one(Token::Colon)?;

        let mut identifiers = vec![Identifier::from(parser.expect_ident()?)];

        while *parser.current() == Token::Comma {
            parser.step();
            identifiers.push(parser.expect_ident()?.into());
        }

        Ok(Self {
            identifiers,
            location: SrcSpan { start, end: parser.last_end }
        })
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let identifiers = self.identifiers.iter()
            .map(|ident| ident.value.clone())
            .collect::<Vec<String>>();

        write!(f, "DAWAT: {}", identifiers.join(", "))
    }
}

// conditional -> KUNG <branch> { KUNG DILI <branch> } [ KUNG WALA <block> ]
// branch -> ( <expression> ) <block>
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub branches: Vec<Branch>,
    pub alternative: Option<Block>,
    pub location: SrcSpan
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub condition: Expression,
    pub body: Block
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Branch {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        parser.expect_one(Token::LParen)?;
        let condition = Expression::parse(parser)?;
        parser.expect_one(Token::RParen)?;

        let body = Block::parse(parser)?;

        Ok(Self {
            condition,
            body
        })
    }
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Conditional {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Kung)?;

        let mut branches = vec![Branch::parse(parser)?];
        let mut alternative = None;

        while *parser.current() == Token::Kung {
            match parser.peek() {
                Token::Dili => {
                    parser.step();
                    parser.step();
                    branches.push(Branch::parse(parser)?);
                },
                Token::Wala => {
                    parser.step();
                    parser.step();
                    alternative = Some(Block::parse(parser)?);
                    break;
                },
                _ => break
            }
        }

        Ok(Self {
            branches,
            alternative,
            location: SrcSpan { start, end: parser.last_end }
        })
    }
}

impl Display for Conditional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, branch) in self.branches.iter().enumerate() {
            if idx > 0 {
                write!(f, "\nKUNG DILI ")?;
            } else {
                write!(f, "KUNG ")?;
            }

            write!(f, "({}) {}", branch.condition, branch.body)?;
        }

        if let Some(alternative) = &self.alternative {
            write!(f, "\nKUNG WALA {alternative}")?;
        }

        Ok(())
    }
}

// loop -> ALANG SA ( <assignment> , <expression> , <identifier> (++ | --) ) <block>
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub initializer: Assignment,
    pub condition: Expression,
    pub step: Step,
    pub body: Block,
    pub location: SrcSpan
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub variable: Identifier,
    /// `Token::Increment` or `Token::Decrement`.
    pub operator: Token,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Loop {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Alang)?;
        parser.expect_one(Token::Sa)?;
        parser.expect_one(Token::LParen)?;

        let initializer = Assignment::parse(parser)?;
        parser.expect_one(Token::Comma)?;

        let condition = Expression::parse(parser)?;
        parser.expect_one(Token::Comma)?;

        let variable = Identifier::from(parser.expect_ident()?);

        let operator = match parser.current() {
            token @ (Token::Increment | Token::Decrement) => {
                let operator = token.clone();
                parser.step();
                operator
            },
            found => return parse_error(
                ParseErrorType::ExpectedStep { found: found.clone() },
                parser.current_span()
            )
        };

        parser.expect_one(Token::RParen)?;

        let body = Block::parse(parser)?;
        let end = body.location.end;

        Ok(Self {
            initializer,
            condition,
            step: Step { variable, operator },
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Loop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ALANG SA ({}, {}, {}{}) {}",
            self.initializer,
            self.condition,
            self.step.variable,
            self.step.operator.as_literal(),
            self.body
        )
    }
}

// expression -> <identifier> | <infix> | <prefix> | <primitive> | ( <expression> ) | [ <expression> ]
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Infix(Infix),
    Prefix(Prefix),
    Primitive(Primitive),
    Nested {
        expression: Box<Expression>,
        location: SrcSpan
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            Self::Nested { expression, .. } => write!(f, "({expression})")
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(ident) => ident.location,
            Self::Infix(infix) => infix.location,
            Self::Prefix(prefix) => prefix.location,
            Self::Primitive(primitive) => primitive.location(),
            Self::Nested { location, .. } => *location
        }
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

// infix -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator.as_literal(), self.right)
    }
}

// prefix -> ( - | DILI ) <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: Token,
    pub expression: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            Token::Dili => write!(f, "DILI {}", self.expression),
            _ => write!(f, "{}{}", self.operator.as_literal(), self.expression)
        }
    }
}

// primitive -> <number> | OO | DILI | <text>
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number {
        value: f64,
        /// Source spelling, kept for printing.
        lexeme: String,
        location: SrcSpan
    },
    Bool {
        value: bool,
        location: SrcSpan
    },
    Char {
        value: String,
        location: SrcSpan
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { lexeme, .. } => write!(f, "{lexeme}"),
            Self::Bool { value: true, .. } => write!(f, "OO"),
            Self::Bool { value: false, .. } => write!(f, "DILI"),
            Self::Char { value, .. } => write!(f, "\"{value}\"")
        }
    }
}

impl Primitive {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Number { location, .. } |
            Self::Bool { location, .. } |
            Self::Char { location, .. } => *location
        }
    }
}
