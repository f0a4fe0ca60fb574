use crate::{
    environment::prelude::ValueType,
    lexer::prelude::{LexicalErrorType, Token},
    parser::prelude::{parse_program, Expression, ParseError, ParseErrorType, PrintItem, Primitive, Statement}
};

// fully parenthesized form, makes the tree shape visible
fn shape(expression: &Expression) -> String {
    match expression {
        Expression::Identifier(ident) => ident.value.clone(),
        Expression::Primitive(primitive) => primitive.to_string(),
        Expression::Prefix(prefix) => format!("({} {})", prefix.operator.as_literal(), shape(&prefix.expression)),
        Expression::Infix(infix) => format!(
            "({} {} {})",
            shape(&infix.left),
            infix.operator.as_literal(),
            shape(&infix.right)
        ),
        Expression::Nested { expression, .. } => shape(expression),
    }
}

fn parse_value(expression: &str) -> Result<Expression, ParseError> {
    let input = format!("SUGOD x = {expression} KATAPUSAN");
    let parsed = parse_program(&input)?;

    match parsed.program.statements.into_iter().next() {
        Some(Statement::Assignment(assignment)) => Ok(assignment.value),
        other => panic!("expected an assignment, got {other:?}")
    }
}

fn parse_error_type(input: &str) -> ParseErrorType {
    match parse_program(input) {
        Ok(parsed) => panic!("`{input}` should not parse, got {}", parsed.program),
        Err(err) => err.error
    }
}

#[test]
fn test_program_structure() -> Result<(), ParseError> {
    let input = r#"
        -- sample program
        SUGOD
            MUGNA NUMERO x, y, z = 5
            MUGNA LETRA a_1 = 'n'
            MUGNA TINUOD t = "OO"
            x = y = 4
            a_1 = 'c'
            IPAKITA: x & t & z & $ & a_1 & [#] & "last"
        KATAPUSAN
    "#;

    let parsed = parse_program(input)?;
    let statements = &parsed.program.statements;

    assert_eq!(statements.len(), 6);
    assert!(parsed.trailing.is_none());

    match &statements[0] {
        Statement::Declaration(declaration) => {
            assert_eq!(declaration.value_type, ValueType::Numero);

            let names = declaration.variables.iter()
                .map(|variable| variable.name.value.as_str())
                .collect::<Vec<_>>();

            assert_eq!(names, vec!["x", "y", "z"]);
            assert!(declaration.variables[0].initializer.is_none());
            assert!(declaration.variables[2].initializer.is_some());
        },
        other => panic!("expected a declaration, got {other:?}")
    }

    match &statements[3] {
        Statement::Assignment(assignment) => {
            let targets = assignment.targets.iter()
                .map(|target| target.value.as_str())
                .collect::<Vec<_>>();

            assert_eq!(targets, vec!["x", "y"]);
        },
        other => panic!("expected an assignment, got {other:?}")
    }

    println!("{}", parsed.program);

    Ok(())
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    let cases = vec![
        ("5 + 3 * 2", "(5 + (3 * 2))"),
        ("(5 + 3) * 2", "((5 + 3) * 2)"),
        ("10 - 4 - 3", "((10 - 4) - 3)"),
        ("8 / 2 % 3", "((8 / 2) % 3)"),
        ("-a * b", "((- a) * b)"),
        ("a + 1 > 5 UG b O c", "((((a + 1) > 5) UG b) O c)"),
        ("a O b UG c", "(a O (b UG c))"),
        ("DILI a == b", "((DILI a) == b)"),
        ("DILI (OO UG DILI)", "(DILI (OO UG DILI))"),
        ("[5 + 3] * 2", "((5 + 3) * 2)"),
        ("x <> 'a'", "(x <> \"a\")"),
        ("- - 1", "(- (- 1))"),
    ];

    for (input, expected) in cases {
        assert_eq!(shape(&parse_value(input)?), expected, "while parsing `{input}`");
    }

    Ok(())
}

#[test]
fn test_dili_as_literal() -> Result<(), ParseError> {
    match parse_value("DILI")? {
        Expression::Primitive(Primitive::Bool { value, .. }) => assert!(!value),
        other => panic!("expected a boolean literal, got {other:?}")
    }

    assert_eq!(shape(&parse_value("OO UG DILI")?), "(OO UG DILI)");

    Ok(())
}

#[test]
fn test_dili_before_next_assignment() -> Result<(), ParseError> {
    let input = "SUGOD\nMUGNA TINUOD t = DILI\nMUGNA NUMERO x\nt = DILI\nx = 5\nIPAKITA: t & x\nKATAPUSAN";

    let parsed = parse_program(input)?;
    let statements = &parsed.program.statements;

    assert_eq!(statements.len(), 5);

    match &statements[2] {
        Statement::Assignment(assignment) => {
            assert_eq!(assignment.targets.len(), 1);
            assert_eq!(shape(&assignment.value), "DILI");
        },
        other => panic!("expected an assignment, got {other:?}")
    }

    match &statements[3] {
        Statement::Assignment(assignment) => assert_eq!(assignment.targets[0].value, "x"),
        other => panic!("expected an assignment, got {other:?}")
    }

    assert_eq!(shape(&parse_value("DILI t")?), "(DILI t)");

    Ok(())
}

#[test]
fn test_expression_locations() -> Result<(), ParseError> {
    let expression = parse_value("(1 + 2) * 3")?;

    // "SUGOD x = " is 10 bytes
    assert_eq!(expression.location().start, 10);
    assert_eq!(expression.location().end, 21);

    Ok(())
}

#[test]
fn test_expression_errors() {
    let fails = vec![
        ("SUGOD x = KATAPUSAN", ParseErrorType::EmptyExpression),
        ("SUGOD x = (5 + 3 KATAPUSAN", ParseErrorType::MismatchedParentheses),
        ("SUGOD x = (5 + 3] KATAPUSAN", ParseErrorType::MismatchedParentheses),
        ("SUGOD x = 5 + KATAPUSAN", ParseErrorType::ExpectedValue { found: Token::Katapusan }),
        ("SUGOD x = 5 * , 2 KATAPUSAN", ParseErrorType::ExpectedValue { found: Token::Comma }),
    ];

    for (input, expected) in fails {
        assert_eq!(parse_error_type(input), expected, "while parsing `{input}`");
    }

    // a stray `)` ends the expression and is rejected by the statement loop
    assert!(matches!(
        parse_error_type("SUGOD x = 5 + 3) KATAPUSAN"),
        ParseErrorType::UnexpectedToken { token: Token::RParen, .. }
    ));
}

#[test]
fn test_print_items() -> Result<(), ParseError> {
    let input = r#"
        SUGOD
            IPAKITA: a & "hi" & b + 1 & (c) & $ & [#] & [[] & []] & [] & OO
            a = 1
        KATAPUSAN
    "#;

    let parsed = parse_program(input)?;
    let statements = &parsed.program.statements;

    assert_eq!(statements.len(), 2, "print must stop before the assignment");

    let items = match &statements[0] {
        Statement::Print(print) => &print.items,
        other => panic!("expected a print, got {other:?}")
    };

    let rendered = items.iter()
        .map(|item| match item {
            PrintItem::Text { value, .. } => format!("text:{value}"),
            PrintItem::Variable(ident) => format!("var:{ident}"),
            PrintItem::Expression(expression) => format!("expr:{}", shape(expression)),
            PrintItem::LineBreak { .. } => "break".to_string(),
        })
        .collect::<Vec<_>>();

    assert_eq!(rendered, vec![
        "var:a",
        "text:hi",
        "expr:(b + 1)",
        "expr:c",
        "break",
        "text:#",
        "text:[",
        "text:]",
        "text:OO",
    ]);

    Ok(())
}

#[test]
fn test_print_escape_keeps_lexemes() -> Result<(), ParseError> {
    let parsed = parse_program("SUGOD IPAKITA: [x & y] KATAPUSAN")?;

    match &parsed.program.statements[0] {
        Statement::Print(print) => {
            let texts = print.items.iter()
                .map(|item| match item {
                    PrintItem::Text { value, .. } => value.as_str(),
                    other => panic!("expected text, got {other:?}")
                })
                .collect::<Vec<_>>();

            assert_eq!(texts, vec!["x", "&", "y"]);
        },
        other => panic!("expected a print, got {other:?}")
    }

    Ok(())
}

#[test]
fn test_conditional_chain() -> Result<(), ParseError> {
    let input = r#"
        SUGOD
            KUNG (a > 1) PUNDOK {
                IPAKITA: "one"
            }
            KUNG DILI (a == 0) PUNDOK {
                IPAKITA: "zero"
            }
            KUNG DILI (DILI b) PUNDOK { }
            KUNG WALA PUNDOK {
                a = 2
            }
            KUNG (OO) PUNDOK { }
        KATAPUSAN
    "#;

    let parsed = parse_program(input)?;
    let statements = &parsed.program.statements;

    assert_eq!(statements.len(), 2);

    match &statements[0] {
        Statement::Conditional(conditional) => {
            assert_eq!(conditional.branches.len(), 3);
            assert_eq!(shape(&conditional.branches[2].condition), "(DILI b)");
            assert!(conditional.branches[2].body.statements.is_empty());
            assert_eq!(conditional.alternative.as_ref().map(|block| block.statements.len()), Some(1));
        },
        other => panic!("expected a conditional, got {other:?}")
    }

    match &statements[1] {
        Statement::Conditional(conditional) => {
            assert_eq!(conditional.branches.len(), 1);
            assert!(conditional.alternative.is_none());
        },
        other => panic!("expected a conditional, got {other:?}")
    }

    Ok(())
}

#[test]
fn test_loop() -> Result<(), ParseError> {
    let input = r#"
        SUGOD
            MUGNA NUMERO i
            ALANG SA (i = 1, i <= 5, i++) PUNDOK {
                IPAKITA: i
            }
            ALANG SA (i := 10, i > 0, i--) PUNDOK { }
        KATAPUSAN
    "#;

    let parsed = parse_program(input)?;

    let loops = parsed.program.statements.iter()
        .filter_map(|statement| match statement {
            Statement::Loop(loop_) => Some(loop_),
            _ => None
        })
        .collect::<Vec<_>>();

    assert_eq!(loops.len(), 2);
    assert_eq!(loops[0].initializer.targets[0].value, "i");
    assert_eq!(shape(&loops[0].condition), "(i <= 5)");
    assert_eq!(loops[0].step.operator, Token::Increment);
    assert_eq!(loops[0].body.statements.len(), 1);
    assert_eq!(loops[1].step.operator, Token::Decrement);

    Ok(())
}

#[test]
fn test_canonical_text_reparses() -> Result<(), ParseError> {
    let input = r#"
        SUGOD
            MUGNA NUMERO a = 5, b
            MUGNA TIPIK c = -1.5
            b = a * (2 + 3)
            IPAKITA: a & "-" & b + 1 & $
            KUNG (a > b O DILI (a == 5)) PUNDOK {
                DAWAT: a, b
            }
            KUNG WALA PUNDOK {
                ALANG SA (a = 0, a < 3, a++) PUNDOK { IPAKITA: a }
            }
        KATAPUSAN
    "#;

    let first = parse_program(input)?.program;
    let second = parse_program(&first.to_string())?.program;

    assert_eq!(first.to_string(), second.to_string());

    Ok(())
}

#[test]
fn test_trailing_tokens() -> Result<(), ParseError> {
    let input = "SUGOD KATAPUSAN IPAKITA: x";
    let parsed = parse_program(input)?;

    let trailing = parsed.trailing.expect("tokens after KATAPUSAN are reported");

    assert_eq!(trailing.start, 16);
    assert_eq!(trailing.end, input.len() as u32);

    Ok(())
}

#[test]
fn test_structure_errors() {
    assert_eq!(parse_error_type("MUGNA NUMERO x KATAPUSAN"), ParseErrorType::ExpectedSugod);
    assert_eq!(parse_error_type(""), ParseErrorType::ExpectedSugod);
    assert_eq!(parse_error_type("SUGOD MUGNA NUMERO x"), ParseErrorType::ExpectedKatapusan);
    assert_eq!(
        parse_error_type("SUGOD KUNG (OO) PUNDOK { KATAPUSAN } KATAPUSAN"),
        ParseErrorType::MisplacedProgramMarker { token: Token::Katapusan }
    );
    assert_eq!(
        parse_error_type("SUGOD SUGOD KATAPUSAN"),
        ParseErrorType::MisplacedProgramMarker { token: Token::Sugod }
    );
    assert_eq!(
        parse_error_type("SUGOD MUGNA ENTERO x KATAPUSAN"),
        ParseErrorType::ExpectedType { found: Token::Ident("ENTERO".into()) }
    );
    assert_eq!(
        parse_error_type("SUGOD MUGNA NUMERO 5 KATAPUSAN"),
        ParseErrorType::ExpectedIdent { found: Token::Int("5".into()) }
    );
    assert_eq!(
        parse_error_type("SUGOD ALANG SA (i = 1, i < 2, i) PUNDOK { } KATAPUSAN"),
        ParseErrorType::ExpectedStep { found: Token::RParen }
    );
}

#[test]
fn test_missing_pieces_are_named() {
    let cases = vec![
        ("SUGOD KUNG OO) PUNDOK { } KATAPUSAN", "("),
        ("SUGOD KUNG (OO PUNDOK { } KATAPUSAN", ")"),
        ("SUGOD KUNG (OO) { } KATAPUSAN", "PUNDOK"),
        ("SUGOD KUNG (OO) PUNDOK } KATAPUSAN", "{"),
        ("SUGOD ALANG (i = 1, OO, i++) PUNDOK { } KATAPUSAN", "SA"),
        ("SUGOD IPAKITA x KATAPUSAN", ":"),
        ("SUGOD x 5 KATAPUSAN", "="),
    ];

    for (input, missing) in cases {
        match parse_error_type(input) {
            ParseErrorType::UnexpectedToken { expected, .. } => {
                assert_eq!(expected, vec![missing.to_string()], "while parsing `{input}`")
            },
            other => panic!("`{input}` failed with {other:?}")
        }
    }

    match parse_error_type("SUGOD KUNG (OO) PUNDOK { ") {
        ParseErrorType::UnexpectedEof { expected } => assert_eq!(expected, vec!["}".to_string()]),
        other => panic!("unexpected error {other:?}")
    }
}

#[test]
fn test_lexical_errors_surface() {
    match parse_error_type("SUGOD x = 5 ^ 2 KATAPUSAN") {
        ParseErrorType::LexError { error } => {
            assert_eq!(error.error, LexicalErrorType::UnrecognizedToken { tok: '^' })
        },
        other => panic!("expected a lexical error, got {other:?}")
    }
}
