use std::{path::PathBuf, rc::Rc};

use crate::{
    eval::prelude::{RuntimeErrorType, Warning as ProgramWarning},
    lexer::prelude::Token,
    parser::prelude::ParseErrorType,
    utils::prelude::{Error, NullWarningEmitterIO, VectorWarningEmitterIO, Warning},
};

use super::{check, run, run_from_stream, run_source};

const GREETING: &str = r#"
    -- reads a name and an age, greets back
    SUGOD
        MUGNA LETRA name
        MUGNA NUMERO age
        DAWAT: name, age
        IPAKITA: [Hello, ] & name & "!" & $ & "next year: " & age + 1
    KATAPUSAN
"#;

fn temp_program(name: &str, src: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bisaya-{}-{name}.bpp", std::process::id()));
    std::fs::write(&path, src).expect("temp file is writable");

    path
}

#[test]
fn test_run_source() {
    let mut output = Vec::new();

    let result = run_source(
        PathBuf::from("greeting.bpp"),
        GREETING.to_string(),
        "Maria, 20\n".as_bytes(),
        &mut output,
        Rc::new(NullWarningEmitterIO)
    );

    assert_eq!(result, Ok(()));
    assert_eq!(String::from_utf8(output).unwrap(), "Hello,Maria!\nnext year: 21\n");
}

#[test]
fn test_parse_errors_are_wrapped() {
    let result = run_source(
        PathBuf::from("broken.bpp"),
        "SUGOD MUGNA NUMERO KATAPUSAN".to_string(),
        "".as_bytes(),
        Vec::new(),
        Rc::new(NullWarningEmitterIO)
    );

    let err = result.unwrap_err();

    match &err {
        Error::Parse { error, .. } => {
            assert_eq!(error.error, ParseErrorType::ExpectedIdent { found: Token::Katapusan })
        },
        other => panic!("expected a parse error, got {other:?}")
    }

    assert!(err.pretty_string().contains("Syntax error"));
}

#[test]
fn test_runtime_errors_are_wrapped() {
    let src = "SUGOD MUGNA NUMERO x IPAKITA: \"ok\" x = 1 / 0 KATAPUSAN";
    let mut output = Vec::new();

    let result = run_source(
        PathBuf::from("zero.bpp"),
        src.to_string(),
        "".as_bytes(),
        &mut output,
        Rc::new(NullWarningEmitterIO)
    );

    match result {
        Err(Error::Runtime { error, path, .. }) => {
            assert_eq!(error.error, RuntimeErrorType::DivisionByZero { op: "/".into() });
            assert_eq!(path, PathBuf::from("zero.bpp"));
            assert_eq!(&src[error.span.start as usize..error.span.end as usize], "1 / 0");
        },
        other => panic!("expected a runtime error, got {other:?}")
    }

    assert_eq!(String::from_utf8(output).unwrap(), "ok\n");
}

#[test]
fn test_runtime_error_diagnostic() {
    let err = run_source(
        PathBuf::from("undefined.bpp"),
        "SUGOD IPAKITA: ghost KATAPUSAN".to_string(),
        "".as_bytes(),
        Vec::new(),
        Rc::new(NullWarningEmitterIO)
    ).unwrap_err();

    let pretty = err.pretty_string();

    assert!(pretty.contains("Runtime error"), "{pretty}");
    assert!(pretty.contains("variable `ghost` is not declared"), "{pretty}");
    assert!(pretty.contains("hint: Declare it first"), "{pretty}");
}

#[test]
fn test_unreachable_code_warning() {
    let warnings = Rc::new(VectorWarningEmitterIO::new());
    let src = "SUGOD IPAKITA: \"done\" KATAPUSAN\nIPAKITA: \"never\"";
    let mut output = Vec::new();

    let result = run_source(
        PathBuf::from("trailing.bpp"),
        src.to_string(),
        "".as_bytes(),
        &mut output,
        warnings.clone()
    );

    assert_eq!(result, Ok(()));
    assert_eq!(String::from_utf8(output).unwrap(), "done\n");

    let emitted = warnings.take();

    match emitted.as_slice() {
        [warning @ Warning::Program { warning: ProgramWarning::UnreachableCode { location }, .. }] => {
            assert_eq!(&src[location.start as usize..], "IPAKITA: \"never\"");
            assert!(warning.pretty_string().contains("Unreachable code"));
        },
        other => panic!("expected one unreachable code warning, got {other:?}")
    }
}

#[test]
fn test_run_and_check_files() {
    let path = temp_program("files", GREETING);

    let mut output = Vec::new();
    let result = run(path.clone(), "Juan, 7\n".as_bytes(), &mut output, Rc::new(NullWarningEmitterIO));

    assert_eq!(result, Ok(()));
    assert_eq!(String::from_utf8(output).unwrap(), "Hello,Juan!\nnext year: 8\n");

    let program = check(path.clone(), Rc::new(NullWarningEmitterIO)).expect("program parses");
    assert_eq!(program.statements.len(), 4);

    let mut streamed = Vec::new();
    let result = run_from_stream(path.clone(), "Ana, 30\n".as_bytes(), &mut streamed, Rc::new(NullWarningEmitterIO));

    assert_eq!(result, Ok(()));
    assert_eq!(String::from_utf8(streamed).unwrap(), "Hello,Ana!\nnext year: 31\n");

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_stream_spans_match_source() {
    // multibyte text before the error must not shift the reported span
    let src = "SUGOD MUGNA LETRA s = “ñ” IPAKITA: s & ghost KATAPUSAN";
    let path = temp_program("spans", src);

    let result = run_from_stream(path.clone(), "".as_bytes(), Vec::new(), Rc::new(NullWarningEmitterIO));

    match result {
        Err(Error::Runtime { error, src: read, .. }) => {
            assert_eq!(read, src);
            assert_eq!(&src[error.span.start as usize..error.span.end as usize], "ghost");
        },
        other => panic!("expected a runtime error, got {other:?}")
    }

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("/definitely/not/here.bpp");

    assert_eq!(
        run(path.clone(), "".as_bytes(), Vec::new(), Rc::new(NullWarningEmitterIO)),
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound })
    );
    assert_eq!(
        run_from_stream(path, "".as_bytes(), Vec::new(), Rc::new(NullWarningEmitterIO)),
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound })
    );
}
