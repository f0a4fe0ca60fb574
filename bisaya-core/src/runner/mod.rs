use std::{io::{BufRead, Write}, path::PathBuf, rc::Rc};

use utf8_chars::BufReadCharsExt;

use crate::{
    eval::prelude::{Interpreter, Warning},
    parser::prelude::{parse_program, parse_program_from_stream, Parsed, Program},
    utils::prelude::{Error, SourceWarningEmitter, WarningEmitter, WarningEmitterIO},
};

/// Parses `src` and reports anything left after `KATAPUSAN`.
fn parse_source(path: &PathBuf, src: &str, warnings: &SourceWarningEmitter) -> Result<Program, Error> {
    let parsed = match parse_program(src) {
        Ok(parsed) => parsed,
        Err(error) => return Err(Error::Parse { path: path.clone(), src: src.to_string(), error })
    };

    Ok(finish_parse(parsed, warnings))
}

fn finish_parse(parsed: Parsed, warnings: &SourceWarningEmitter) -> Program {
    if let Some(location) = parsed.trailing {
        warnings.emit(Warning::UnreachableCode { location });
    }

    parsed.program
}

fn read_source(path: &PathBuf) -> Result<String, Error> {
    std::fs::read_to_string(path)
        .map_err(|err| Error::StdIo { err: err.kind() })
}

/// Parses the program at `path` without running it.
pub fn check(path: PathBuf, warnings: Rc<dyn WarningEmitterIO>) -> Result<Program, Error> {
    let src = read_source(&path)?;
    let warnings = SourceWarningEmitter::new(path.clone(), src.clone(), WarningEmitter::new(warnings));

    parse_source(&path, &src, &warnings)
}

pub fn run_source<R: BufRead, W: Write>(
    path: PathBuf,
    src: String,
    input: R,
    output: W,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<(), Error> {
    let warnings = SourceWarningEmitter::new(path.clone(), src.clone(), WarningEmitter::new(warnings));
    let program = parse_source(&path, &src, &warnings)?;

    execute(path, src, &program, input, output, &warnings)
}

pub fn run<R: BufRead, W: Write>(
    path: PathBuf,
    input: R,
    output: W,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<(), Error> {
    let src = read_source(&path)?;

    run_source(path, src, input, output, warnings)
}

/// Like `run`, but lexes the file while it is being read.
pub fn run_from_stream<R: BufRead, W: Write>(
    path: PathBuf,
    input: R,
    output: W,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<(), Error> {
    let file = std::fs::File::open(&path)?;

    let file_size = file.metadata()?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut read_error = None;
    let mut reader = std::io::BufReader::new(file);

    let stream = reader.chars()
        .map_while(|c| match c {
            Ok(c) => {
                src.push(c);
                Some(c)
            },
            Err(err) => {
                read_error = Some(err);
                None
            }
        });

    let parsed = parse_program_from_stream(stream);

    if let Some(err) = read_error {
        return Err(std::io::Error::from(err).into());
    }

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(error) => return Err(Error::Parse { path, src, error })
    };

    let warnings = SourceWarningEmitter::new(path.clone(), src.clone(), WarningEmitter::new(warnings));
    let program = finish_parse(parsed, &warnings);

    execute(path, src, &program, input, output, &warnings)
}

fn execute<R: BufRead, W: Write>(
    path: PathBuf,
    src: String,
    program: &Program,
    input: R,
    output: W,
    warnings: &SourceWarningEmitter,
) -> Result<(), Error> {
    let mut interpreter = Interpreter::new(input, output, warnings);

    match interpreter.execute(program) {
        Ok(()) => Ok(()),
        Err(error) => Err(Error::Runtime { path, src, error })
    }
}

#[cfg(test)]
mod tests;
