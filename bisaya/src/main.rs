mod cli;
mod rlpl;

use std::{cell::Cell, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::Parser;
use cli::{
    print_checked, print_checking, print_failed, print_finished, print_interrupted, print_running
};
use bisaya_core::{
    runner::{check, run_from_stream},
    utils::prelude::{Error, Warning, WarningEmitterIO}
};

#[derive(Parser)]
#[command(version, about = "Interpreter for the Bisaya++ teaching language")]
enum Command {
    /// Runs a program, reading DAWAT input from stdin
    Run {
        /// Path of source file
        path: PathBuf,
        /// Do not print status lines
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Performs lexical and syntactical analysis only
    Check {
        /// Path of source file
        path: PathBuf,
        /// Print ast instead of the canonical source code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
}

fn main() -> ExitCode {
    if let Err(err) = ctrlc::set_handler(|| {
        print_interrupted();
        std::process::exit(130);
    }) {
        eprintln!("could not install the Ctrl-C handler: {err}");
    }

    match Command::parse() {
        Command::Run { path, quiet } => {
            let warning_emitter = Rc::new(ConsoleWarningEmitter::default());

            if !quiet {
                print_running(&path.to_string_lossy());
            }
            let start = Instant::now();

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();

            let result = run_from_stream(path, stdin.lock(), stdout.lock(), warning_emitter.clone());

            match result {
                Ok(()) => {
                    if !quiet {
                        print_finished(Instant::now() - start, warning_emitter.count());
                    }

                    ExitCode::SUCCESS
                },
                Err(err) => {
                    report(&err);

                    if !quiet {
                        print_failed(Instant::now() - start);
                    }

                    ExitCode::FAILURE
                }
            }
        },
        Command::Check { path, print_ast } => {
            let warning_emitter = Rc::new(ConsoleWarningEmitter::default());

            print_checking(&path.to_string_lossy());
            let start = Instant::now();

            match check(path, warning_emitter) {
                Ok(program) => {
                    if print_ast {
                        println!("{program:#?}");
                    } else {
                        println!("{program}");
                    }

                    print_checked(Instant::now() - start);

                    ExitCode::SUCCESS
                },
                Err(err) => {
                    report(&err);

                    ExitCode::FAILURE
                }
            }
        },
        Command::Rlpl => match rlpl::start() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                report(&err.into());

                ExitCode::FAILURE
            }
        },
    }
}

fn report(err: &Error) {
    let buf_writer = crate::cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");
}

#[derive(Debug, Default)]
pub struct ConsoleWarningEmitter {
    count: Cell<usize>,
}

impl ConsoleWarningEmitter {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        self.count.set(self.count.get() + 1);

        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
