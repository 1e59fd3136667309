use std::{fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use tally::{interpreter::value::format_result, tokenize};
use tracing_subscriber::EnvFilter;

/// tally parses and evaluates arithmetic expressions separated by `;`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// What to print for the script.
    #[arg(long, value_enum, default_value_t = Emit::Results)]
    emit: Emit,

    /// Log filter, such as `debug` or `tally=trace`.
    #[arg(long, env = "TALLY_LOG", default_value = "warn")]
    log_level: String,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// One result per statement, `null` for empty statements.
    Results,
    /// The syntax tree as JSON.
    Ast,
    /// The token stream as JSON.
    Tokens,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&args.log_level))
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match emit(&script, args.emit) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn emit(script: &str, emit: Emit) -> Result<String, Box<dyn std::error::Error>> {
    match emit {
        Emit::Results => {
            let results = tally::run(script)?;
            Ok(results.into_iter()
                      .map(format_result)
                      .collect::<Vec<_>>()
                      .join("\n"))
        },
        Emit::Ast => Ok(serde_json::to_string_pretty(&tally::parse(script)?)?),
        Emit::Tokens => Ok(serde_json::to_string_pretty(&tokenize(script).collect::<Vec<_>>())?),
    }
}
