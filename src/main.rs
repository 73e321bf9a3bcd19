use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use sable::{get_result, interpreter::environment::Environment, parse, run_with_env};

/// sable is a small, dynamically-typed scripting language with first-class
/// functions, arrays, and hashes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sable to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final
    /// value of a sable script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print the parsed program in canonical form instead of running it.
    #[arg(long)]
    ast: bool,

    /// Script text, or a path to a script when --file is given. Without
    /// it, an interactive session starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if args.ast {
        match parse(&script) {
            Ok(program) => println!("{program}"),
            Err(errors) => eprintln!("{errors}"),
        }
        return;
    }

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}

/// Runs the interactive prompt.
///
/// One environment lives for the whole session, so bindings carry over
/// between lines. A line that fails to parse has its errors listed and is
/// not evaluated; otherwise the line's value is printed.
fn repl() {
    let env = Environment::new_root();
    let stdin = io::stdin();

    print_prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        match run_with_env(&line, &env) {
            Ok(value) => println!("{value}"),
            Err(error) => {
                for message in error.to_string().lines() {
                    eprintln!("\t{message}");
                }
            },
        }

        print_prompt();
    }
}

fn print_prompt() {
    print!(">> ");
    let _ = io::stdout().flush();
}
