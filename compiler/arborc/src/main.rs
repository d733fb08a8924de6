//! Arbor CLI
//!
//! Tree-walking interpreter for a small JavaScript subset.

use std::process::ExitCode;

use arborc::commands::{
    eval_source, explain_error, lex_file, parse_file, parse_run_options, run_file,
};

fn main() -> ExitCode {
    arborc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" | "eval" => {
            let options = match parse_run_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    return ExitCode::FAILURE;
                }
            };
            let Some(input) = options.input else {
                if command == "run" {
                    eprintln!("Usage: arbor run <file.js> [options]");
                } else {
                    eprintln!("Usage: arbor eval '<source>' [options]");
                }
                return ExitCode::FAILURE;
            };
            if command == "run" {
                run_file(&input, options.config)
            } else {
                eval_source(&input, options.config)
            }
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: arbor parse <file.js>");
                return ExitCode::FAILURE;
            };
            parse_file(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: arbor lex <file.js>");
                return ExitCode::FAILURE;
            };
            lex_file(path)
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: arbor explain <ERROR_CODE>");
                eprintln!("Example: arbor explain E6001");
                return ExitCode::FAILURE;
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Arbor {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare `.js` path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
            {
                match parse_run_options(&args[1..]) {
                    Ok(options) => run_file(command, options.config),
                    Err(msg) => {
                        eprintln!("error: {msg}");
                        ExitCode::FAILURE
                    }
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    println!("Arbor (tree-walking JavaScript subset interpreter)");
    println!();
    println!("Usage: arbor <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.js>        Evaluate a program");
    println!("  eval '<source>'      Evaluate source given on the command line");
    println!("  parse <file.js>      Print the syntax tree");
    println!("  lex <file.js>        Print the token stream");
    println!("  explain <code>       Describe an error code (e.g., E6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --color=<mode>             auto (default), always, never");
    println!("  --max-call-depth=<n>       Nested call limit (default: 10000)");
    println!("  --truthy-redeclaration     Only reject redeclaring truthy bindings");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=arbor_eval=debug arbor run main.js");
    println!();
    println!("Examples:");
    println!("  arbor run main.js");
    println!("  arbor eval 'console.log(1 + 2)'");
    println!("  arbor parse main.js");
    println!("  arbor explain E6003");
}
