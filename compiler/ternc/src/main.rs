//! Tern Interpreter CLI
//!
//! Line-oriented expression evaluation.

use ternc::commands::{run_file, run_stdin};
use ternc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run_stdin();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: tern run <file.tern>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Tern Interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tern"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Tern Interpreter (line-oriented expression evaluation)");
    println!();
    println!("Usage: tern [command]");
    println!();
    println!("With no command, reads a program from stdin until end of input or");
    println!("a line consisting of `exit`: every line but the last defines a");
    println!("function, the last line is the expression to evaluate.");
    println!();
    println!("Commands:");
    println!("  run <file.tern>      Run a Tern program from a file");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Examples:");
    println!("  echo '(2+2)' | tern");
    println!("  tern run program.tern");
}
