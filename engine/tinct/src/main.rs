//! tinct CLI
//!
//! Classifies source files into highlighting categories.

use tinct::commands::{list_languages, run_classify};
use tinct::config::parse_classify_args;
use tinct::CliError;
use tinct_grammars::builtin_registry;

fn main() {
    tinct::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "classify" => {
            let (config, paths) = match parse_classify_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(CliError::NoInput) => {
                    eprintln!("Usage: tinct classify <files...> [options]");
                    eprintln!();
                    print_classify_options();
                    std::process::exit(1);
                }
                Err(e) => fail(&e),
            };
            match run_classify(&paths, &config) {
                Ok(output) => print!("{output}"),
                Err(e) => fail(&e),
            }
        }
        "languages" => match builtin_registry() {
            Ok(registry) => print!("{}", list_languages(&registry)),
            Err(e) => fail(&CliError::from(e)),
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tinct {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("tinct: token classification for syntax highlighting");
    println!();
    println!("Usage: tinct <command> [options]");
    println!();
    println!("Commands:");
    println!("  classify <files...>  Classify files and print their tokens");
    println!("  languages            List built-in languages and aliases");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    print_classify_options();
    println!();
    println!("Examples:");
    println!("  tinct classify main.py");
    println!("  tinct classify --lang=kotlin build.gradle.kts --format=json");
    println!("  RUST_LOG=tinct_core=trace tinct classify config.yml");
}

fn print_classify_options() {
    println!("Classify options:");
    println!("  --lang=<id>          Language for all files (default: by extension)");
    println!("  --format=<fmt>       Output format: text (default), json");
    println!("  --json               Same as --format=json");
    println!("  --no-parallel        Classify files sequentially");
}
