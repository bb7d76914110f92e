use std::env;
use std::process;

mod builtins;
mod command;
mod exec;
mod jobs;
mod prompt;
mod shell;

fn print_help() {
    println!("kjell - a small interactive shell");
    println!();
    println!("Usage: kjell [OPTIONS]");
    println!("  -h, --help       Print this help");
    println!("  -v, --version    Print version");
    println!();
    println!("Builtins: cd, exit. Append '&' to run a command in the background.");
}

fn print_version() {
    println!("kjell {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // respond to common flags quickly so external tools don't hang
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        process::exit(0);
    }

    if args.iter().any(|a| a == "-v" || a == "--version" || a == "-V") {
        print_version();
        process::exit(0);
    }

    let mut shell = shell::Shell::new();
    shell.run();
}
