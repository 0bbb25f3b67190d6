//! CLI entry point for structree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use structree::{Config, DEFAULT_OUTPUT, logging, write_tree};

#[derive(Parser, Debug)]
#[command(name = "structree")]
#[command(about = "Write a directory's layout to a text file as a tree")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the tree to (overwritten)
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help / --version
            e.exit();
        }
        eprintln!("structree: argument parsing error: {}", e);
        process::exit(1);
    });

    logging::init_logging();

    let config = Config::new(args.path).with_output(args.output);

    if let Err(e) = write_tree(&config) {
        eprintln!("structree: {}", e);
        process::exit(1);
    }
}
