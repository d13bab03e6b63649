mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, list, GenerateArgs, InitArgs, ListArgs};
use tracing::Level;

/// modelgen - generate stub files from model definitions
#[derive(Parser, Debug)]
#[command(name = "modelgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new modelgen project
    Init(InitArgs),

    /// Run generators over model files
    Generate(GenerateArgs),

    /// List available generators
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Generate(args) => generate(args, &cwd),
        Command::List(args) => list(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
