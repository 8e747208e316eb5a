use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{output::OutputFormat, solve::SolveArgs};

mod example;
mod file_utils;
mod output;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in six vertex example graph
    Example {
        #[arg(short, long, value_enum, default_value = "lines")]
        format: OutputFormat,
    },
    /// Solve graphs read from JSON files
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Example { format }) => example::run(format)?,
        Some(Commands::Solve { args }) => solve::run(args)?,
        None => example::run(OutputFormat::Lines)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["warshall"]).unwrap();

        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_example_format() {
        let cli = Cli::try_parse_from(["warshall", "example", "--format", "table"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(Commands::Example {
                format: OutputFormat::Table
            })
        ));
    }
}
