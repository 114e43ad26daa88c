use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use equate::{run, ArrayTruthiness, Config};

/// Evaluate `==` and `!=` between values of different kinds.
///
/// Comparisons are written `<kind> [<literal>] <op> <kind> [<literal>]`, for example
/// `boolean yes == integer 1` or `null != array i`. Without a subcommand, comparisons are read
/// from standard input, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How arrays behave when compared with booleans.
    #[arg(long, value_enum, default_value = "always", global = true)]
    array_truthiness: ArrayTruthiness,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate comparisons given on the command line
    Eval {
        /// Comparisons, separated by `;`
        input: String,
    },
    /// Evaluate the comparisons in a file
    Run {
        /// Path to the script
        file: PathBuf,
    },
    /// Check the reference table of comparison cases
    Cases {
        /// Also list the cases that pass
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::default().with_array_truthiness(args.array_truthiness);
    match args.command {
        Some(Command::Eval { input }) => run::eval(&input, config),
        Some(Command::Run { file }) => run::file(file, config),
        Some(Command::Cases { verbose }) => run::cases(config, verbose),
        None => run::repl(config),
    }
}
