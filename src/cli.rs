use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PascalView;

/// recurrences — recursive and iterative formulations of classic numeric exercises
#[derive(Parser, Debug)]
#[command(
    name = "rec",
    version,
    about = "Evaluate numeric recurrences as recursive, iterative and memoized processes",
    long_about = None
)]
pub struct Cli {
    /// Path to a TOML configuration file
    /// (default: ~/.recurrences/recurrences.toml)
    #[arg(short, long, global = true, env = "RECURRENCES_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// n! (n >= 1)
    Fact(FactArgs),

    /// a + b using only increment and decrement
    Add(AddArgs),

    /// The two-argument function of exercise 1.10
    Ackermann(AckermannArgs),

    /// Fibonacci term with fib(1) = 1, fib(2) = 2
    Fib(FibArgs),

    /// Ways to change an amount with the standard coin kinds
    Change(ChangeArgs),

    /// f(n) = f(n-1) + 2f(n-2) + 3f(n-3), f(n) = n for n < 3
    Fun(FunArgs),

    /// Rows of Pascal's triangle
    Pascal(PascalArgs),

    /// Evaluate every exercise with the walkthrough inputs
    Demo,

    /// Sweep each exercise over a range and confirm all variants agree
    Check,

    /// List every procedure variant and the process shape it generates
    List,

    /// Print the resolved configuration as JSON and exit
    Config,
}

#[derive(Args, Debug)]
pub struct FactArgs {
    pub n: u32,

    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub a: u64,
    pub b: u64,

    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,
}

#[derive(Args, Debug)]
pub struct AckermannArgs {
    pub x: u64,
    pub y: u128,

    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,
}

#[derive(Args, Debug)]
pub struct FibArgs {
    pub n: u32,

    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,
}

#[derive(Args, Debug)]
pub struct ChangeArgs {
    /// Amount in cents; negative amounts have no ways
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,

    /// Number of coin kinds to use, cheapest first (default from config)
    #[arg(short = 'k', long, value_name = "K")]
    pub coin_types: Option<usize>,

    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,
}

#[derive(Args, Debug)]
pub struct FunArgs {
    pub n: u32,

    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,
}

#[derive(Args, Debug)]
pub struct PascalArgs {
    /// Number of rows (default from config)
    pub n: Option<usize>,

    /// Which rows to print (default from config)
    #[arg(long, value_enum)]
    pub view: Option<PascalView>,
}

/// Which formulation of an exercise to evaluate.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The recursive formulation
    Rec,
    /// The iterative formulation (or explicit stack)
    Iter,
    /// The memoized recursion, where one exists
    Memo,
    /// Every formulation, checked for agreement
    All,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_amount() {
        let cli = Cli::try_parse_from(["rec", "change", "-5", "-k", "3"]).unwrap();
        match cli.command {
            Commands::Change(args) => {
                assert_eq!(args.amount, -5);
                assert_eq!(args.coin_types, Some(3));
                assert_eq!(args.variant, Variant::All);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rec", "fib", "20", "--variant", "memo", "--format", "json", "-vv"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Fib(FibArgs { n: 20, variant: Variant::Memo })));
    }
}
