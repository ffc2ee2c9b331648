//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use keycalc::config::MAX_PRECISION;
use std::path::PathBuf;

/// keycalc: keystroke-driven calculator expression editor
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose logging (-v)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(long, global = true, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum fractional digits in results (0-17)
    #[arg(long, global = true, value_parser = precision_parser())]
    pub precision: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed a key string to a fresh editor and print the display
    ///
    /// Keys: digits, `.`, `+ - * /`, `=` evaluate, `c`/`C` clear,
    /// `<` backspace. Spaces are ignored.
    Press(PressArgs),

    /// Evaluate raw expression text
    Eval(EvalArgs),

    /// Type keys into a live display line
    Interactive,

    /// Show the effective configuration
    Config,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Keys to press, in order
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print `key -> display` after every key
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression text, e.g. "(1+2)*3"
    #[arg(allow_hyphen_values = true)]
    pub expr: String,
}

fn precision_parser() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::new().range(0..=MAX_PRECISION as u64)
}

impl Cli {
    /// The `--steps` flag, when the command has one
    #[must_use]
    pub const fn steps(&self) -> bool {
        match &self.command {
            Commands::Press(args) => args.steps,
            Commands::Eval(_) | Commands::Interactive | Commands::Config => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_press() {
        let cli = Cli::parse_from(["keycalc", "press", "5+3="]);
        match cli.command {
            Commands::Press(args) => {
                assert_eq!(args.keys, "5+3=");
                assert!(!args.steps);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_press_leading_minus() {
        let cli = Cli::parse_from(["keycalc", "press", "-5*2="]);
        assert!(matches!(cli.command, Commands::Press(ref a) if a.keys == "-5*2="));
    }

    #[test]
    fn test_parse_press_steps() {
        let cli = Cli::parse_from(["keycalc", "press", "--steps", "12"]);
        assert!(cli.steps());
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::parse_from(["keycalc", "eval", "(1+2)*3"]);
        assert!(matches!(cli.command, Commands::Eval(ref a) if a.expr == "(1+2)*3"));
        assert!(!cli.steps());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "keycalc",
            "-v",
            "config",
            "--precision",
            "4",
            "--config",
            "calc.yaml",
        ]);
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.precision, Some(4));
        assert_eq!(cli.config, Some(PathBuf::from("calc.yaml")));
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::parse_from(["keycalc", "-q", "interactive"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Interactive));
    }

    #[test]
    fn test_precision_bounds() {
        let cli = Cli::parse_from(["keycalc", "--precision", "17", "config"]);
        assert_eq!(cli.precision, Some(MAX_PRECISION));
        assert!(Cli::try_parse_from(["keycalc", "--precision", "18", "config"]).is_err());
        assert!(Cli::try_parse_from(["keycalc", "--precision", "1000000000", "config"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["keycalc"]).is_err());
    }
}
