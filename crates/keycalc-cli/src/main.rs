//! keycalc: keystroke-driven calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keycalc press "5+3="              # prints 8
//! keycalc press --steps "4+*2="     # prints the display after each key
//! keycalc eval "(1+2)*3"            # prints 9
//! keycalc --precision 2 eval "2/3"  # prints 0.67
//! keycalc interactive               # live display line, q to quit
//! ```

use clap::Parser;
use keycalc_cli::{
    evaluate_expression, init_subscriber, interactive, Cli, CliConfig, CliResult, Commands,
    EvalArgs, PressArgs, Session,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_subscriber(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    debug!(?config, "effective configuration");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Commands::Press(args) => run_press(&config, args, &mut stdout),
        Commands::Eval(args) => run_eval(&config, args, &mut stdout),
        Commands::Interactive => {
            drop(stdout);
            interactive::run(&config)
        }
        Commands::Config => run_config(&config, &mut stdout),
    }
}

/// Defaults, then the config file, then flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let base = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };
    Ok(base.with_overrides(cli.precision, cli.steps()))
}

fn run_press(config: &CliConfig, args: &PressArgs, out: &mut impl Write) -> CliResult<()> {
    let mut session = Session::new(config);
    let steps = session.type_keys(&args.keys)?;

    if config.echo_steps && !steps.is_empty() {
        for step in steps {
            writeln!(out, "{step}")?;
        }
    } else {
        writeln!(out, "{}", session.display())?;
    }
    Ok(())
}

fn run_eval(config: &CliConfig, args: &EvalArgs, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "{}", evaluate_expression(&args.expr, config))?;
    Ok(())
}

fn run_config(config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    write!(out, "{}", config.to_yaml()?)?;
    Ok(())
}
