//! keycalc CLI library
//!
//! Command-line driver for the [`keycalc`] editor: key strings, raw
//! expressions, and a raw-mode interactive display line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod input;
pub mod interactive;
pub mod logging;
pub mod session;

pub use commands::{Cli, Commands, EvalArgs, PressArgs};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use input::{InputAction, InputHandler};
pub use logging::init_subscriber;
pub use session::{evaluate_expression, Session, Step};
