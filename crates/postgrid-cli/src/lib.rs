// postgrid renders one page load at a time: each invocation opens the site,
// builds a fresh page document declaring every configured container, runs one
// view into it and prints the result. Fetch failures never fail the command;
// they show up as empty or not-found states. Only configuration and local IO
// problems exit non-zero.

mod args;
mod commands;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, ConsentCommand};
pub use commands::run;
