//! Testing infrastructure for postgrid integration tests.
//!
//! - `TestWorld`: an isolated site directory with a catalog and config
//! - `assertions`: checks over rendered markup and JSON reports
//! - `fixtures`: sample catalogs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
