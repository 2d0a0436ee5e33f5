pub mod categories;
pub mod config;
pub mod consent;
pub mod posts;
pub mod render;

pub use render::Page;

use anyhow::Result;
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
