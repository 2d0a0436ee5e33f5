use super::print_json;
use crate::args::ConsentCommand;
use crate::types::OutputFormat;
use anyhow::Result;
use postgrid_runtime::ConsentStore;
use serde_json::json;

pub fn handle(store: &ConsentStore, command: ConsentCommand, format: OutputFormat) -> Result<()> {
    match command {
        ConsentCommand::Show => {}
        ConsentCommand::Accept => store.accept()?,
        ConsentCommand::Decline => store.decline()?,
    }

    let flag = store.load()?;
    match format {
        OutputFormat::Json => print_json(&json!({
            "consent": flag,
            "needs_prompt": flag.needs_prompt(),
            "path": store.path().display().to_string(),
        })),
        OutputFormat::Plain => {
            println!("{}", flag);
            Ok(())
        }
    }
}
