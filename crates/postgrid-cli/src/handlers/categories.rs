use super::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use postgrid_engine::categories;
use postgrid_runtime::Site;

pub fn handle(site: &Site, format: OutputFormat) -> Result<()> {
    let counts = categories(site.posts());

    match format {
        OutputFormat::Json => print_json(&counts),
        OutputFormat::Plain => {
            for entry in &counts {
                println!("{}\t{}", entry.name, entry.count);
            }
            Ok(())
        }
    }
}
