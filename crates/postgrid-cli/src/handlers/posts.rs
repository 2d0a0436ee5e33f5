use super::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use postgrid_runtime::Site;
use serde::Serialize;

#[derive(Serialize)]
struct PostRow<'a> {
    id: &'a str,
    category: &'a str,
    date: &'a str,
    title: &'a str,
    read_time: u32,
}

pub fn handle(site: &Site, format: OutputFormat) -> Result<()> {
    let renderer = site.renderer();
    let rows: Vec<PostRow<'_>> = site
        .posts()
        .iter()
        .map(|post| PostRow {
            id: &post.id,
            category: &post.category,
            date: &post.date,
            title: &post.title,
            read_time: renderer.read_time(post),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Plain => {
            for row in &rows {
                println!("{}\t{}\t{}\t{}", row.id, row.category, row.date, row.title);
            }
            Ok(())
        }
    }
}
