use super::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use postgrid_runtime::{Container, Document, Site, ViewOutcome};
use serde::Serialize;

/// The view to run and what it needs
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Grid,
    Category(&'a str),
    Search(&'a str),
    /// Location of the article page
    Article(&'a str),
}

impl Page<'_> {
    fn location(&self) -> &str {
        match self {
            Page::Article(location) => *location,
            Page::Grid | Page::Category(_) | Page::Search(_) => "/",
        }
    }
}

#[derive(Serialize)]
struct RenderReport<'a> {
    outcome: ViewOutcome,
    location: &'a str,
    title: &'a str,
    description: Option<&'a str>,
    containers: Vec<&'a Container>,
}

pub fn handle(site: &Site, page: Page<'_>, format: OutputFormat) -> Result<()> {
    let mut doc = site.document(page.location());
    let outcome = match page {
        Page::Grid => site.render_grid(&mut doc),
        Page::Category(name) => site.render_category(&mut doc, name),
        Page::Search(query) => site.render_search(&mut doc, query),
        Page::Article(_) => site.render_article(&mut doc),
    };

    match format {
        OutputFormat::Json => print_json(&report(&doc, outcome)),
        OutputFormat::Plain => {
            for container in visible(&doc) {
                print!("{}", container.content);
            }
            Ok(())
        }
    }
}

/// Containers a visitor would see: filled and not hidden
fn visible(doc: &Document) -> Vec<&Container> {
    doc.containers()
        .iter()
        .filter(|c| !c.hidden && !c.content.is_empty())
        .collect()
}

fn report(doc: &Document, outcome: ViewOutcome) -> RenderReport<'_> {
    RenderReport {
        outcome,
        location: doc.location(),
        title: doc.title(),
        description: doc.description(),
        containers: visible(doc),
    }
}
