//! Custom assertions for postgrid output.
//!
//! Operate on the JSON report printed by the render commands
//! (`outcome`, `title`, `description`, `containers`) or on raw markup.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the report's outcome kind, e.g. `"rendered"` or `"not_found"`.
pub fn assert_outcome(json: &Value, expected: &str) -> Result<()> {
    let kind = json["outcome"]["kind"]
        .as_str()
        .context("Expected 'outcome.kind' string in JSON")?;

    if kind != expected {
        anyhow::bail!("Expected outcome {}, got {}", expected, kind);
    }

    Ok(())
}

/// Markup of the container with `id` in the report.
pub fn container_content<'a>(json: &'a Value, id: &str) -> Result<&'a str> {
    let containers = json["containers"]
        .as_array()
        .context("Expected 'containers' array in JSON")?;

    containers
        .iter()
        .find(|c| c["id"].as_str() == Some(id))
        .and_then(|c| c["content"].as_str())
        .with_context(|| format!("Container {} not in report", id))
}

/// Assert the number of cards in a fragment.
pub fn assert_card_count(html: &str, expected: usize) -> Result<()> {
    let count = html.matches("class=\"blog-card\"").count();
    if count != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, count);
    }
    Ok(())
}

/// Assert cards link to the given ids, in this order.
pub fn assert_card_order(html: &str, ids: &[&str]) -> Result<()> {
    let mut last = 0;
    for id in ids {
        let needle = format!("id={}\"", id);
        let position = html[last..]
            .find(&needle)
            .with_context(|| format!("Card for {} missing or out of order", id))?;
        last += position + needle.len();
    }
    Ok(())
}

/// Assert markup never contains `needle` literally.
pub fn assert_not_contains(html: &str, needle: &str) -> Result<()> {
    if html.contains(needle) {
        anyhow::bail!("Found forbidden {:?} in:\n{}", needle, html);
    }
    Ok(())
}
