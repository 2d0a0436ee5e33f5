use super::{ViewContext, ViewOutcome, fill_cards, finish, skipped};
use crate::document::Document;
use crate::sequencer::RequestSequencer;
use postgrid_engine::{EmptyState, filter_by_search};
use postgrid_types::Post;

/// Search results in the grid container.
///
/// A token is issued before fetching; if another search was issued by the
/// time the catalog arrives, this result is dropped and the page is left as
/// the newer search leaves it.
pub fn render_search(
    ctx: &ViewContext<'_>,
    doc: &mut Document,
    sequencer: &RequestSequencer,
    query: &str,
) -> ViewOutcome {
    let id = ctx.config.containers.grid.as_str();
    if doc.container(id).is_none() {
        return skipped("search", id);
    }

    let token = sequencer.issue();
    let posts = ctx.source.fetch_posts();
    if !sequencer.is_current(token) {
        tracing::debug!(token = token.value(), query, "discarding superseded search");
        return finish("search", ViewOutcome::Stale);
    }

    let Some(container) = doc.container_mut(id) else {
        return skipped("search", id);
    };
    let query = query.trim().to_lowercase();
    let outcome = if query.is_empty() {
        let all: Vec<&Post> = posts.iter().collect();
        fill_cards(container, ctx.renderer, &all, EmptyState::NoArticles)
    } else {
        let matching = filter_by_search(&posts, &query);
        fill_cards(container, ctx.renderer, &matching, EmptyState::NoSearchResults)
    };
    finish("search", outcome)
}
