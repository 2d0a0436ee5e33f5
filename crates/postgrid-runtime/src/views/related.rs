use super::{ViewContext, ViewOutcome, finish, skipped};
use crate::document::Document;
use postgrid_engine::related_to;
use postgrid_types::Post;

/// Related-articles block for `post`, drawn from `posts`.
///
/// Hides the container when nothing is related.
pub fn render_related(
    ctx: &ViewContext<'_>,
    doc: &mut Document,
    posts: &[Post],
    post: &Post,
) -> ViewOutcome {
    let id = ctx.config.containers.related.as_str();
    let Some(container) = doc.container_mut(id) else {
        return skipped("related", id);
    };

    let related = related_to(posts, post, ctx.config.related_limit);
    let outcome = if related.is_empty() {
        container.clear();
        container.hide();
        ViewOutcome::Hidden
    } else {
        container.replace(ctx.renderer.related_block(&related));
        container.show();
        ViewOutcome::Rendered {
            count: related.len(),
        }
    };
    finish("related", outcome)
}
