// Engine module - pure catalog logic (filtering, read time, sanitising, rendering)
// This layer sits between post records (types) and the view controllers (runtime)

pub mod date;
pub mod filter;
pub mod read_time;
pub mod render;
pub mod routing;
pub mod sanitize;

pub use date::format_date;
pub use filter::{
    CategoryCount, DEFAULT_RELATED_LIMIT, categories, filter_by_category, filter_by_search,
    find_post, related_to,
};
pub use read_time::{ReadTimePolicy, strip_markup, word_count};
pub use render::{EmptyState, NotFound, RenderOptions, Renderer, category_class, empty_state};
pub use routing::{article_href, resolve_id};
pub use sanitize::sanitize_content;
