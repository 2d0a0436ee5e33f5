use postgrid_types::Post;
use serde::Serialize;

pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Posts whose category matches `category` case-insensitively, in input order
pub fn filter_by_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.is_in_category(category))
        .collect()
}

/// Posts whose `"{title} {summary} {category}"` contains `query`, ignoring case.
///
/// An empty query is "no filter" and returns every post.
pub fn filter_by_search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    if query.is_empty() {
        return posts.iter().collect();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| search_text(post).contains(&needle))
        .collect()
}

fn search_text(post: &Post) -> String {
    format!("{} {} {}", post.title, post.summary, post.category).to_lowercase()
}

/// Other posts in the same category as `post`, first `limit` in collection order
pub fn related_to<'a>(posts: &'a [Post], post: &Post, limit: usize) -> Vec<&'a Post> {
    let key = post.category_key();
    posts
        .iter()
        .filter(|candidate| candidate.id != post.id && candidate.category_key() == key)
        .take(limit)
        .collect()
}

/// First post with exactly this id
pub fn find_post<'a>(posts: &'a [Post], id: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Spelling of the first post seen in this category
    pub name: String,
    pub count: usize,
}

/// Distinct categories (case-insensitive) in first-seen order
pub fn categories(posts: &[Post]) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = Vec::new();
    for post in posts {
        let key = post.category_key();
        match out.iter_mut().find(|c| c.name.to_lowercase() == key) {
            Some(existing) => existing.count += 1,
            None => out.push(CategoryCount {
                name: post.category.clone(),
                count: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, category: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            summary: format!("About {}", title),
            content: None,
            image: format!("/img/{}.jpg", id),
            category: category.to_string(),
            subcategory: None,
            date: "2025-01-01".to_string(),
            read_time: None,
            author: None,
        }
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    fn catalog() -> Vec<Post> {
        vec![
            post("a", "GPU roundup", "Hardware"),
            post("b", "Linux tricks", "Software"),
            post("c", "RAM timings", "hardware"),
            post("d", "Pixel review", "Mobile"),
            post("e", "Keyboard switches", "HARDWARE"),
            post("f", "Monitor calibration", "Hardware"),
        ]
    }

    #[test]
    fn test_category_filter_ignores_case_and_keeps_order() {
        let posts = catalog();
        assert_eq!(
            ids(&filter_by_category(&posts, "hardware")),
            vec!["a", "c", "e", "f"]
        );
        assert_eq!(
            ids(&filter_by_category(&posts, "HardWare")),
            vec!["a", "c", "e", "f"]
        );
        assert!(filter_by_category(&posts, "Gaming").is_empty());
    }

    #[test]
    fn test_search_empty_query_is_identity() {
        let posts = catalog();
        let found = filter_by_search(&posts, "");
        assert_eq!(found.len(), posts.len());
        assert_eq!(ids(&found), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_search_matches_title_summary_and_category() {
        let posts = catalog();
        assert_eq!(ids(&filter_by_search(&posts, "linux")), vec!["b"]);
        assert_eq!(ids(&filter_by_search(&posts, "ABOUT PIXEL")), vec!["d"]);
        assert_eq!(ids(&filter_by_search(&posts, "mobile")), vec!["d"]);
        assert!(filter_by_search(&posts, "quantum").is_empty());
    }

    #[test]
    fn test_search_spans_field_boundaries() {
        // title and summary are joined by a single space
        let posts = vec![post("x", "Fast", "Software")];
        assert_eq!(ids(&filter_by_search(&posts, "fast about")), vec!["x"]);
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let posts = catalog();
        let current = &posts[0];
        let related = related_to(&posts, current, DEFAULT_RELATED_LIMIT);

        assert_eq!(ids(&related), vec!["c", "e", "f"]);
        assert!(related.iter().all(|p| p.id != current.id));
        assert!(related.iter().all(|p| p.is_in_category(&current.category)));

        assert_eq!(ids(&related_to(&posts, current, 1)), vec!["c"]);
        assert!(related_to(&posts, &posts[1], 3).is_empty());
    }

    #[test]
    fn test_related_excludes_duplicate_ids() {
        let mut posts = catalog();
        posts.push(post("a", "GPU roundup (copy)", "Hardware"));
        let related = related_to(&posts, &posts[0], 10);
        assert!(related.iter().all(|p| p.id != "a"));
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let mut posts = catalog();
        posts.push(post("b", "Second b", "Software"));
        let found = find_post(&posts, "b").map(|p| p.title.as_str());
        assert_eq!(found, Some("Linux tricks"));
        assert!(find_post(&posts, "B").is_none());
        assert!(find_post(&posts, "zzz").is_none());
    }

    #[test]
    fn test_categories_group_case_insensitively() {
        let posts = catalog();
        let cats = categories(&posts);
        assert_eq!(
            cats,
            vec![
                CategoryCount {
                    name: "Hardware".to_string(),
                    count: 4
                },
                CategoryCount {
                    name: "Software".to_string(),
                    count: 1
                },
                CategoryCount {
                    name: "Mobile".to_string(),
                    count: 1
                },
            ]
        );
    }
}
