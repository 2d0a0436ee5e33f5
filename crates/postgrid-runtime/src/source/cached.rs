use super::PostSource;
use crate::Result;
use once_cell::sync::OnceCell;
use postgrid_types::Post;

/// Fetch-once wrapper: the first `fetch_posts` result, empty or not, is kept
/// for the lifetime of the value.
pub struct CachedSource<S> {
    inner: S,
    posts: OnceCell<Vec<Post>>,
}

impl<S: PostSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            posts: OnceCell::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn is_loaded(&self) -> bool {
        self.posts.get().is_some()
    }

    /// Borrow the cached catalog, fetching it on first use
    pub fn posts(&self) -> &[Post] {
        self.posts.get_or_init(|| self.inner.fetch_posts())
    }
}

impl<S: PostSource> PostSource for CachedSource<S> {
    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn load(&self) -> Result<Vec<Post>> {
        if let Some(posts) = self.posts.get() {
            return Ok(posts.clone());
        }
        let posts = self.inner.load()?;
        Ok(self.posts.get_or_init(|| posts).clone())
    }

    fn fetch_posts(&self) -> Vec<Post> {
        self.posts().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: id.to_uppercase(),
            summary: String::new(),
            content: None,
            image: String::new(),
            category: "Software".to_string(),
            subcategory: None,
            date: "2025-01-01".to_string(),
            read_time: None,
            author: None,
        }
    }

    #[test]
    fn test_fetches_once() {
        let cached = CachedSource::new(StaticSource::new(vec![post("a"), post("b")]));
        assert!(!cached.is_loaded());

        assert_eq!(cached.fetch_posts().len(), 2);
        assert_eq!(cached.fetch_posts().len(), 2);
        assert_eq!(cached.posts().len(), 2);
        assert_eq!(cached.inner().load_count(), 1);
    }

    #[test]
    fn test_failure_is_cached_as_empty() {
        let cached = CachedSource::new(StaticSource::unavailable());
        assert!(cached.fetch_posts().is_empty());
        assert!(cached.fetch_posts().is_empty());
        assert!(cached.is_loaded());
        assert_eq!(cached.inner().load_count(), 1);
    }

    #[test]
    fn test_load_propagates_error_until_success() {
        let cached = CachedSource::new(StaticSource::unavailable());
        assert!(cached.load().is_err());
        assert!(!cached.is_loaded());
    }
}
