use super::PostSource;
use crate::{Error, Result};
use postgrid_types::Post;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory catalog, for embedding and tests.
///
/// Counts how often it was loaded so callers can check fetch behaviour.
#[derive(Debug)]
pub struct StaticSource {
    posts: Option<Vec<Post>>,
    loads: AtomicUsize,
}

impl StaticSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Some(posts),
            loads: AtomicUsize::new(0),
        }
    }

    /// A source whose every load fails
    pub fn unavailable() -> Self {
        Self {
            posts: None,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

/// An empty catalog that loads successfully
impl Default for StaticSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PostSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<Vec<Post>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.posts
            .clone()
            .ok_or_else(|| Error::Unavailable("static source has no posts".to_string()))
    }
}
