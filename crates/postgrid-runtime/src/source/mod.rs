//! Post sources: where the catalog comes from.
//!
//! Every source exposes a fallible `load` and an infallible `fetch_posts`.
//! Views only ever call `fetch_posts`, so a broken source degrades to an
//! empty catalog instead of an error.

mod cached;
mod file;
mod http;
mod memory;

pub use cached::CachedSource;
pub use file::FileSource;
pub use http::{HttpSource, RetryPolicy};
pub use memory::StaticSource;

use crate::Result;
use crate::config::FetchConfig;
use postgrid_types::Post;
use std::path::Path;

pub trait PostSource: Send + Sync {
    /// Human readable location for log lines
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<Post>>;

    /// Load the catalog, collapsing any failure to an empty list
    fn fetch_posts(&self) -> Vec<Post> {
        match self.load() {
            Ok(posts) => {
                tracing::debug!(source = %self.describe(), count = posts.len(), "fetched posts");
                posts
            }
            Err(err) => {
                tracing::error!(source = %self.describe(), error = %err, "Error fetching posts");
                Vec::new()
            }
        }
    }
}

impl<S: PostSource + ?Sized> PostSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<Vec<Post>> {
        (**self).load()
    }

    fn fetch_posts(&self) -> Vec<Post> {
        (**self).fetch_posts()
    }
}

pub fn is_remote(resource: &str) -> bool {
    resource.starts_with("http://") || resource.starts_with("https://")
}

/// Pick the source for a configured resource: HTTP(S) URLs are fetched over
/// the network, anything else is a file path relative to `root`.
pub fn source_for(resource: &str, root: &Path, fetch: &FetchConfig) -> Box<dyn PostSource> {
    if is_remote(resource) {
        Box::new(HttpSource::new(resource, RetryPolicy::from(fetch)))
    } else {
        Box::new(FileSource::new(root.join(resource)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_source_for_picks_transport() {
        let fetch = FetchConfig::default();
        let root = PathBuf::from("/srv/site");

        let remote = source_for("https://blog.example/posts.json", &root, &fetch);
        assert_eq!(remote.describe(), "https://blog.example/posts.json");

        let local = source_for("posts.json", &root, &fetch);
        assert_eq!(local.describe(), "/srv/site/posts.json");

        let absolute = source_for("/data/posts.json", &root, &fetch);
        assert_eq!(absolute.describe(), "/data/posts.json");
    }

    #[test]
    fn test_boxed_source_collapses_errors() {
        let source: Box<dyn PostSource> = Box::new(StaticSource::unavailable());
        assert!(source.load().is_err());
        assert!(source.fetch_posts().is_empty());
    }
}
