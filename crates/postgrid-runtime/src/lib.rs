pub mod config;
pub mod consent;
pub mod document;
pub mod error;
pub mod sequencer;
pub mod site;
pub mod source;
pub mod views;

pub use config::{ContainerIds, FetchConfig, SiteConfig, resolve_config_path, resolve_data_dir};
pub use consent::ConsentStore;
pub use document::{Container, Document, Metadata};
pub use error::{Error, Result};
pub use sequencer::{RequestSequencer, RequestToken};
pub use site::Site;
pub use source::{
    CachedSource, FileSource, HttpSource, PostSource, RetryPolicy, StaticSource, source_for,
};
pub use views::{ViewContext, ViewOutcome};
