pub mod consent;
pub mod post;
pub mod routing;

pub use consent::*;
pub use post::*;
pub use routing::*;
