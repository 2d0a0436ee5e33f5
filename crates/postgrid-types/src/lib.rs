pub mod domain;
pub mod error;
pub mod markup;

pub use domain::*;
pub use error::{Error, Result};
pub use markup::{Markup, escape_html};
