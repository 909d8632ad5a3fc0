//! XML plumbing shared by every operation.
//!
//! - [`to_canonical`] / [`to_external`] convert between carrier element
//!   names and snake_case keys
//! - [`Bag`] and [`Node`] describe free-form carrier structures
//! - [`XmlWriter`] builds request documents
//! - [`NormalizedResponse`] is the parsed, key-normalized response tree

mod error;
mod keys;
mod reader;
mod tree;
mod writer;

pub use error::XmlError;
pub use keys::{to_canonical, to_external};
pub use reader::{first, path, NormalizedResponse};
pub use tree::{Bag, Node, NotAnObject};
pub use writer::XmlWriter;
