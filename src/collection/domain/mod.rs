//! Domain types for the collection store.

mod error;
mod merge;

pub use error::CollectionError;
pub use merge::Merge;
