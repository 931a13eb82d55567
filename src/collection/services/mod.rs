//! Collection store service.

mod store;

pub use store::{CollectionResult, CollectionStore};
