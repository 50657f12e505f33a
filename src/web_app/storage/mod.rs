// web_app/storage/mod.rs - Persistence for the product collection
//
// - store.rs: string key/value backends (memory, browser localStorage)
// - repository.rs: JSON (de)serialization of the whole collection

pub mod repository;
pub mod store;

pub use repository::ProductRepository;
pub use store::{KeyValueStore, MemoryStore};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use store::BrowserStore;
