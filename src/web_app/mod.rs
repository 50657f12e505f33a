// web_app/mod.rs - Root module for the catalog web application
//
// Architecture:
// - model/: Shared data types (products, form draft, roles, notices)
// - storage/: Key/value backends and the product repository
// - manager.rs: Catalog state and actions, free of any UI code
// - format.rs: Price and image display helpers
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod format;
pub mod manager;
pub mod model;
pub mod storage;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
