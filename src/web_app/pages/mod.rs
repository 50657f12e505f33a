// web_app/pages/mod.rs - Page components module
//
// - ProductsPage: product catalog management

pub mod products;

// Re-export page components
pub use products::ProductsPage;
