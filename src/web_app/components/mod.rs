// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - product.rs: Product display components (ProductCard, ProductGrid)
// - form.rs: Create/edit product form modal
// - toast.rs: Notification list

pub mod common;
pub mod form;
pub mod product;
pub mod toast;

// Re-export commonly used components for convenience
pub use common::*;
pub use form::*;
pub use product::*;
pub use toast::*;
