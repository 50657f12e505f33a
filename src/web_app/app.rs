// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, shared context, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::CatalogConfig;
use crate::web_app::model::UserRole;
use crate::web_app::pages::ProductsPage;
use crate::web_app::storage::{BrowserStore, KeyValueStore};

/// Current user's role, supplied to pages as context.
///
/// Pages only branch on it; nothing here enforces anything.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub role: RwSignal<UserRole>,
}

impl AuthContext {
    pub fn new(role: UserRole) -> Self {
        Self {
            role: RwSignal::new(role),
        }
    }
}

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Catalog config and role context
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let auth = AuthContext::new(UserRole::default());
    provide_context(config.clone());
    provide_context(auth);

    // The role collaborator leaves the role in browser storage
    let role_key = config.role_key.clone();
    Effect::new(move |_| match BrowserStore.get_item(&role_key) {
        Ok(Some(raw)) => auth.role.set(UserRole::from(raw.as_str())),
        Ok(None) => tracing::debug!("No role stored under '{}'", role_key),
        Err(e) => tracing::warn!("Could not read role: {}", e),
    });

    view! {
        <Title text="Product Management" />
        <Meta name="description" content="Create, edit and remove catalog products" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/catalog_admin.css" />

        <Router>
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/products"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Products"
                </a>
            </div>
        </div>
    }
}
