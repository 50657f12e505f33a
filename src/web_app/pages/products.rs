// web_app/pages/products.rs - Product management page
//
// Wires a `CatalogManager` backed by browser storage into the view.
// The manager lives in one signal; the view reads narrow memos of it so
// typing in the form does not rebuild the grid or the modal.

use leptos::prelude::*;

use crate::config::CatalogConfig;
use crate::web_app::app::AuthContext;
use crate::web_app::components::*;
use crate::web_app::manager::CatalogManager;
use crate::web_app::model::*;
use crate::web_app::storage::{BrowserStore, ProductRepository};

/// Prompt shown before a product is removed
pub fn delete_prompt(product: &Product) -> String {
    format!("Delete \"{}\"? This cannot be undone.", product.name)
}

/// Hint under the empty catalog placeholder
pub fn empty_hint(is_admin: bool) -> &'static str {
    if is_admin {
        "Use \"Add product\" to create the first one."
    } else {
        "No products are available."
    }
}

fn confirm_delete(product: &Product) -> bool {
    window()
        .confirm_with_message(&delete_prompt(product))
        .unwrap_or(false)
}

/// Product list with admin-only create, edit and delete
#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let auth = use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(UserRole::default()));

    let toasts = RwSignal::new(Vec::<Notice>::new());
    let notify = move |notice: Notice| toasts.update(|list| push_notice(list, notice));

    let manager = RwSignal::new(CatalogManager::new(
        ProductRepository::new(BrowserStore, config.storage_key.clone()),
        auth.role.get_untracked(),
    ));

    // Load once on mount (client only)
    Effect::new(move |_| {
        manager.update(|m| {
            let _ = m.load(&notify);
        });
    });

    // Follow role changes from the identity collaborator
    Effect::new(move |_| {
        let role = auth.role.get();
        manager.update(|m| m.set_role(role));
    });

    let is_loading = Memo::new(move |_| manager.with(|m| m.is_loading()));
    let is_admin = Memo::new(move |_| manager.with(|m| m.is_admin()));
    let products = Memo::new(move |_| manager.with(|m| m.products().to_vec()));
    let form_open = Memo::new(move |_| manager.with(|m| m.form().is_open()));
    let draft_image = Memo::new(move |_| {
        manager.with(|m| {
            m.form()
                .draft()
                .map(|d| d.image.clone())
                .unwrap_or_default()
        })
    });

    let on_add = Callback::new(move |()| {
        manager.update(|m| {
            let _ = m.open_form(None);
        });
    });

    let on_edit = Callback::new(move |id: String| {
        manager.update(|m| {
            let _ = m.open_edit(&id);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        manager.update(|m| {
            let _ = m.delete(&id, confirm_delete, &notify);
        });
    });

    let on_field = Callback::new(move |(field, value): (DraftField, String)| {
        manager.update(|m| m.update_field(field, &value));
    });

    let on_submit = Callback::new(move |()| {
        manager.update(|m| {
            let _ = m.save(&notify);
        });
    });

    let on_close = Callback::new(move |()| {
        manager.update(|m| m.close_form());
    });

    let currency = config.currency.clone();
    let placeholder = config.placeholder_image.clone();
    let modal_placeholder = config.placeholder_image.clone();

    view! {
        <div class="space-y-6 p-4 max-w-7xl mx-auto">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                <h1 class="text-2xl font-bold text-slate-800 mb-2 md:mb-0">
                    "Product Management"
                </h1>

                <Show when=move || is_admin.get()>
                    <Button on_click=on_add>
                        <span class="mr-2">"+"</span>
                        "Add product"
                    </Button>
                </Show>
            </div>

            {move || {
                if is_loading.get() {
                    view! { <Loading message="Loading products..." /> }.into_any()
                } else if products.with(|p| p.is_empty()) {
                    view! { <EmptyState hint=empty_hint(is_admin.get()) /> }.into_any()
                } else {
                    view! {
                        <ProductGrid
                            products=products
                            is_admin=is_admin
                            currency=currency.clone()
                            placeholder=placeholder.clone()
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }
                    .into_any()
                }
            }}

            // Form overlay; rebuilt only when it opens or closes
            {move || {
                form_open.get().then(|| {
                    let (editing, initial) = manager.with_untracked(|m| {
                        (
                            m.form().is_editing(),
                            m.form().draft().cloned().unwrap_or_default(),
                        )
                    });
                    view! {
                        <ProductFormModal
                            editing=editing
                            initial=initial
                            image=draft_image
                            placeholder=modal_placeholder.clone()
                            on_field=on_field
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                })
            }}

            <ToastList toasts=toasts />
        </div>
    }
}
