// web_app/components/product.rs - Product display components
//
// - ProductImage: image with placeholder fallback
// - ProductCard: grid card with admin-only edit/delete controls
// - ProductGrid: grid layout for the whole catalog

use leptos::prelude::*;
use leptos::web_sys::HtmlImageElement;

use super::common::PriceDisplay;
use crate::config::CurrencyFormat;
use crate::web_app::format::display_image;
use crate::web_app::model::Product;

/// Image that swaps to `placeholder` when empty or when loading fails
#[component]
pub fn ProductImage(
    #[prop(into)]
    src: String,
    #[prop(into)]
    alt: String,
    #[prop(into)]
    placeholder: String,
    #[prop(default = "w-full h-48 object-cover")]
    class: &'static str,
) -> impl IntoView {
    let shown = display_image(&src, &placeholder).to_string();

    view! {
        <img
            src=shown
            alt=alt
            class=class
            on:error=move |ev| {
                let img: HtmlImageElement = event_target(&ev);
                // Guard against a broken placeholder looping forever
                if img.src() != placeholder {
                    img.set_src(&placeholder);
                }
            }
        />
    }
}

/// Product card for the catalog grid
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)]
    is_admin: Signal<bool>,
    currency: CurrencyFormat,
    #[prop(into)]
    placeholder: String,
    /// Called with the product id
    on_edit: Callback<String>,
    /// Called with the product id
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = product.id.clone();
    let delete_id = product.id.clone();
    let created = product.created_at.format("%Y-%m-%d").to_string();

    view! {
        <div class="bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow border border-gray-100 overflow-hidden flex flex-col">
            <div class="h-48 bg-gray-100 overflow-hidden">
                <ProductImage
                    src=product.image.clone()
                    alt=product.name.clone()
                    placeholder=placeholder
                />
            </div>

            <div class="p-4 flex flex-col flex-1">
                <h3 class="font-semibold text-gray-900 mb-1 line-clamp-2">
                    {product.name.clone()}
                </h3>
                <PriceDisplay price=product.price currency=currency highlight=true />
                <span class="mt-1 text-xs text-gray-400">"Added " {created}</span>

                <Show when=move || is_admin.get()>
                    <div class="mt-4 pt-3 border-t border-gray-100 flex gap-2">
                        <button
                            class="flex-1 py-1.5 text-sm text-blue-600 bg-blue-50 rounded-lg hover:bg-blue-100 transition-colors"
                            on:click={
                                let id = edit_id.clone();
                                move |_| on_edit.run(id.clone())
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="flex-1 py-1.5 text-sm text-red-600 bg-red-50 rounded-lg hover:bg-red-100 transition-colors"
                            on:click={
                                let id = delete_id.clone();
                                move |_| on_delete.run(id.clone())
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Grid of product cards in insertion order
#[component]
pub fn ProductGrid(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    #[prop(into)]
    is_admin: Signal<bool>,
    currency: CurrencyFormat,
    #[prop(into)]
    placeholder: String,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <For
                each=move || products.get()
                key=|product| (product.id.clone(), product.updated_at)
                children=move |product| {
                    view! {
                        <ProductCard
                            product=product
                            is_admin=is_admin
                            currency=currency.clone()
                            placeholder=placeholder.clone()
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }
                }
            />
        </div>
    }
}
