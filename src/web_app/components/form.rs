// web_app/components/form.rs - Create/edit product form
//
// Inputs are seeded once from `initial` and then report every change
// upward; the manager owns the draft. Only the image preview reads the
// draft back reactively.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::web_sys::HtmlInputElement;

use super::common::{Button, ModalWrapper, SecondaryButton};
use super::product::ProductImage;
use crate::web_app::model::{DraftField, ProductDraft};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg border border-slate-300 bg-slate-50 \
                           text-slate-900 focus:ring-2 focus:ring-blue-500 \
                           focus:border-transparent transition-all outline-none";

pub fn form_title(editing: bool) -> &'static str {
    if editing {
        "Edit product"
    } else {
        "Add product"
    }
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Save changes"
    } else {
        "Add product"
    }
}

/// Product form inside a modal
#[component]
pub fn ProductFormModal(
    /// Edit mode when true, create mode otherwise
    editing: bool,
    /// Values the inputs start with
    initial: ProductDraft,
    /// Current draft image URL, for the preview
    #[prop(into)]
    image: Signal<String>,
    #[prop(into)]
    placeholder: String,
    on_field: Callback<(DraftField, String)>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    // Each input is named after the draft field it edits
    let handle_input = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        match DraftField::from_name(&input.name()) {
            Some(field) => on_field.run((field, input.value())),
            None => tracing::warn!("Form input '{}' maps to no draft field", input.name()),
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <ModalWrapper title=form_title(editing) on_close=on_close>
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="name" class="block text-sm font-medium text-slate-700 mb-1">
                        "Product name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        name=DraftField::Name.to_string()
                        value=initial.name.clone()
                        placeholder="Enter a product name"
                        class=INPUT_CLASS
                        required=true
                        on:input=handle_input
                    />
                </div>

                <div>
                    <label for="price" class="block text-sm font-medium text-slate-700 mb-1">
                        "Unit price"
                    </label>
                    <input
                        type="number"
                        id="price"
                        name=DraftField::Price.to_string()
                        value=initial.price.to_string()
                        placeholder="Enter a unit price"
                        min="0"
                        step="0.01"
                        class=INPUT_CLASS
                        required=true
                        on:input=handle_input
                    />
                </div>

                <div>
                    <label for="image" class="block text-sm font-medium text-slate-700 mb-1">
                        "Image URL"
                    </label>
                    <input
                        type="text"
                        id="image"
                        name=DraftField::Image.to_string()
                        value=initial.image.clone()
                        placeholder="Enter an image URL"
                        class=INPUT_CLASS
                        on:input=handle_input
                    />
                    <p class="text-xs text-slate-500 mt-1">
                        "Leave empty to use the default image"
                    </p>
                </div>

                // Preview only once a URL has been entered
                {move || {
                    let src = image.get();
                    (!src.is_empty()).then(|| view! {
                        <div class="rounded-lg overflow-hidden border border-slate-200">
                            <ProductImage
                                src=src
                                alt="Product preview"
                                placeholder=placeholder.clone()
                                class="w-full h-40 object-cover"
                            />
                        </div>
                    })
                }}

                <div class="flex space-x-3 pt-2">
                    <SecondaryButton on_click=on_close class="flex-1">
                        "Cancel"
                    </SecondaryButton>
                    <Button button_type="submit" class="flex-1">
                        {submit_label(editing)}
                    </Button>
                </div>
            </form>
        </ModalWrapper>
    }
}
