// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::config::CurrencyFormat;
use crate::web_app::format::format_price;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-64">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Placeholder shown when the catalog has no products
#[component]
pub fn EmptyState(
    #[prop(default = "No products yet")]
    title: &'static str,
    /// Hint below the title, e.g. how to add the first product
    #[prop(default = "")]
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-dashed border-gray-300 p-12 text-center">
            <span class="text-5xl text-gray-300">"📦"</span>
            <h3 class="mt-4 text-lg font-semibold text-gray-700">{title}</h3>
            <Show when=move || !hint.is_empty()>
                <p class="mt-2 text-sm text-gray-500">{hint}</p>
            </Show>
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "py-2 px-4 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium flex items-center justify-center";

    view! {
        <button
            type=button_type
            disabled=disabled
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "py-2 px-4 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                      transition-colors border border-gray-300 disabled:opacity-50";

    view! {
        <button
            type="button"
            disabled=disabled
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides the overlay and card. Whether it is shown is up to the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            on:keydown=handle_keydown
        >
            // Backdrop
            <div
                class="absolute inset-0 bg-slate-900/50 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-xl shadow-xl max-w-md w-full overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="p-6 border-b border-slate-100">
                    <h2 class="text-xl font-bold text-slate-800">{title}</h2>
                </div>
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Price display component
///
/// Whole currency units, display only.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: f64,
    currency: CurrencyFormat,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-lg font-bold text-blue-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format_price(price, &currency)}
        </span>
    }
}
