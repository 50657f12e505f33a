// Component instantiation tests
// These build components under a reactive owner to check their props and
// setup logic, and render some of them to HTML. Event handlers are not
// exercised here.

use catalog_admin::config::{CatalogConfig, CurrencyFormat};
use catalog_admin::web_app::app::AuthContext;
use catalog_admin::web_app::components::*;
use catalog_admin::web_app::model::{push_notice, Notice, Product, ProductDraft, UserRole};
use chrono::{TimeZone, Utc};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

const PLACEHOLDER: &str = "https://example.com/placeholder.png";

fn product(id: &str, name: &str, price: f64) -> Product {
    let draft = ProductDraft {
        name: name.to_string(),
        price,
        image: String::new(),
    };
    Product::new(id, &draft, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
}

fn render_card(is_admin: bool) -> String {
    let owner = Owner::new();
    owner.with(|| {
        ProductCard(ProductCardProps {
            product: product("1", "Desk Lamp", 129.0),
            is_admin: Signal::stored(is_admin),
            currency: CurrencyFormat::default(),
            placeholder: PLACEHOLDER.to_string(),
            on_edit: Callback::new(|_id: String| {}),
            on_delete: Callback::new(|_id: String| {}),
        })
        .to_html()
    })
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps {
            message: "Loading products...",
        });
    });
}

#[test]
fn test_empty_state_instantiation() {
    with_runtime(|| {
        let _ = EmptyState(EmptyStateProps {
            title: "No products yet",
            hint: "",
        });
        let _ = EmptyState(EmptyStateProps {
            title: "No products yet",
            hint: "Use \"Add product\" to create the first one.",
        });
    });
}

#[test]
fn test_price_display_instantiation() {
    with_runtime(|| {
        let _ = PriceDisplay(PriceDisplayProps {
            price: 1234.5,
            currency: CurrencyFormat::default(),
            highlight: true,
        });
    });
}

#[test]
fn test_toast_list_instantiation() {
    with_runtime(|| {
        let toasts = RwSignal::new(Vec::<Notice>::new());
        toasts.update(|list| push_notice(list, Notice::success("Product added")));
        toasts.update(|list| push_notice(list, Notice::error("Failed to save product")));

        let _ = ToastList(ToastListProps { toasts });
        assert_eq!(toasts.get_untracked().len(), 2);
    });
}

#[test]
fn test_context_defaults() {
    with_runtime(|| {
        provide_context(CatalogConfig::default());
        provide_context(AuthContext::new(UserRole::from("admin")));

        let config = use_context::<CatalogConfig>().unwrap();
        let auth = use_context::<AuthContext>().unwrap();
        assert_eq!(config.storage_key, "products");
        assert!(auth.role.get_untracked().is_admin());
    });
}

#[test]
fn test_product_card_admin_controls() {
    let html = render_card(true);
    assert!(html.contains("Desk Lamp"));
    assert!(html.contains("¥129"));
    assert!(html.contains("2024-05-01"));
    assert!(html.contains(PLACEHOLDER));
    assert!(html.contains("Edit"));
    assert!(html.contains("Delete"));
}

#[test]
fn test_product_card_hides_controls_from_viewers() {
    let html = render_card(false);
    assert!(html.contains("Desk Lamp"));
    assert!(html.contains("¥129"));
    assert!(!html.contains("Edit"));
    assert!(!html.contains("Delete"));
}

#[test]
fn test_product_grid_renders_in_order() {
    with_runtime(|| {
        let html = ProductGrid(ProductGridProps {
            products: Signal::stored(vec![
                product("1", "Desk Lamp", 129.0),
                product("2", "Notebook", 15.5),
                product("3", "Pen", 3.2),
            ]),
            is_admin: Signal::stored(false),
            currency: CurrencyFormat::default(),
            placeholder: PLACEHOLDER.to_string(),
            on_edit: Callback::new(|_id: String| {}),
            on_delete: Callback::new(|_id: String| {}),
        })
        .to_html();

        let lamp = html.find("Desk Lamp").expect("lamp rendered");
        let notebook = html.find("Notebook").expect("notebook rendered");
        let pen = html.find("Pen").expect("pen rendered");
        assert!(lamp < notebook && notebook < pen);
        assert!(html.contains("¥16"));
    });
}

#[test]
fn test_form_modal_edit_mode() {
    with_runtime(|| {
        let initial = ProductDraft {
            name: "Notebook".to_string(),
            price: 15.5,
            image: String::new(),
        };
        let html = ProductFormModal(ProductFormModalProps {
            editing: true,
            initial,
            image: Signal::stored(String::new()),
            placeholder: PLACEHOLDER.to_string(),
            on_field: Callback::new(|_change| {}),
            on_submit: Callback::new(|_| {}),
            on_close: Callback::new(|_| {}),
        })
        .to_html();

        assert!(html.contains(form_title(true)));
        assert!(html.contains(submit_label(true)));
        assert!(html.contains(r#"value="Notebook""#));
        assert!(html.contains(r#"value="15.5""#));
        for field in ["name", "price", "image"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)), "missing {} input", field);
        }
        assert!(!html.contains("Product preview"));
    });
}

#[test]
fn test_form_modal_create_mode_with_preview() {
    with_runtime(|| {
        let html = ProductFormModal(ProductFormModalProps {
            editing: false,
            initial: ProductDraft::default(),
            image: Signal::stored("https://example.com/new.png".to_string()),
            placeholder: PLACEHOLDER.to_string(),
            on_field: Callback::new(|_change| {}),
            on_submit: Callback::new(|_| {}),
            on_close: Callback::new(|_| {}),
        })
        .to_html();

        assert!(html.contains(form_title(false)));
        assert!(html.contains(r#"value="0""#));
        assert!(html.contains("Product preview"));
        assert!(html.contains("https://example.com/new.png"));
    });
}
