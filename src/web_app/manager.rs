// web_app/manager.rs - Catalog state and actions
//
// `CatalogManager` owns the in-memory product list, the load state and the
// form overlay state. It has no UI dependency: the current role is held
// explicitly and notifications go through a `Notifier` passed to each
// action, so the whole lifecycle can be driven from plain tests.
//
// Persistence always happens before the in-memory list is replaced, so a
// failed write leaves the previous state intact.

use chrono::{DateTime, SubsecRound, Utc};

use crate::error::{CatalogError, Result};
use crate::web_app::model::{
    DraftField, FormMode, FormState, LoadState, Notice, Product, ProductDraft, UserRole,
};
use crate::web_app::storage::{KeyValueStore, ProductRepository};

pub const MSG_LOAD_FAILED: &str = "Failed to load products";
pub const MSG_INVALID_INPUT: &str = "Please enter a product name and a price above zero";
pub const MSG_PRODUCT_ADDED: &str = "Product added";
pub const MSG_PRODUCT_UPDATED: &str = "Product updated";
pub const MSG_SAVE_FAILED: &str = "Failed to save product";
pub const MSG_PRODUCT_DELETED: &str = "Product deleted";
pub const MSG_DELETE_FAILED: &str = "Failed to delete product";
pub const MSG_PRODUCT_MISSING: &str = "This product no longer exists";

/// Fire-and-forget message surface
pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::error(message));
    }
}

impl<F: Fn(Notice)> Notifier for F {
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// State and actions of the catalog screen
#[derive(Debug)]
pub struct CatalogManager<S> {
    repo: ProductRepository<S>,
    products: Vec<Product>,
    load_state: LoadState,
    form: FormState,
    role: UserRole,
}

impl<S: KeyValueStore> CatalogManager<S> {
    pub fn new(repo: ProductRepository<S>, role: UserRole) -> Self {
        Self {
            repo,
            products: Vec::new(),
            load_state: LoadState::NotLoaded,
            form: FormState::Closed,
            role,
        }
    }

    /// Products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// True until the first load has finished
    pub fn is_loading(&self) -> bool {
        self.load_state != LoadState::Loaded
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn set_role(&mut self, role: UserRole) {
        if role != self.role {
            tracing::info!("Catalog role changed from '{}' to '{}'", self.role, role);
            self.role = role;
        }
    }

    pub fn repository(&self) -> &ProductRepository<S> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut ProductRepository<S> {
        &mut self.repo
    }

    /// Read the collection from the store, replacing the in-memory list.
    ///
    /// A malformed slot empties the list and sends one error notice.
    pub fn load(&mut self, notifier: &impl Notifier) -> Result<()> {
        self.load_state = LoadState::Loading;
        let result = self.repo.load();
        self.load_state = LoadState::Loaded;

        match result {
            Ok(products) => {
                tracing::info!("Loaded {} products from '{}'", products.len(), self.repo.key());
                self.products = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load products: {}", e);
                self.products.clear();
                notifier.error(MSG_LOAD_FAILED);
                Err(e)
            }
        }
    }

    /// Open the form: blank for `None`, pre-filled for edit otherwise
    pub fn open_form(&mut self, product: Option<&Product>) -> Result<()> {
        self.require_admin("open the product form")?;

        self.form = match product {
            Some(product) => FormState::Open {
                mode: FormMode::Edit(product.id.clone()),
                draft: ProductDraft::from_product(product),
            },
            None => FormState::Open {
                mode: FormMode::Create,
                draft: ProductDraft::default(),
            },
        };
        Ok(())
    }

    /// Open the edit form for the product with `id`
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let product = self
            .product(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.open_form(Some(&product))
    }

    /// Dismiss the form, discarding the draft
    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    /// Update one draft field from raw input. Ignored when the form is closed.
    pub fn update_field(&mut self, field: DraftField, raw: &str) {
        if let FormState::Open { draft, .. } = &mut self.form {
            draft.set_field(field, raw);
        }
    }

    /// Submit the open form, stamping with the current time
    pub fn save(&mut self, notifier: &impl Notifier) -> Result<Product> {
        self.save_at(Utc::now(), notifier)
    }

    /// Submit the open form, stamping with `now`
    ///
    /// Returns the created or updated product.
    pub fn save_at(&mut self, now: DateTime<Utc>, notifier: &impl Notifier) -> Result<Product> {
        self.require_admin("save a product")?;

        let (mode, draft) = match &self.form {
            FormState::Open { mode, draft } => (mode.clone(), draft.clone()),
            FormState::Closed => return Err(CatalogError::FormClosed),
        };

        if let Err(e) = draft.validate() {
            tracing::warn!("Rejected product form: {}", e);
            notifier.error(MSG_INVALID_INPUT);
            return Err(e.into());
        }

        // Stored timestamps carry milliseconds only
        let now = now.trunc_subsecs(3);
        let mut updated = self.products.clone();

        let (saved, message) = match mode {
            FormMode::Edit(id) => {
                let Some(product) = updated.iter_mut().find(|p| p.id == id) else {
                    tracing::warn!("Product {} disappeared while being edited", id);
                    notifier.error(MSG_PRODUCT_MISSING);
                    return Err(CatalogError::NotFound(id));
                };
                draft.apply_to(product);
                product.updated_at = Some(now);
                (product.clone(), MSG_PRODUCT_UPDATED)
            }
            FormMode::Create => {
                let product = Product::new(self.next_id(now), &draft, now);
                updated.push(product.clone());
                (product, MSG_PRODUCT_ADDED)
            }
        };

        if let Err(e) = self.repo.save_all(&updated) {
            tracing::error!("Failed to save product {}: {}", saved.id, e);
            notifier.error(MSG_SAVE_FAILED);
            return Err(e);
        }

        tracing::info!("{}: {} ({})", message, saved.name, saved.id);
        self.products = updated;
        self.form = FormState::Closed;
        notifier.success(message);
        Ok(saved)
    }

    /// Delete the product with `id` once `confirm` approves it.
    ///
    /// Returns `Ok(false)` when the confirmation was declined.
    pub fn delete(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&Product) -> bool,
        notifier: &impl Notifier,
    ) -> Result<bool> {
        self.require_admin("delete a product")?;

        let Some(target) = self.product(id) else {
            notifier.error(MSG_PRODUCT_MISSING);
            return Err(CatalogError::NotFound(id.to_string()));
        };

        if !confirm(target) {
            tracing::debug!("Delete of {} cancelled", id);
            return Ok(false);
        }

        let updated: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();

        if let Err(e) = self.repo.save_all(&updated) {
            tracing::error!("Failed to delete product {}: {}", id, e);
            notifier.error(MSG_DELETE_FAILED);
            return Err(e);
        }

        tracing::info!("Deleted product {}", id);
        self.products = updated;
        notifier.success(MSG_PRODUCT_DELETED);
        Ok(true)
    }

    fn require_admin(&self, action: &str) -> Result<()> {
        if self.role.is_admin() {
            Ok(())
        } else {
            tracing::warn!("Role '{}' may not {}", self.role, action);
            Err(CatalogError::NotPermitted)
        }
    }

    /// Epoch milliseconds of `now`, bumped until unused
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.products.iter().any(|p| p.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
