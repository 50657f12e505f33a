// web_app/storage/repository.rs - Product collection persistence
//
// The whole collection lives in one slot and is rewritten on every save.
// There is no schema versioning: anything that does not parse is a read
// error.
//
// Records that have not changed since they were read are written back with
// their exact stored text, so a save only alters the bytes of the records
// it actually touched.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::value::RawValue;

use crate::error::{CatalogError, Result, StoreError};
use crate::web_app::model::Product;

use super::store::KeyValueStore;

/// Stored text of each record as last read or written, keyed by id
type Snapshot = HashMap<String, (Product, String)>;

/// Reads and writes the product collection in a single store slot
#[derive(Debug)]
pub struct ProductRepository<S> {
    store: S,
    key: String,
    snapshot: Mutex<Snapshot>,
}

impl<S: KeyValueStore> ProductRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            snapshot: Mutex::new(HashMap::new()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the stored collection. An empty slot is an empty collection.
    pub fn load(&self) -> Result<Vec<Product>> {
        let raw = self
            .store
            .get_item(&self.key)
            .map_err(|e| CatalogError::StoreRead(e.to_string()))?;

        let Some(raw) = raw else {
            self.snapshot().clear();
            return Ok(Vec::new());
        };

        let records: Vec<&RawValue> = serde_json::from_str(&raw)?;
        let mut products = Vec::with_capacity(records.len());
        let mut snapshot = Snapshot::with_capacity(records.len());
        for record in records {
            let product: Product = serde_json::from_str(record.get())?;
            snapshot.insert(product.id.clone(), (product.clone(), record.get().to_string()));
            products.push(product);
        }

        *self.snapshot() = snapshot;
        Ok(products)
    }

    /// Replace the stored collection with `products`
    pub fn save_all(&self, products: &[Product]) -> Result<()> {
        let mut written = Snapshot::with_capacity(products.len());
        let mut raw = String::from("[");
        {
            let previous = self.snapshot();
            for (i, product) in products.iter().enumerate() {
                let text = match previous.get(&product.id) {
                    Some((stored, text)) if stored == product => text.clone(),
                    _ => serde_json::to_string(product)
                        .map_err(|e| StoreError::WriteRejected(e.to_string()))?,
                };
                if i > 0 {
                    raw.push(',');
                }
                raw.push_str(&text);
                written.insert(product.id.clone(), (product.clone(), text));
            }
        }
        raw.push(']');

        self.store.set_item(&self.key, &raw)?;
        *self.snapshot() = written;
        tracing::debug!(
            "Wrote {} products ({} bytes) to '{}'",
            products.len(),
            raw.len(),
            self.key
        );
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove_item(&self.key)?;
        self.snapshot().clear();
        Ok(())
    }

    fn snapshot(&self) -> MutexGuard<'_, Snapshot> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::ProductDraft;
    use crate::web_app::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn product(id: &str) -> Product {
        let draft = ProductDraft {
            name: format!("Product {}", id),
            price: 10.0,
            image: String::new(),
        };
        Product::new(id, &draft, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_load_empty_slot() {
        let repo = ProductRepository::new(MemoryStore::new(), "products");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_slot() {
        let store = MemoryStore::new().with_item("products", "[{\"id\": 1");
        let repo = ProductRepository::new(store, "products");
        assert!(matches!(repo.load(), Err(CatalogError::StoreRead(_))));
    }

    #[test]
    fn test_load_wrong_shape() {
        let store = MemoryStore::new().with_item("products", "{\"id\": \"1\"}");
        let repo = ProductRepository::new(store, "products");
        assert!(matches!(repo.load(), Err(CatalogError::StoreRead(_))));
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let repo = ProductRepository::new(MemoryStore::new(), "products");
        let products = vec![product("3"), product("1"), product("2")];
        repo.save_all(&products).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_save_uses_configured_key() {
        let repo = ProductRepository::new(MemoryStore::new(), "catalog");
        repo.save_all(&[product("1")]).unwrap();
        assert!(repo.store().get_item("catalog").unwrap().is_some());
        assert!(repo.store().get_item("products").unwrap().is_none());
    }

    #[test]
    fn test_save_over_quota() {
        let repo = ProductRepository::new(MemoryStore::new().with_quota(16), "products");
        let err = repo.save_all(&[product("1")]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::StoreWrite(StoreError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let repo = ProductRepository::new(MemoryStore::new(), "products");
        repo.save_all(&[product("1")]).unwrap();
        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_unchanged_records_keep_stored_text() {
        let stored = concat!(
            r#"[{"name": "Lamp", "id": "1", "price": 129, "createdAt": "2024-05-01T10:00:00Z", "sku": "L-1"},"#,
            r#"{"id":"2","name":"Pen","price":3.20,"createdAt":"2024-05-02T10:00:00.000Z"}]"#
        );
        let repo = ProductRepository::new(MemoryStore::new().with_item("products", stored), "products");
        let mut products = repo.load().unwrap();
        products[1].name = "Blue pen".to_string();
        repo.save_all(&products).unwrap();

        let written = repo.store().get_item("products").unwrap().unwrap();
        assert!(written.starts_with(
            r#"[{"name": "Lamp", "id": "1", "price": 129, "createdAt": "2024-05-01T10:00:00Z", "sku": "L-1"},"#
        ));
        assert!(written.contains(r#""name":"Blue pen","price":3.2,"#));
    }

    #[test]
    fn test_failed_write_keeps_previous_text() {
        let stored = r#"[{"id":"1","name":"Lamp","price":129,"createdAt":"2024-05-01T10:00:00Z"}]"#;
        let mut repo = ProductRepository::new(MemoryStore::new().with_item("products", stored), "products");
        let mut products = repo.load().unwrap();
        products.push(product("2"));

        repo.store_mut().set_unavailable(true);
        assert!(repo.save_all(&products).is_err());
        repo.store_mut().set_unavailable(false);

        repo.save_all(&products[..1]).unwrap();
        assert_eq!(repo.store().get_item("products").unwrap().unwrap(), stored);
    }
}
