// common/mod.rs - Shared helpers for catalog integration tests
//
// - RecordingNotifier: captures notices so tests can count them
// - Fixtures: a small stored catalog in the browser JSON shape
// - Builders for managers over an in-memory store

#![allow(dead_code)]

use std::cell::RefCell;

use catalog_admin::web_app::manager::{CatalogManager, Notifier};
use catalog_admin::web_app::model::{Notice, NoticeKind, UserRole};
use catalog_admin::web_app::storage::{MemoryStore, ProductRepository};

pub const KEY: &str = "products";

/// Three products as the browser would have written them. The first carries
/// a field this screen does not know about and a timestamp without
/// milliseconds; the last uses spaced formatting.
pub const STORED_CATALOG: &str = r#"[
    {"id":"1714557600000","name":"Desk Lamp","price":129,"image":"https://example.com/lamp.png","createdAt":"2024-05-01T10:00:00Z","sku":"DL-129"},
    {"id":"1714644000000","name":"Notebook","price":15.5,"image":"","createdAt":"2024-05-02T10:00:00.000Z","updatedAt":"2024-05-03T08:15:30.250Z"},
    {"id": "1714730400000", "name": "Pen", "price": 3.2, "image": "", "createdAt": "2024-05-03T10:00:00.000Z"}
]"#;

/// Exact text of each fixture record, in order
pub fn stored_records() -> Vec<&'static str> {
    STORED_CATALOG
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('{'))
        .map(|line| line.trim_end_matches(','))
        .collect()
}

/// Collects every notice it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.notices.borrow().iter().filter(|n| n.kind == kind).count()
    }

    pub fn errors(&self) -> usize {
        self.count(NoticeKind::Error)
    }

    pub fn successes(&self) -> usize {
        self.count(NoticeKind::Success)
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

pub fn manager_with(store: MemoryStore, role: UserRole) -> CatalogManager<MemoryStore> {
    CatalogManager::new(ProductRepository::new(store, KEY), role)
}

/// Admin manager over the fixture catalog, already loaded
pub fn loaded_admin() -> CatalogManager<MemoryStore> {
    let mut manager = manager_with(
        MemoryStore::new().with_item(KEY, STORED_CATALOG),
        UserRole::Admin,
    );
    manager
        .load(&RecordingNotifier::new())
        .expect("fixture catalog should load");
    manager
}

/// Raw slot contents
pub fn stored(manager: &CatalogManager<MemoryStore>) -> Option<String> {
    use catalog_admin::web_app::storage::KeyValueStore;
    manager
        .repository()
        .store()
        .get_item(KEY)
        .expect("memory store is available")
}
