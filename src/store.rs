//! Key-value backed document persistence.
//!
//! Each document kind maps to one JSON-serialized array under a string
//! key, mirroring the single-collection-per-kind layout the UI relied on.
//! Storage failures never propagate as errors: reads fall back to "no
//! data", writes report `false`, both after logging. Concurrent writers
//! from separate processes are not coordinated (last writer wins).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documents::DocumentKind;

/// Minimal string-keyed persistence seam.
///
/// Implementations are process-wide stores; `set` returning `false` means
/// the write may have been lost (callers surface that, they do not crash).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
}

/// In-memory store, used in tests and as a scratch backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        true
    }
}

/// File-backed store: one `<key>.json` file per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    // Serializes writers within this process; cross-process writers race.
    lock: Mutex<()>,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock();
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::error!("failed to read store key '{}': {}", key, err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let _guard = self.lock.lock();
        match fs::write(self.path_for(key), value) {
            Ok(()) => true,
            Err(err) => {
                log::error!("failed to write store key '{}': {}", key, err);
                false
            }
        }
    }
}

/// Persistence envelope added around a document when it is stored.
///
/// `id` is generated at creation and immutable; `updated_at` advances on
/// every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub doc: T,
}

/// Typed CRUD over a [`KeyValueStore`], one collection per document kind.
pub struct DocumentStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// All documents of a kind; corrupt or missing data reads as empty.
    pub fn list<T: DeserializeOwned>(&self, kind: DocumentKind) -> Vec<Stored<T>> {
        self.load(kind)
    }

    /// Look up one document by id.
    pub fn get<T: DeserializeOwned>(&self, kind: DocumentKind, id: &str) -> Option<Stored<T>> {
        self.load(kind).into_iter().find(|item| item.id == id)
    }

    /// Persist a new document, assigning id and timestamps.
    ///
    /// Returns the stored envelope even when the write fails (the caller
    /// keeps a usable value; the loss risk has been logged).
    pub fn add<T>(&self, kind: DocumentKind, doc: T) -> Stored<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let now = Utc::now();
        let stored = Stored {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            doc,
        };
        let mut items = self.load::<T>(kind);
        items.push(stored.clone());
        self.save(kind, &items);
        stored
    }

    /// Patch an existing document through a closure and bump `updated_at`.
    ///
    /// Returns `None` when no document with that id exists.
    pub fn update<T, F>(&self, kind: DocumentKind, id: &str, patch: F) -> Option<Stored<T>>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce(&mut T),
    {
        let mut items = self.load::<T>(kind);
        let index = items.iter().position(|item| item.id == id)?;
        patch(&mut items[index].doc);
        items[index].updated_at = Utc::now();
        let updated = items[index].clone();
        self.save(kind, &items);
        Some(updated)
    }

    /// Remove a document by id. `false` when it was not present.
    pub fn remove<T>(&self, kind: DocumentKind, id: &str) -> bool
    where
        T: Serialize + DeserializeOwned,
    {
        let mut items = self.load::<T>(kind);
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return false;
        }
        self.save(kind, &items)
    }

    fn load<T: DeserializeOwned>(&self, kind: DocumentKind) -> Vec<Stored<T>> {
        let Some(raw) = self.backend.get(kind.storage_key()) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::error!(
                    "corrupt data under store key '{}', treating as empty: {}",
                    kind.storage_key(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save<T: Serialize>(&self, kind: DocumentKind, items: &[Stored<T>]) -> bool {
        match serde_json::to_string(items) {
            Ok(json) => self.backend.set(kind.storage_key(), &json),
            Err(err) => {
                log::error!(
                    "failed to serialize collection '{}': {}",
                    kind.storage_key(),
                    err
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{Invoice, LineItem};

    fn sample_invoice(no: &str) -> Invoice {
        Invoice {
            invoice_no: no.to_string(),
            customer_name: "Customer".to_string(),
            items: vec![LineItem {
                description: "Service".to_string(),
                qty: 1.0,
                rate: 100.0,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_add_assigns_id_and_timestamps() {
        let store = DocumentStore::new(MemoryStore::new());
        let stored = store.add(DocumentKind::Invoice, sample_invoice("INV001"));

        assert!(!stored.id.is_empty());
        assert_eq!(stored.created_at, stored.updated_at);

        let listed: Vec<Stored<Invoice>> = store.list(DocumentKind::Invoice);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].doc.invoice_no, "INV001");
    }

    #[test]
    fn test_update_bumps_updated_at_and_keeps_id() {
        let store = DocumentStore::new(MemoryStore::new());
        let stored = store.add(DocumentKind::Invoice, sample_invoice("INV001"));

        let updated = store
            .update(DocumentKind::Invoice, &stored.id, |doc: &mut Invoice| {
                doc.customer_name = "Renamed".to_string();
            })
            .unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.created_at, stored.created_at);
        assert!(updated.updated_at >= stored.updated_at);
        assert_eq!(updated.doc.customer_name, "Renamed");
    }

    #[test]
    fn test_update_missing_id_returns_none() {
        let store = DocumentStore::new(MemoryStore::new());
        store.add(DocumentKind::Invoice, sample_invoice("INV001"));
        let result = store.update(DocumentKind::Invoice, "nope", |_: &mut Invoice| {});
        assert!(result.is_none());
    }

    #[test]
    fn test_remove() {
        let store = DocumentStore::new(MemoryStore::new());
        let stored = store.add(DocumentKind::Invoice, sample_invoice("INV001"));

        assert!(store.remove::<Invoice>(DocumentKind::Invoice, &stored.id));
        assert!(!store.remove::<Invoice>(DocumentKind::Invoice, &stored.id));
        assert!(store.list::<Invoice>(DocumentKind::Invoice).is_empty());
    }

    #[test]
    fn test_kinds_are_isolated() {
        let store = DocumentStore::new(MemoryStore::new());
        store.add(DocumentKind::Invoice, sample_invoice("INV001"));
        assert!(store.list::<Invoice>(DocumentKind::Challan).is_empty());
    }

    #[test]
    fn test_corrupt_collection_reads_as_empty() {
        let backend = MemoryStore::new();
        backend.set("invoices", "{not json");
        let store = DocumentStore::new(backend);
        assert!(store.list::<Invoice>(DocumentKind::Invoice).is_empty());
    }
}
