//! Local persistence for orders.
//!
//! All orders of all users live in one JSON array under the `orders` key:
//! browser `localStorage` on the web, `<data dir>/orders.json` on desktop.
//! [`OrderStore`] owns the backend behind a mutex and only offers whole
//! read-modify-write operations, so two mutations in the same process cannot
//! interleave. Separate tabs or processes still share the flat record and the
//! last writer wins.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use super::order::{Order, OrderStatus};

pub const ORDERS_KEY: &str = "orders";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(String),
    #[error("stored orders are corrupt: {0}")]
    Corrupt(String),
    #[error("no order with id {0}")]
    NotFound(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Flat string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Process-local backend for tests and for platforms without storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn local_storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage blocked".into()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Io(format!("reading {key} failed")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Io(format!("writing {key} failed (quota?)")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{KeyValueStore, StorageError};

    /// One `<key>.json` file per key inside a directory.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// The per-user application data directory.
        pub fn in_data_dir() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("ly", "Haweya", "Haweya").ok_or_else(
                || StorageError::Unavailable("unable to determine data directory".into()),
            )?;
            Ok(Self::new(dirs.data_dir()))
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl KeyValueStore for FileStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.dir)?;
            let target = self.path_for(key);
            let staging = target.with_extension("json.tmp");
            fs::write(&staging, value)?;
            fs::rename(&staging, &target)?;
            Ok(())
        }
    }
}

/// Backend for the running platform.
pub fn platform_storage() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStorage::in_data_dir() {
            Ok(storage) => {
                tracing::info!(dir = %storage.dir().display(), "using file storage");
                Box::new(storage)
            }
            Err(err) => {
                tracing::warn!(%err, "falling back to in-memory storage");
                Box::new(MemoryStorage::new())
            }
        }
    }
}

/// The order list plus its single writer.
#[derive(Debug)]
pub struct OrderStore<S> {
    backend: Mutex<S>,
}

pub type PlatformOrderStore = OrderStore<Box<dyn KeyValueStore>>;

impl<S: KeyValueStore> OrderStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// Every stored order. A missing record is an empty list.
    pub fn load_all(&self) -> Result<Vec<Order>, StorageError> {
        let backend = self.lock()?;
        read_orders(&*backend)
    }

    /// Orders placed by `user_id`.
    pub fn orders_for(&self, user_id: &str) -> Result<Vec<Order>, StorageError> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|order| order.user_id == user_id)
            .collect())
    }

    pub fn append(&self, order: Order) -> Result<(), StorageError> {
        let backend = self.lock()?;
        let mut orders = read_orders(&*backend)?;
        tracing::debug!(id = %order.id, existing = orders.len(), "appending order");
        orders.push(order);
        write_orders(&*backend, &orders)
    }

    /// Rewrite the status of the order with `id`; returns the updated order.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, StorageError> {
        let backend = self.lock()?;
        let mut orders = read_orders(&*backend)?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        order.status = status;
        let updated = order.clone();
        write_orders(&*backend, &orders)?;
        tracing::info!(id, %status, "order status updated");
        Ok(updated)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, S>, StorageError> {
        self.backend
            .lock()
            .map_err(|_| StorageError::Unavailable("order store poisoned".into()))
    }
}

fn read_orders(backend: &impl KeyValueStore) -> Result<Vec<Order>, StorageError> {
    match backend.get(ORDERS_KEY)? {
        None => Ok(Vec::new()),
        Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt(err.to_string()))
        }
    }
}

fn write_orders(backend: &impl KeyValueStore, orders: &[Order]) -> Result<(), StorageError> {
    let raw =
        serde_json::to_string(orders).map_err(|err| StorageError::Corrupt(err.to_string()))?;
    backend.set(ORDERS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimate::Material;
    use crate::core::order::OrderSpecs;

    fn order(user: &str) -> Order {
        Order::new_pending(
            user,
            "1",
            OrderSpecs {
                size: "Standard".into(),
                quantity: 150,
                material: Material::Premium,
            },
            120.0,
        )
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = OrderStore::new(MemoryStorage::new());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn appended_orders_are_visible_to_the_next_load() {
        let store = OrderStore::new(MemoryStorage::new());
        let first = order("u1");
        store.append(first.clone()).unwrap();
        store.append(order("u2")).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first);
        assert_eq!(store.orders_for("u1").unwrap(), vec![first]);
    }

    #[test]
    fn status_updates_rewrite_only_the_target() {
        let store = OrderStore::new(MemoryStorage::new());
        let a = order("u1");
        let b = order("u1");
        store.append(a.clone()).unwrap();
        store.append(b.clone()).unwrap();

        let updated = store.update_status(&b.id, OrderStatus::Ready).unwrap();
        assert_eq!(updated.status, OrderStatus::Ready);

        let all = store.load_all().unwrap();
        assert_eq!(all[0].status, OrderStatus::Pending);
        assert_eq!(all[1].status, OrderStatus::Ready);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = OrderStore::new(MemoryStorage::new());
        store.append(order("u1")).unwrap();
        assert_eq!(
            store.update_status("ORD-NOPE", OrderStatus::Completed),
            Err(StorageError::NotFound("ORD-NOPE".into()))
        );
    }

    #[test]
    fn corrupt_record_is_reported_and_not_overwritten() {
        let store = OrderStore::new(MemoryStorage::with_entry(ORDERS_KEY, "{not json"));
        assert!(matches!(store.load_all(), Err(StorageError::Corrupt(_))));
        assert!(matches!(
            store.append(order("u1")),
            Err(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn concurrent_appends_do_not_lose_orders() {
        let store = std::sync::Arc::new(OrderStore::new(MemoryStorage::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..5 {
                        store.append(order(&format!("u{i}"))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.load_all().unwrap().len(), 40);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_storage_persists_between_instances() {
        let dir = std::env::temp_dir().join(format!("haweya-test-{}", uuid::Uuid::new_v4()));
        let store = OrderStore::new(FileStorage::new(&dir));
        let placed = order("u1");
        store.append(placed.clone()).unwrap();

        let reopened = OrderStore::new(FileStorage::new(&dir));
        assert_eq!(reopened.load_all().unwrap(), vec![placed]);
        assert!(dir.join("orders.json").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
