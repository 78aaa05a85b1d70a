//! In-memory object-URL registry.
//!
//! Mirrors the browser's `URL.createObjectURL` / `URL.revokeObjectURL` pair:
//! every created handle is a fresh `<scheme>/<n>` string that resolves to the
//! stored bytes until it is revoked. Revoking twice is an error here, which is
//! what lets tests catch double releases.
//!
//! The registry is single-threaded. Clones share the same table, so a host (or
//! a test) can keep a clone to inspect what the router created and released.

use crate::domain::error::{Result, ViewerError};
use crate::domain::item::{ResourceHandle, SourceFile};
use crate::resources::provider::HandleProvider;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct RegistryTable {
    next_id: u64,
    live: HashMap<ResourceHandle, Rc<[u8]>>,
    released: u64,
}

/// Shared, single-threaded handle registry.
#[derive(Debug, Clone)]
pub struct ObjectUrlRegistry {
    scheme: String,
    table: Rc<RefCell<RegistryTable>>,
}

impl ObjectUrlRegistry {
    /// Creates an empty registry whose handles start with `scheme`.
    #[must_use]
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            table: Rc::new(RefCell::new(RegistryTable::default())),
        }
    }

    /// Returns the bytes behind a live handle.
    #[must_use]
    pub fn resolve(&self, handle: &ResourceHandle) -> Option<Rc<[u8]>> {
        self.table.borrow().live.get(handle).cloned()
    }

    /// Number of handles created and not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.table.borrow().live.len()
    }

    /// Number of successful releases over the registry's lifetime.
    #[must_use]
    pub fn released_count(&self) -> u64 {
        self.table.borrow().released
    }
}

impl Default for ObjectUrlRegistry {
    fn default() -> Self {
        Self::new(crate::DEFAULT_HANDLE_SCHEME)
    }
}

impl HandleProvider for ObjectUrlRegistry {
    fn create(&mut self, file: &SourceFile) -> Result<ResourceHandle> {
        let mut table = self.table.borrow_mut();
        table.next_id += 1;
        let handle = ResourceHandle::new(format!("{}/{}", self.scheme, table.next_id));
        table
            .live
            .insert(handle.clone(), Rc::from(file.content.as_slice()));

        tracing::trace!(handle = %handle, name = %file.name, bytes = file.content.len(), "handle created");
        Ok(handle)
    }

    fn release(&mut self, handle: &ResourceHandle) -> Result<()> {
        let mut table = self.table.borrow_mut();
        if table.live.remove(handle).is_none() {
            return Err(ViewerError::HandleReleased(handle.to_string()));
        }
        table.released += 1;

        tracing::trace!(handle = %handle, "handle released");
        Ok(())
    }
}
