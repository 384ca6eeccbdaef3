//! Layout persistence over browser local storage.
//!
//! Everything is multiplexed through one storage key holding a single JSON
//! blob with two slots: the user-persisted arrangement and the design-mode
//! draft. `save` overwrites the whole blob with just the slot being
//! written, so the last writer of either slot erases the other; callers
//! that need both to survive use `save_merged`.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::types::LayoutSet;

/// The one storage key the whole store lives under.
pub const STORAGE_KEY: &str = "rgl-8";

/// Named slot within the stored blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// User-persisted arrangement (`persist` prop).
    Layouts,
    /// Design-mode draft.
    Design,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Layouts => "layouts",
            Slot::Design => "uddesign",
        }
    }
}

/// The JSON value stored under [`STORAGE_KEY`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreBlob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layouts: Option<LayoutSet>,
    #[serde(default, rename = "uddesign", skip_serializing_if = "Option::is_none")]
    pub design: Option<LayoutSet>,
}

impl StoreBlob {
    fn get(&self, slot: Slot) -> Option<&LayoutSet> {
        match slot {
            Slot::Layouts => self.layouts.as_ref(),
            Slot::Design => self.design.as_ref(),
        }
    }

    fn set(&mut self, slot: Slot, layouts: LayoutSet) {
        match slot {
            Slot::Layouts => self.layouts = Some(layouts),
            Slot::Design => self.design = Some(layouts),
        }
    }
}

/// Raw string storage underneath the store. Reads yield `None` when the
/// backing store is unavailable; writes to an unavailable store are
/// silently dropped.
pub trait StorageBackend {
    fn read_raw(&self, key: &str) -> Option<String>;
    fn write_raw(&self, key: &str, raw: &str);
}

/// `window.localStorage`. Absent outside the browser (including native
/// test runs), in which case the store behaves as unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn read_raw(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn write_raw(&self, key: &str, raw: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            if storage.set_item(key, raw).is_err() {
                warn!("local storage write failed for {key}");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
        }
    }
}

/// In-memory backend for tests and native runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn read_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write_raw(&self, key: &str, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }
}

pub struct LayoutStore<B: StorageBackend> {
    backend: B,
}

impl LayoutStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<B: StorageBackend> LayoutStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read one slot. A missing store, missing key, or unparseable blob all
    /// read as absent; a bad blob is never an error here.
    pub fn load(&self, slot: Slot) -> Option<LayoutSet> {
        let raw = self.backend.read_raw(STORAGE_KEY)?;
        parse_blob(&raw).get(slot).cloned()
    }

    /// Write one slot, replacing the entire blob. Whatever the other slot
    /// held is gone after this.
    pub fn save(&self, slot: Slot, layouts: &LayoutSet) {
        let mut blob = StoreBlob::default();
        blob.set(slot, layouts.clone());
        self.write_blob(&blob);
    }

    /// Write one slot while keeping the other: read-modify-write instead of
    /// wholesale replacement. A blob that no longer parses is discarded,
    /// the same way `load` treats it.
    pub fn save_merged(&self, slot: Slot, layouts: &LayoutSet) {
        let mut blob = self
            .backend
            .read_raw(STORAGE_KEY)
            .as_deref()
            .map(parse_blob)
            .unwrap_or_default();
        blob.set(slot, layouts.clone());
        self.write_blob(&blob);
    }

    fn write_blob(&self, blob: &StoreBlob) {
        match serde_json::to_string(blob) {
            Ok(raw) => self.backend.write_raw(STORAGE_KEY, &raw),
            Err(err) => warn!("could not serialize layout blob: {err}"),
        }
    }
}

fn parse_blob(raw: &str) -> StoreBlob {
    match serde_json::from_str(raw) {
        Ok(blob) => blob,
        Err(err) => {
            warn!("ignoring unreadable layout blob under {STORAGE_KEY}: {err}");
            StoreBlob::default()
        }
    }
}
