use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position, size and lock state of one content item within one
/// breakpoint's grid. The wire name of the lock flag is `static`, matching
/// what the grid engine emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(rename = "static", default)]
    pub locked: bool,
}

/// A full layout: breakpoint name ("lg", "md", ...) to the ordered
/// placements for that breakpoint. Replaced wholesale on every
/// layout-change event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSet(pub BTreeMap<String, Vec<ItemPlacement>>);

impl LayoutSet {
    pub fn breakpoint(&self, name: &str) -> Option<&[ItemPlacement]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clear the lock flag on every placement of one breakpoint. Design
    /// mode always allows editing, whatever lock state was stored.
    pub fn unlock(&mut self, breakpoint: &str) {
        if let Some(placements) = self.0.get_mut(breakpoint) {
            for placement in placements {
                placement.locked = false;
            }
        }
    }
}

/// One dashboard child. Everything besides the id is an opaque descriptor
/// owned by the host framework; the host's render dispatch knows what to
/// do with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(flatten)]
    pub descriptor: serde_json::Map<String, serde_json::Value>,
}

/// Column count per breakpoint, forwarded to the grid engine.
pub type BreakpointCols = BTreeMap<String, u32>;

/// The engine's stock column configuration, used when the caller does not
/// supply one.
pub fn default_cols() -> BreakpointCols {
    BTreeMap::from([
        ("lg".to_string(), 12),
        ("md".to_string(), 10),
        ("sm".to_string(), 6),
        ("xs".to_string(), 4),
        ("xxs".to_string(), 2),
    ])
}

/// Engine default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 150.0;
