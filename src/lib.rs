//! Responsive grid layout for dashboard content.
//!
//! [`GridLayoutView`] positions a dashboard's child components through an
//! external grid engine (drag, resize and breakpoint handling all live
//! there) and optionally persists the arrangement to browser local
//! storage. Host capabilities, the design-mode flag and the content render
//! dispatch, are injected through the [`DashboardHost`] context rather
//! than read from a global.

pub mod components;
pub mod error;
pub mod hooks;
pub mod storage;
pub mod types;

pub use components::GridLayoutView;
pub use error::LayoutError;
pub use hooks::{use_dashboard_host, DashboardHost};
pub use storage::{BrowserStorage, LayoutStore, MemoryStorage, Slot, StorageBackend, STORAGE_KEY};
pub use types::{BreakpointCols, ContentItem, ItemPlacement, LayoutSet};
