//! Grid layout state for one view. Resolution and change gating are plain
//! functions so they run under ordinary unit tests; [`use_grid_layout`]
//! wraps them into component state.

use dioxus::prelude::*;
use serde_json::Value;
use std::rc::Rc;

use crate::error::LayoutError;
use crate::storage::{BrowserStorage, LayoutStore, Slot, StorageBackend};
use crate::types::LayoutSet;

/// The breakpoint design mode unlocks.
pub const DESIGN_BREAKPOINT: &str = "lg";

/// Layout state owned by one grid view: the resolved layouts signal and
/// the store that change events write through.
#[derive(Clone)]
pub struct GridLayoutState {
    pub layouts: Signal<Option<LayoutSet>>,
    pub store: Rc<LayoutStore<BrowserStorage>>,
}

/// Resolve the starting layout once and keep it in a signal. A configured
/// layout that does not parse is fatal, matching the construction
/// contract.
pub fn use_grid_layout(layout: Option<String>, persist: bool, design: bool) -> GridLayoutState {
    let store = use_hook(|| Rc::new(LayoutStore::browser()));
    let layouts = use_signal({
        let store = Rc::clone(&store);
        move || {
            resolve_initial_layouts(&store, layout.as_deref(), persist, design)
                .expect("configured grid layout is unusable")
        }
    });

    GridLayoutState { layouts, store }
}

/// Work out the starting layout from the three sources, weakest first:
///
/// 1. the configured JSON, which also seeds the design slot;
/// 2. the persisted `layouts` slot, when `persist` is set;
/// 3. the `uddesign` slot, when the host design flag is set, with every
///    `lg` placement unlocked.
///
/// `None` means no source resolved and the engine lays items out itself.
///
/// The seed write in step 1 replaces the whole stored blob, so a configured
/// layout erases any persisted arrangement before step 2 can read it;
/// persistence only wins when no layout is configured.
///
/// Configured JSON that is not a breakpoint map falls back to an empty
/// layout; JSON that does not parse at all, or a map whose values are not
/// placement lists, is a hard error.
pub fn resolve_initial_layouts<B: StorageBackend>(
    store: &LayoutStore<B>,
    configured: Option<&str>,
    persist: bool,
    design: bool,
) -> Result<Option<LayoutSet>, LayoutError> {
    let mut layouts = None;

    if let Some(raw) = configured {
        let value: Value = serde_json::from_str(raw).map_err(LayoutError::MalformedJson)?;
        let configured_set = if value.is_object() {
            serde_json::from_value(value).map_err(LayoutError::InvalidShape)?
        } else {
            LayoutSet::default()
        };
        store.save(Slot::Design, &configured_set);
        layouts = Some(configured_set);
    }

    if persist {
        if let Some(stored) = store.load(Slot::Layouts) {
            layouts = Some(stored);
        }
    }

    if design {
        if let Some(mut stored) = store.load(Slot::Design) {
            stored.unlock(DESIGN_BREAKPOINT);
            layouts = Some(stored);
        }
    }

    Ok(layouts)
}

/// Handle a layout-change event from the engine. Each gate writes its own
/// slot independently; returns whether any gate held, i.e. whether the
/// caller should adopt the new layout as state. With neither gate the
/// engine keeps the change but this component does not.
pub fn persist_layout_change<B: StorageBackend>(
    store: &LayoutStore<B>,
    persist: bool,
    design: bool,
    layouts: &LayoutSet,
) -> bool {
    let mut adopted = false;

    if persist {
        store.save(Slot::Layouts, layouts);
        adopted = true;
    }

    if design {
        store.save(Slot::Design, layouts);
        adopted = true;
    }

    adopted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_store() -> LayoutStore<MemoryStorage> {
        LayoutStore::new(MemoryStorage::default())
    }

    fn locked_lg() -> LayoutSet {
        serde_json::from_str(r#"{"lg":[{"id":"a","x":0,"y":0,"w":1,"h":1,"static":true}]}"#)
            .unwrap()
    }

    #[test]
    fn no_sources_resolves_to_none() {
        let store = empty_store();

        let resolved = resolve_initial_layouts(&store, None, false, false).unwrap();

        assert_eq!(resolved, None);
        assert_eq!(store.load(Slot::Design), None);
    }

    #[test]
    fn configured_layout_seeds_the_design_slot() {
        let store = empty_store();
        let raw = r#"{"lg":[{"id":"a","x":0,"y":0,"w":2,"h":2,"static":false}]}"#;

        let resolved = resolve_initial_layouts(&store, Some(raw), false, false).unwrap();

        let expected: LayoutSet = serde_json::from_str(raw).unwrap();
        assert_eq!(resolved, Some(expected.clone()));
        assert_eq!(store.load(Slot::Design), Some(expected));
    }

    #[test]
    fn non_map_layout_falls_back_to_empty_and_still_seeds_design() {
        let store = empty_store();

        let resolved = resolve_initial_layouts(&store, Some("[]"), false, false).unwrap();

        assert_eq!(resolved, Some(LayoutSet::default()));
        assert_eq!(store.load(Slot::Design), Some(LayoutSet::default()));
    }

    #[test]
    fn malformed_layout_json_is_fatal() {
        let store = empty_store();

        let err = resolve_initial_layouts(&store, Some("{nope"), false, false).unwrap_err();

        assert!(matches!(err, LayoutError::MalformedJson(_)));
        assert_eq!(store.load(Slot::Design), None);
    }

    #[test]
    fn mis_shaped_layout_map_is_fatal() {
        let store = empty_store();

        let err = resolve_initial_layouts(&store, Some(r#"{"lg":3}"#), false, false).unwrap_err();

        assert!(matches!(err, LayoutError::InvalidShape(_)));
    }

    #[test]
    fn persisted_layouts_override_when_no_layout_is_configured() {
        let store = empty_store();
        store.save(Slot::Layouts, &locked_lg());

        let resolved = resolve_initial_layouts(&store, None, true, false).unwrap();

        assert_eq!(resolved, Some(locked_lg()));
    }

    #[test]
    fn configured_layout_seed_erases_a_previously_persisted_arrangement() {
        let store = empty_store();
        store.save(Slot::Layouts, &locked_lg());
        let raw = r#"{"lg":[{"id":"b","x":2,"y":0,"w":2,"h":1,"static":false}]}"#;

        // Seeding the design slot overwrites the whole blob before the
        // persisted slot is read, so the configured layout stays.
        let resolved = resolve_initial_layouts(&store, Some(raw), true, false).unwrap();

        assert_eq!(resolved, Some(serde_json::from_str(raw).unwrap()));
        assert_eq!(store.load(Slot::Layouts), None);
    }

    #[test]
    fn persist_without_a_stored_slot_keeps_the_configured_layout() {
        let store = empty_store();
        let raw = r#"{"md":[{"id":"b","x":1,"y":1,"w":1,"h":1,"static":false}]}"#;

        let resolved = resolve_initial_layouts(&store, Some(raw), true, false).unwrap();

        assert_eq!(resolved, Some(serde_json::from_str(raw).unwrap()));
    }

    #[test]
    fn design_slot_overrides_everything_and_unlocks_lg() {
        let store = empty_store();
        let stored: LayoutSet = serde_json::from_str(
            r#"{
                "lg": [{"id":"a","x":0,"y":0,"w":1,"h":1,"static":true}],
                "md": [{"id":"a","x":0,"y":0,"w":1,"h":1,"static":true}]
            }"#,
        )
        .unwrap();
        store.save(Slot::Design, &stored);

        let resolved = resolve_initial_layouts(&store, None, false, true)
            .unwrap()
            .unwrap();

        assert!(!resolved.breakpoint("lg").unwrap()[0].locked);
        assert!(resolved.breakpoint("md").unwrap()[0].locked);
    }

    #[test]
    fn design_mode_without_a_stored_draft_changes_nothing() {
        let store = empty_store();
        store.save(Slot::Layouts, &locked_lg());

        let resolved = resolve_initial_layouts(&store, None, true, true).unwrap();

        // The persisted slot still wins; its lock state is untouched.
        assert_eq!(resolved, Some(locked_lg()));
    }

    #[test]
    fn change_without_any_gate_is_dropped() {
        let store = empty_store();

        let adopted = persist_layout_change(&store, false, false, &locked_lg());

        assert!(!adopted);
        assert_eq!(store.load(Slot::Layouts), None);
        assert_eq!(store.load(Slot::Design), None);
    }

    #[test]
    fn change_with_persist_writes_the_layouts_slot() {
        let store = empty_store();

        let adopted = persist_layout_change(&store, true, false, &locked_lg());

        assert!(adopted);
        assert_eq!(store.load(Slot::Layouts), Some(locked_lg()));
    }

    #[test]
    fn design_change_after_persisted_change_erases_the_layouts_slot() {
        let store = empty_store();
        assert!(persist_layout_change(&store, true, false, &locked_lg()));

        assert!(persist_layout_change(&store, false, true, &locked_lg()));

        // Whole-blob overwrite: the earlier layouts write is gone.
        assert_eq!(store.load(Slot::Layouts), None);
        assert_eq!(store.load(Slot::Design), Some(locked_lg()));
    }

    #[test]
    fn change_with_both_gates_lands_in_the_design_slot_last() {
        let store = empty_store();

        assert!(persist_layout_change(&store, true, true, &locked_lg()));

        assert_eq!(store.load(Slot::Layouts), None);
        assert_eq!(store.load(Slot::Design), Some(locked_lg()));
    }
}
