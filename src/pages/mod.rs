use dioxus::prelude::*;

use dash_grid::{ContentItem, GridLayoutView, LayoutStore, Slot, StorageBackend};

// Starting arrangement for first visits.
const SEED_LAYOUT: &str = r#"{
    "lg": [
        {"id":"clock","x":0,"y":0,"w":4,"h":2,"static":false},
        {"id":"stats","x":4,"y":0,"w":8,"h":2,"static":false},
        {"id":"notes","x":0,"y":2,"w":12,"h":3,"static":false}
    ]
}"#;

// The design-slot seed replaces the whole stored blob, so passing the seed
// on every visit would erase the persisted arrangement. Seed only while
// nothing is persisted yet.
fn seed_layout<B: StorageBackend>(store: &LayoutStore<B>) -> Option<String> {
    store
        .load(Slot::Layouts)
        .is_none()
        .then(|| SEED_LAYOUT.to_string())
}

fn card(id: &str, title: &str, body: &str) -> ContentItem {
    let descriptor = serde_json::json!({ "type": "card", "title": title, "body": body });
    ContentItem {
        id: id.to_string(),
        descriptor: descriptor.as_object().cloned().unwrap_or_default(),
    }
}

fn dashboard_content() -> Vec<ContentItem> {
    vec![
        card("clock", "Clock", "Local time and uptime."),
        card("stats", "Statistics", "Requests, errors and latency."),
        card("notes", "Notes", "Drag and resize the cards; the arrangement survives a reload."),
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let seed = use_hook(|| seed_layout(&LayoutStore::browser()));

    rsx! {
        div { class: "dashboard-page",
            h1 { "Dashboard" }
            GridLayoutView {
                layout: seed,
                persist: true,
                content: dashboard_content(),
                class_name: "dashboard-grid".to_string(),
                row_height: 90.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_grid::hooks::{persist_layout_change, resolve_initial_layouts};
    use dash_grid::{LayoutSet, MemoryStorage};

    #[test]
    fn first_visit_gets_the_seed() {
        let store = LayoutStore::new(MemoryStorage::default());

        assert_eq!(seed_layout(&store), Some(SEED_LAYOUT.to_string()));
    }

    #[test]
    fn rearranged_dashboard_survives_a_new_session() {
        let store = LayoutStore::new(MemoryStorage::default());

        // First session: the seed resolves, then the user rearranges with
        // persistence on.
        let resolved =
            resolve_initial_layouts(&store, seed_layout(&store).as_deref(), true, false).unwrap();
        assert_eq!(resolved, Some(serde_json::from_str(SEED_LAYOUT).unwrap()));

        let rearranged: LayoutSet =
            serde_json::from_str(r#"{"lg":[{"id":"clock","x":6,"y":0,"w":6,"h":2,"static":false}]}"#)
                .unwrap();
        assert!(persist_layout_change(&store, true, false, &rearranged));

        // Second session: the seed is skipped, so the persisted
        // arrangement is not erased and wins resolution.
        let seed = seed_layout(&store);
        assert_eq!(seed, None);

        let resolved = resolve_initial_layouts(&store, seed.as_deref(), true, false).unwrap();
        assert_eq!(resolved, Some(rearranged));
    }
}
