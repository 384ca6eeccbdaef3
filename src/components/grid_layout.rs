use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{info, warn};
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::components::grid_bindings::{
    mount_grid_engine, set_grid_layout_callback, unmount_grid_engine,
};
#[cfg(target_arch = "wasm32")]
use crate::hooks::use_grid_layout::persist_layout_change;
use crate::hooks::use_dashboard_host;
use crate::hooks::use_grid_layout::{use_grid_layout, GridLayoutState};
use crate::types::{BreakpointCols, ContentItem};
#[cfg(target_arch = "wasm32")]
use crate::types::{default_cols, LayoutSet, DEFAULT_ROW_HEIGHT};

// One grid per page; the engine mounts onto this element.
const CONTAINER_ID: &str = "grid-layout-root";

/// Responsive grid wrapper around the dashboard's content items. Layout
/// comes from, weakest first: the configured `layout` JSON, the persisted
/// arrangement (when `persist` is set), and the design-mode draft (when the
/// host design flag is set). User-driven changes are written back through
/// the same gates.
#[component]
pub fn GridLayoutView(
    layout: Option<String>,
    #[props(default)] persist: bool,
    content: Vec<ContentItem>,
    class_name: Option<String>,
    cols: Option<BreakpointCols>,
    row_height: Option<f64>,
) -> Element {
    let host = use_dashboard_host();
    let design = host.design;

    let GridLayoutState { layouts, store } = use_grid_layout(layout, persist, design);
    let content_state = use_signal(|| content);

    #[cfg(target_arch = "wasm32")]
    {
        let on_change = use_hook({
            let store = Rc::clone(&store);
            let mut layouts = layouts;
            move || {
                info!("wiring grid engine change events");
                Rc::new(Closure::<dyn FnMut(String, String)>::new(
                    move |_current: String, all: String| {
                        match serde_json::from_str::<LayoutSet>(&all) {
                            Ok(next) => {
                                if persist_layout_change(&store, persist, design, &next) {
                                    layouts.set(Some(next));
                                }
                            }
                            Err(err) => warn!("discarding grid engine change payload: {err}"),
                        }
                    },
                ))
            }
        });

        let cols = cols.unwrap_or_else(default_cols);
        let row_height = row_height.unwrap_or(DEFAULT_ROW_HEIGHT);
        use_effect(move || {
            let serializer = serde_wasm_bindgen::Serializer::json_compatible();
            let layouts_js = layouts
                .read()
                .serialize(&serializer)
                .unwrap_or(JsValue::NULL);
            let cols_js = cols.serialize(&serializer).unwrap_or(JsValue::NULL);
            set_grid_layout_callback(on_change.as_ref().as_ref().unchecked_ref());
            mount_grid_engine(CONTAINER_ID, layouts_js, cols_js, row_height);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (layouts, store, cols, row_height);

    use_drop(move || {
        #[cfg(target_arch = "wasm32")]
        unmount_grid_engine();
    });

    let class_name = class_name.unwrap_or_default();
    rsx! {
        div {
            id: CONTAINER_ID,
            class: "grid-stack {class_name}",
            for item in content_state() {
                div {
                    key: "grid-element-{item.id}",
                    class: "grid-stack-item",
                    "data-grid-id": "{item.id}",
                    div { class: "grid-stack-item-content",
                        {host.render_component.call(item.clone())}
                    }
                }
            }
        }
    }
}
