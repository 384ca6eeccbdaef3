use js_sys::Function;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Mount the grid engine onto the container, or re-sync an already
    /// mounted one. `layouts` may be null, in which case the engine lays
    /// items out itself.
    #[wasm_bindgen(js_name = "mountGridEngine")]
    pub fn mount_grid_engine(container_id: &str, layouts: JsValue, cols: JsValue, row_height: f64);

    /// Register the callback the engine invokes after a user-driven
    /// drag/resize/reflow, with the current-breakpoint layout and the full
    /// breakpoint mapping as JSON strings.
    #[wasm_bindgen(js_name = "setGridLayoutCallback")]
    pub fn set_grid_layout_callback(callback: &Function);

    #[wasm_bindgen(js_name = "unmountGridEngine")]
    pub fn unmount_grid_engine();
}
