pub mod use_dashboard_host;
pub mod use_grid_layout;

pub use use_dashboard_host::{use_dashboard_host, DashboardHost};
pub use use_grid_layout::{
    persist_layout_change, resolve_initial_layouts, use_grid_layout, GridLayoutState,
    DESIGN_BREAKPOINT,
};
