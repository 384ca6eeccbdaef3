pub mod grid_bindings;
pub mod grid_layout;

pub use grid_layout::GridLayoutView;
