//! CLI command implementations

pub mod grid_item;

pub use grid_item::GridItemCommand;
