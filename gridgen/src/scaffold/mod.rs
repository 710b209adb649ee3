//! Grid-item scaffold generation
//!
//! The generator renders five fixed artifacts per item and the configuration
//! snippet that wires them together.

pub mod generator;
pub mod helpers;
pub mod templates;

pub use generator::{ArtifactKind, Generated, GridItemGenerator};
pub use templates::TemplateSet;
