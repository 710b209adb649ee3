//! Scaffold generator for grid items in enhavo-style application bundles
//!
//! Given a bundle name and an item name, the generator renders a fixed set
//! of five artifacts into the bundle's directory tree (Doctrine ORM mapping,
//! entity class, form type, factory, Twig view template) and produces a YAML
//! snippet to paste into the application configuration.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod bundle;
pub mod error;
pub mod scaffold;

pub use bundle::{Bundle, BundleRegistry, FilesystemRegistry, StaticRegistry};
pub use error::ScaffoldError;
pub use scaffold::{ArtifactKind, Generated, GridItemGenerator};
