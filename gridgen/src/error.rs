//! Error types for scaffold generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scaffold::ArtifactKind;

/// Errors raised while generating a grid item
///
/// Every failure aborts the whole run immediately. Files written by earlier
/// steps of the same run are left on disk and must be removed manually
/// before re-running.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The requested bundle could not be located
    #[error("bundle \"{bundle}\" not found")]
    BundleNotFound {
        /// Name the caller asked for
        bundle: String,
    },

    /// The target file for an artifact is already present; nothing was
    /// overwritten
    #[error("{kind} \"{name}\" already exists in bundle \"{bundle}\"")]
    ArtifactExists {
        /// Which of the five artifacts hit the conflict
        kind: ArtifactKind,
        /// Class or file name of the conflicting artifact
        name: String,
        /// Bundle the artifact belongs to
        bundle: String,
    },

    /// A rendered artifact could not be written to disk
    #[error("error writing file \"{}\"", path.display())]
    FileWrite {
        /// Target path of the failed write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A template failed to render
    #[error("error rendering template \"{template}\"")]
    Render {
        /// Name of the failing template
        template: &'static str,
        /// Underlying handlebars error
        #[source]
        source: handlebars::RenderError,
    },

    /// The item name is not usable as a class name
    #[error("invalid item name \"{name}\": expected a PascalCase identifier (e.g. \"GridItem\")")]
    InvalidItemName {
        /// The rejected name
        name: String,
    },
}
