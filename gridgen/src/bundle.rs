//! Bundle descriptors and bundle lookup
//!
//! The generator only needs three facts about a bundle: where it lives on
//! disk, its declared name, and its PHP namespace. [`Bundle`] carries exactly
//! those, and [`BundleRegistry`] is the seam through which they are resolved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScaffoldError;

/// Conventional postfix carried by bundle directory and class names
pub const BUNDLE_POSTFIX: &str = "Bundle";

/// A bundle as seen by the generator: root path, name, and namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    path: PathBuf,
    name: String,
    namespace: String,
}

impl Bundle {
    /// Create a bundle descriptor
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Filesystem root of the bundle
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared bundle name, e.g. `BlogBundle`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// PHP namespace of the bundle, e.g. `Acme\BlogBundle`
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Bundle name with the conventional `Bundle` postfix stripped
    ///
    /// Used as the prefix for table names and form type names.
    #[must_use]
    pub fn name_without_postfix(&self) -> &str {
        self.name.strip_suffix(BUNDLE_POSTFIX).unwrap_or(&self.name)
    }
}

/// Resolves bundle names to descriptors
pub trait BundleRegistry {
    /// Look up a bundle by its declared name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::BundleNotFound`] if no bundle with that name
    /// is known.
    fn resolve(&self, name: &str) -> Result<Bundle, ScaffoldError>;
}

/// Registry over a fixed set of bundles
///
/// Useful for tests and for embedders that already know their bundles.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    bundles: HashMap<String, Bundle>,
}

impl StaticRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle under its declared name
    pub fn register(&mut self, bundle: Bundle) {
        self.bundles.insert(bundle.name().to_string(), bundle);
    }
}

impl BundleRegistry for StaticRegistry {
    fn resolve(&self, name: &str) -> Result<Bundle, ScaffoldError> {
        self.bundles
            .get(name)
            .cloned()
            .ok_or_else(|| ScaffoldError::BundleNotFound {
                bundle: name.to_string(),
            })
    }
}

/// Registry that locates bundles under `{project_root}/src` by directory name
///
/// The namespace is derived from the directory path relative to `src/`, so
/// `src/Acme/BlogBundle` resolves to namespace `Acme\BlogBundle`.
#[derive(Debug)]
pub struct FilesystemRegistry {
    project_root: PathBuf,
}

impl FilesystemRegistry {
    /// Create a registry rooted at `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }
}

impl BundleRegistry for FilesystemRegistry {
    fn resolve(&self, name: &str) -> Result<Bundle, ScaffoldError> {
        let src = self.project_root.join("src");

        let walker = WalkDir::new(&src)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok);

        for entry in walker {
            if entry.file_type().is_dir() && entry.file_name() == name {
                let namespace = entry
                    .path()
                    .strip_prefix(&src)
                    .unwrap_or(entry.path())
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("\\");

                return Ok(Bundle::new(entry.path(), name, namespace));
            }
        }

        Err(ScaffoldError::BundleNotFound {
            bundle: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_name_without_postfix() {
        let bundle = Bundle::new("/tmp/b", "BlogBundle", "Acme\\BlogBundle");
        assert_eq!(bundle.name_without_postfix(), "Blog");

        let bare = Bundle::new("/tmp/b", "Blog", "Acme\\Blog");
        assert_eq!(bare.name_without_postfix(), "Blog");
    }

    #[test]
    fn test_static_registry_resolve() {
        let mut registry = StaticRegistry::new();
        registry.register(Bundle::new("/tmp/b", "BlogBundle", "Acme\\BlogBundle"));

        let bundle = registry.resolve("BlogBundle").unwrap();
        assert_eq!(bundle.name(), "BlogBundle");
        assert_eq!(bundle.namespace(), "Acme\\BlogBundle");
    }

    #[test]
    fn test_static_registry_unknown_bundle() {
        let registry = StaticRegistry::new();
        let result = registry.resolve("MissingBundle");
        assert!(matches!(
            result,
            Err(ScaffoldError::BundleNotFound { bundle }) if bundle == "MissingBundle"
        ));
    }

    #[test]
    fn test_filesystem_registry_resolves_namespace_from_path() {
        let temp_dir = tempdir().unwrap();
        let bundle_dir = temp_dir.path().join("src/Acme/BlogBundle");
        fs::create_dir_all(&bundle_dir).unwrap();

        let registry = FilesystemRegistry::new(temp_dir.path());
        let bundle = registry.resolve("BlogBundle").unwrap();

        assert_eq!(bundle.name(), "BlogBundle");
        assert_eq!(bundle.namespace(), "Acme\\BlogBundle");
        assert_eq!(bundle.path(), bundle_dir.as_path());
    }

    #[test]
    fn test_filesystem_registry_unknown_bundle() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();

        let registry = FilesystemRegistry::new(temp_dir.path());
        assert!(matches!(
            registry.resolve("NopeBundle"),
            Err(ScaffoldError::BundleNotFound { .. })
        ));
    }
}
