//! Grid-item scaffold generator
//!
//! Orchestrates the generation of the five artifacts that make up a grid
//! item: Doctrine ORM mapping, entity class, form type, factory, and Twig
//! view template. Artifacts are generated in that fixed order, so a conflict
//! on an earlier artifact is reported before later ones are touched. The run
//! aborts on the first failure; files already written in the same run stay
//! on disk.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use serde_json::json;

use super::helpers;
use super::templates::{self, TemplateSet};
use crate::bundle::{Bundle, BundleRegistry};
use crate::error::ScaffoldError;

/// The artifact kinds produced for one grid item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Doctrine ORM mapping under `Resources/config/doctrine/`
    OrmMapping,
    /// Entity class under `Entity/`
    Entity,
    /// Form type class under `Form/Type/`
    FormType,
    /// Factory class under `Factory/`
    Factory,
    /// Twig view template under `Resources/views/Theme/Grid/`
    ViewTemplate,
}

impl ArtifactKind {
    /// Fixed generation order; conflicts are reported in this order too
    pub const ALL: [Self; 5] = [
        Self::OrmMapping,
        Self::Entity,
        Self::FormType,
        Self::Factory,
        Self::ViewTemplate,
    ];

    /// Label used in error messages and console output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrmMapping => "ORM mapping",
            Self::Entity => "Entity",
            Self::FormType => "FormType",
            Self::Factory => "Factory",
            Self::ViewTemplate => "Template",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a successful generation run
#[derive(Debug)]
pub struct Generated {
    /// Absolute paths of the files written, in generation order
    pub files: Vec<PathBuf>,
    /// YAML snippet to paste under `enhavo_grid -> items`
    pub config_entry: String,
}

/// One row of the artifact table: template, output path, variables
struct ArtifactSpec {
    template_name: &'static str,
    template: &'static str,
    relative_path: String,
    display_name: String,
    variables: serde_json::Value,
}

/// Generates all grid-item artifacts for a bundle
pub struct GridItemGenerator<R> {
    registry: R,
    templates: TemplateSet,
}

impl<R: BundleRegistry> GridItemGenerator<R> {
    /// Create a generator resolving bundles through `registry`
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            templates: TemplateSet::new(),
        }
    }

    /// Generate all artifacts for `item_name` inside `bundle_name`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidItemName`] for non-PascalCase item
    /// names, [`ScaffoldError::BundleNotFound`] if the bundle cannot be
    /// resolved, [`ScaffoldError::ArtifactExists`] if a target file is
    /// already present, and [`ScaffoldError::FileWrite`] /
    /// [`ScaffoldError::Render`] on write or render failures. The run aborts
    /// on the first error without rolling back earlier files.
    pub fn generate(&self, bundle_name: &str, item_name: &str) -> Result<Generated, ScaffoldError> {
        if !helpers::is_pascal_case_identifier(item_name) {
            return Err(ScaffoldError::InvalidItemName {
                name: item_name.to_string(),
            });
        }

        let bundle = self.registry.resolve(bundle_name)?;

        let mut files = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            files.push(self.generate_artifact(&bundle, item_name, kind)?);
        }

        let config_entry = self.render_config_entry(&bundle, item_name)?;

        Ok(Generated {
            files,
            config_entry,
        })
    }

    /// Render one artifact and write it with create-exclusive semantics
    ///
    /// `create_new` makes the existence check and the write a single atomic
    /// operation, so two concurrent runs for the same item cannot both
    /// succeed.
    fn generate_artifact(
        &self,
        bundle: &Bundle,
        item_name: &str,
        kind: ArtifactKind,
    ) -> Result<PathBuf, ScaffoldError> {
        let spec = artifact_spec(bundle, item_name, kind);
        let content = self
            .templates
            .render(spec.template_name, spec.template, &spec.variables)?;

        let path = bundle.path().join(&spec.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::FileWrite {
                path: path.clone(),
                source,
            })?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ScaffoldError::ArtifactExists {
                    kind,
                    name: spec.display_name,
                    bundle: bundle.name().to_string(),
                });
            }
            Err(source) => return Err(ScaffoldError::FileWrite { path, source }),
        };

        file.write_all(content.as_bytes())
            .map_err(|source| ScaffoldError::FileWrite {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Render the configuration snippet for a successful run
    fn render_config_entry(
        &self,
        bundle: &Bundle,
        item_name: &str,
    ) -> Result<String, ScaffoldError> {
        let namespace = bundle.namespace();
        let snake_plural = helpers::camel_to_snake_plural(item_name);

        self.templates.render(
            "config entry",
            templates::CONFIG_ENTRY_YML,
            &json!({
                "item_name": item_name,
                "bundle_name": bundle.name(),
                "item_name_snake_case": helpers::camel_to_snake(item_name),
                "item_namespace": format!("{namespace}\\Entity\\{item_name}"),
                "form_type_namespace": format!("{namespace}\\Form\\Type\\{item_name}Type"),
                "template": format!("{}:Theme/Grid:{snake_plural}.html.twig", bundle.name()),
                "factory_namespace": format!("{namespace}\\Factory\\{item_name}Factory"),
            }),
        )
    }
}

/// The static artifact table: each kind maps to exactly one template and one
/// output-path pattern
fn artifact_spec(bundle: &Bundle, item_name: &str, kind: ArtifactKind) -> ArtifactSpec {
    let namespace = bundle.namespace();
    let prefix = bundle.name_without_postfix();

    match kind {
        ArtifactKind::OrmMapping => ArtifactSpec {
            template_name: "doctrine.orm.yml",
            template: templates::DOCTRINE_ORM_YML,
            relative_path: format!("Resources/config/doctrine/{item_name}.orm.yml"),
            display_name: item_name.to_string(),
            variables: json!({
                "bundle_namespace": namespace,
                "item_name": item_name,
                "table_name": helpers::prefixed_snake(prefix, item_name),
            }),
        },
        ArtifactKind::Entity => ArtifactSpec {
            template_name: "entity.php",
            template: templates::ENTITY_PHP,
            relative_path: format!("Entity/{item_name}.php"),
            display_name: item_name.to_string(),
            variables: json!({
                "namespace": format!("{namespace}\\Entity"),
                "item_name": item_name,
            }),
        },
        ArtifactKind::FormType => ArtifactSpec {
            template_name: "form-type.php",
            template: templates::FORM_TYPE_PHP,
            relative_path: format!("Form/Type/{item_name}Type.php"),
            display_name: format!("{item_name}Type"),
            variables: json!({
                "namespace": format!("{namespace}\\Form\\Type"),
                "item_name": item_name,
                "item_namespace": format!("{namespace}\\Entity\\{item_name}"),
                "form_type_name": helpers::prefixed_snake(prefix, item_name),
            }),
        },
        ArtifactKind::Factory => ArtifactSpec {
            template_name: "factory.php",
            template: templates::FACTORY_PHP,
            relative_path: format!("Factory/{item_name}Factory.php"),
            display_name: format!("{item_name}Factory"),
            variables: json!({
                "namespace": format!("{namespace}\\Factory"),
                "item_name": item_name,
            }),
        },
        ArtifactKind::ViewTemplate => {
            let file_name = format!("{}.html.twig", helpers::camel_to_snake_plural(item_name));
            ArtifactSpec {
                template_name: "template.html.twig",
                template: templates::VIEW_TEMPLATE_TWIG,
                relative_path: format!("Resources/views/Theme/Grid/{file_name}"),
                display_name: file_name,
                variables: json!({
                    "item_name": item_name,
                }),
            }
        }
    }
}
