//! Handlebars templates for the generated artifacts
//!
//! The artifact contents ship as string constants and are rendered with
//! handlebars. HTML escaping is disabled because the output is code, not
//! markup.

use handlebars::Handlebars;

use crate::error::ScaffoldError;

/// Doctrine ORM mapping, written to `Resources/config/doctrine/{Item}.orm.yml`
pub const DOCTRINE_ORM_YML: &str = r"{{bundle_namespace}}\Entity\\{{item_name}}:
    type: entity
    table: {{table_name}}
    id:
        id:
            type: integer
            generator:
                strategy: AUTO
";

/// Entity class, written to `Entity/{Item}.php`
pub const ENTITY_PHP: &str = r"<?php

namespace {{namespace}};

class {{item_name}}
{
    /**
     * @var integer
     */
    private $id;

    public function getId()
    {
        return $this->id;
    }
}
";

/// Form type class, written to `Form/Type/{Item}Type.php`
pub const FORM_TYPE_PHP: &str = r"<?php

namespace {{namespace}};

use Symfony\Component\Form\AbstractType;
use Symfony\Component\Form\FormBuilderInterface;
use Symfony\Component\OptionsResolver\OptionsResolver;

class {{item_name}}Type extends AbstractType
{
    public function buildForm(FormBuilderInterface $builder, array $options)
    {
    }

    public function configureOptions(OptionsResolver $resolver)
    {
        $resolver->setDefaults(array(
            'data_class' => '{{item_namespace}}'
        ));
    }

    public function getName()
    {
        return '{{form_type_name}}';
    }
}
";

/// Factory class, written to `Factory/{Item}Factory.php`
pub const FACTORY_PHP: &str = r"<?php

namespace {{namespace}};

use Enhavo\Bundle\GridBundle\Factory\Factory;

class {{item_name}}Factory extends Factory
{
    public function createNew()
    {
        return parent::createNew();
    }
}
";

/// Grid view template, written to
/// `Resources/views/Theme/Grid/{item_snake_plural}.html.twig`
///
/// The `\{{` sequences keep handlebars from swallowing the Twig
/// expressions; they render as literal `{{`.
pub const VIEW_TEMPLATE_TWIG: &str = r#"{% block grid_item %}
    {# {{item_name}} grid item #}
    <div class="grid-item">
        \{{ item.id }}
    </div>
{% endblock %}
"#;

/// Configuration snippet printed after a successful run, meant to be pasted
/// under `enhavo_grid -> items`
pub const CONFIG_ENTRY_YML: &str = r"{{item_name_snake_case}}:
    label: {{item_name}}
    model: {{item_namespace}}
    form: {{form_type_namespace}}
    factory: {{factory_namespace}}
    template: {{template}}
";

/// Renders artifact templates against variable maps
pub struct TemplateSet {
    handlebars: Handlebars<'static>,
}

impl TemplateSet {
    /// Create a template set with code-friendly escaping
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Generated files are code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render `template` against `context`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the template fails to render;
    /// `name` identifies the template in the error message.
    pub fn render(
        &self,
        name: &'static str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, ScaffoldError> {
        self.handlebars
            .render_template(template, context)
            .map_err(|source| ScaffoldError::Render {
                template: name,
                source,
            })
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_orm_mapping() {
        let templates = TemplateSet::new();
        let rendered = templates
            .render(
                "doctrine.orm.yml",
                DOCTRINE_ORM_YML,
                &json!({
                    "bundle_namespace": "Acme\\BlogBundle",
                    "item_name": "Post",
                    "table_name": "blog_post",
                }),
            )
            .unwrap();

        assert!(rendered.contains("Acme\\BlogBundle\\Entity\\Post:"));
        assert!(rendered.contains("table: blog_post"));
    }

    #[test]
    fn test_render_does_not_escape_code() {
        let templates = TemplateSet::new();
        let rendered = templates
            .render(
                "entity.php",
                ENTITY_PHP,
                &json!({
                    "namespace": "Acme\\BlogBundle\\Entity",
                    "item_name": "Post",
                }),
            )
            .unwrap();

        // Backslashes and quotes must come through untouched
        assert!(rendered.contains("namespace Acme\\BlogBundle\\Entity;"));
        assert!(rendered.contains("class Post"));
    }

    #[test]
    fn test_view_template_keeps_twig_expressions() {
        let templates = TemplateSet::new();
        let rendered = templates
            .render(
                "template.html.twig",
                VIEW_TEMPLATE_TWIG,
                &json!({ "item_name": "Post" }),
            )
            .unwrap();

        assert!(rendered.contains("{% block grid_item %}"));
        assert!(rendered.contains("{{ item.id }}"));
        assert!(rendered.contains("{# Post grid item #}"));
    }

    #[test]
    fn test_render_config_entry() {
        let templates = TemplateSet::new();
        let rendered = templates
            .render(
                "config entry",
                CONFIG_ENTRY_YML,
                &json!({
                    "item_name": "Post",
                    "bundle_name": "BlogBundle",
                    "item_name_snake_case": "post",
                    "item_namespace": "Acme\\BlogBundle\\Entity\\Post",
                    "form_type_namespace": "Acme\\BlogBundle\\Form\\Type\\PostType",
                    "template": "BlogBundle:Theme/Grid:posts.html.twig",
                    "factory_namespace": "Acme\\BlogBundle\\Factory\\PostFactory",
                }),
            )
            .unwrap();

        assert!(rendered.starts_with("post:"));
        assert!(rendered.contains("model: Acme\\BlogBundle\\Entity\\Post"));
        assert!(rendered.contains("template: BlogBundle:Theme/Grid:posts.html.twig"));
    }
}
