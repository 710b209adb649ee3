//! Naming-convention transforms used across the generated artifacts

use inflector::Inflector;

/// Convert a PascalCase/camelCase identifier to `snake_case`
///
/// # Examples
///
/// ```
/// # use gridgen::scaffold::helpers::camel_to_snake;
/// assert_eq!(camel_to_snake("GridItem"), "grid_item");
/// assert_eq!(camel_to_snake("Post"), "post");
/// ```
#[must_use]
pub fn camel_to_snake(input: &str) -> String {
    input.to_snake_case()
}

/// `snake_case` with the final word pluralized
///
/// Used for view template filenames. Pluralization is delegated to the
/// inflector crate, which handles regular suffix rules plus common
/// irregulars; model names are typically regular words.
///
/// # Examples
///
/// ```
/// # use gridgen::scaffold::helpers::camel_to_snake_plural;
/// assert_eq!(camel_to_snake_plural("GridItem"), "grid_items");
/// assert_eq!(camel_to_snake_plural("Category"), "categories");
/// ```
#[must_use]
pub fn camel_to_snake_plural(input: &str) -> String {
    camel_to_snake(input).to_plural()
}

/// Join a bundle prefix and an item name into one `snake_case` identifier
///
/// This is the shape shared by table names and form type names:
/// `("Blog", "Post")` becomes `blog_post`.
#[must_use]
pub fn prefixed_snake(bundle_prefix: &str, item_name: &str) -> String {
    format!(
        "{}_{}",
        camel_to_snake(bundle_prefix),
        camel_to_snake(item_name)
    )
}

/// Check that a name is usable as a generated class name
///
/// Accepts ASCII alphanumeric names starting with an uppercase letter.
#[must_use]
pub fn is_pascal_case_identifier(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("GridItem"), "grid_item");
        assert_eq!(camel_to_snake("Post"), "post");
        assert_eq!(camel_to_snake("UserProfile"), "user_profile");
    }

    #[test]
    fn test_camel_to_snake_plural() {
        assert_eq!(camel_to_snake_plural("GridItem"), "grid_items");
        assert_eq!(camel_to_snake_plural("Post"), "posts");
        assert_eq!(camel_to_snake_plural("Category"), "categories");
    }

    #[test]
    fn test_prefixed_snake() {
        assert_eq!(prefixed_snake("Blog", "Post"), "blog_post");
        assert_eq!(prefixed_snake("Shop", "GridItem"), "shop_grid_item");
    }

    #[test]
    fn test_pascal_case_identifier() {
        assert!(is_pascal_case_identifier("Post"));
        assert!(is_pascal_case_identifier("GridItem"));
        assert!(is_pascal_case_identifier("Item2"));

        assert!(!is_pascal_case_identifier(""));
        assert!(!is_pascal_case_identifier("post"));
        assert!(!is_pascal_case_identifier("Grid Item"));
        assert!(!is_pascal_case_identifier("Grid-Item"));
    }
}
