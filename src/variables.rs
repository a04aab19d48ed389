//! The variable bag handed to the engine.

use serde::Serialize;

use crate::formatter::{format_package_name, format_slug, format_type_name};

/// Values available to templates and used for file selection.
///
/// Built once after validation and never mutated. Serializes with the
/// camelCase names templates refer to (`{{projectSlug}}`, `{{typeName}}`...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables {
    pub project_slug: String,
    pub type_name: String,
    pub package_name: String,
    pub group_domain: String,
    pub author_name: String,
    pub include_optional_module: bool,
    /// Always `None` when the optional module is excluded
    pub variant_choice: Option<String>,
}

impl Variables {
    /// Derives every identifier from the raw project name and domain.
    pub fn new(
        name: &str,
        domain: &str,
        author: &str,
        include_optional_module: bool,
        variant_choice: Option<String>,
    ) -> Self {
        let project_slug = format_slug(name);
        let type_name = format_type_name(name);
        let package_name = format_package_name(domain, &project_slug);

        Self {
            project_slug,
            type_name,
            package_name,
            group_domain: domain.to_string(),
            author_name: author.to_string(),
            include_optional_module,
            variant_choice: if include_optional_module { variant_choice } else { None },
        }
    }

    /// The rendering context.
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::json!(self)
    }

    /// Package name as a relative directory path (`com.example.x` -> `com/example/x`).
    pub fn package_dir(&self) -> String {
        self.package_name.replace('.', "/")
    }
}
