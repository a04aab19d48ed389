//! Template classification for create-halo-plugin.
//! Declares which files of a template root are templates, which belong to a
//! variant, which subtree is optional and which file names carry the generic
//! type name. The bundled template is described by [`TemplateClassification::default`];
//! other templates can ship their own classification as JSON or YAML.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::validation::ValidationError;
use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static description of a template root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateClassification {
    /// Relative paths that are always rendered
    #[serde(default)]
    pub template_files: IndexSet<String>,

    /// Variant name to the files only that variant keeps
    #[serde(default)]
    pub conditional_files: IndexMap<String, IndexSet<String>>,

    /// Top-level directory generated only when the optional module is enabled
    #[serde(default)]
    pub optional_module: Option<String>,

    /// File names renamed after the type name and moved into the package directory
    #[serde(default)]
    pub placeholder_files: IndexSet<String>,
}

impl Default for TemplateClassification {
    fn default() -> Self {
        let template_files = [
            "README.md.template",
            "build.gradle.template",
            "settings.gradle.template",
            "src/main/java/Plugin.java.template",
            "src/main/resources/plugin.yaml.template",
            "src/test/java/PluginTest.java.template",
            "ui/package.json.template",
            "ui/src/index.ts.template",
        ];
        let conditional_files = [
            ("rsbuild", ["ui/rsbuild.config.ts"]),
            ("vite", ["ui/vite.config.ts"]),
        ];

        Self {
            template_files: template_files.iter().map(|s| s.to_string()).collect(),
            conditional_files: conditional_files
                .iter()
                .map(|(variant, files)| {
                    (variant.to_string(), files.iter().map(|s| s.to_string()).collect())
                })
                .collect(),
            optional_module: Some("ui".to_string()),
            placeholder_files: ["Plugin.java", "PluginTest.java"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Converts a relative path to the forward-slash form used for lookups.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

impl TemplateClassification {
    /// Loads a classification from a JSON or YAML file and validates it.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the file cannot be read, parsed or fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading template classification from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parses a classification, trying JSON first and YAML second.
    pub fn parse(content: &str) -> Result<Self> {
        let classification: Self = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(content).map_err(|e| {
                Error::ConfigError(format!("Invalid classification format: {}", e))
            })?,
        };
        let classification = classification.normalized();
        classification.validate()?;
        Ok(classification)
    }

    fn normalized(self) -> Self {
        Self {
            template_files: self.template_files.iter().map(|p| normalize_path(p)).collect(),
            conditional_files: self
                .conditional_files
                .into_iter()
                .map(|(variant, files)| {
                    (variant, files.iter().map(|p| normalize_path(p)).collect())
                })
                .collect(),
            optional_module: self.optional_module.map(|m| m.trim_matches('/').to_string()),
            placeholder_files: self.placeholder_files,
        }
    }

    /// Checks the structural invariants of the classification.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a template path lacks the template suffix, a
    ///   path is both a template and conditional, a path belongs to several
    ///   variants, or the optional module is not a single directory name
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = self.template_files.iter().find(|p| !p.ends_with(TEMPLATE_SUFFIX)) {
            return Err(Error::ConfigError(format!(
                "template file '{}' does not end with '{}'",
                path, TEMPLATE_SUFFIX
            )));
        }

        let mut owners: IndexMap<&str, &str> = IndexMap::new();
        for (variant, files) in &self.conditional_files {
            for file in files {
                if self.template_files.contains(file) {
                    return Err(Error::ConfigError(format!(
                        "'{}' is both a template and a conditional file of '{}'",
                        file, variant
                    )));
                }
                if let Some(owner) = owners.insert(file, variant) {
                    return Err(Error::ConfigError(format!(
                        "'{}' belongs to both '{}' and '{}'",
                        file, owner, variant
                    )));
                }
            }
        }

        if let Some(module) = &self.optional_module {
            if module.is_empty() || module.contains('/') {
                return Err(Error::ConfigError(format!(
                    "optional module '{}' must be a single directory name",
                    module
                )));
            }
        }

        Ok(())
    }

    /// Verifies that every declared path exists under `template_root`.
    pub fn check_template_root<P: AsRef<Path>>(&self, template_root: P) -> Result<()> {
        let template_root = template_root.as_ref();
        let declared = self
            .template_files
            .iter()
            .chain(self.conditional_files.values().flatten());
        for path in declared {
            if !template_root.join(path).is_file() {
                return Err(Error::ConfigError(format!(
                    "'{}' is declared but missing from '{}'",
                    path,
                    template_root.display()
                )));
            }
        }
        Ok(())
    }

    /// Names of all variants in declaration order.
    pub fn variant_names(&self) -> Vec<&str> {
        self.conditional_files.keys().map(String::as_str).collect()
    }

    /// Checks that `name` is one of the declared variants.
    pub fn validate_variant(&self, name: &str) -> std::result::Result<(), ValidationError> {
        if self.conditional_files.contains_key(name) {
            Ok(())
        } else {
            Err(ValidationError::UnknownVariant {
                name: name.to_string(),
                expected: self.variant_names().join(", "),
            })
        }
    }

    /// Whether the path belongs to any variant.
    pub fn is_conditional(&self, relative_path: &str) -> bool {
        self.conditional_files.values().any(|files| files.contains(relative_path))
    }

    /// Whether the path lies inside the optional module subtree.
    pub fn is_in_optional_module(&self, relative_path: &str) -> bool {
        self.optional_module.as_deref().is_some_and(|module| {
            relative_path.strip_prefix(module).is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Whether the file name carries the generic type name.
    pub fn is_placeholder_file(&self, file_name: &str) -> bool {
        self.placeholder_files.contains(file_name)
    }

    /// Resolves the per-run view for the given toggle and variant.
    ///
    /// The selected conditional set is empty unless the optional module is
    /// included and a known variant is chosen.
    pub fn resolve(
        &self,
        include_optional_module: bool,
        variant_choice: Option<&str>,
    ) -> FileProcessingConfig<'_> {
        let selected = if include_optional_module {
            variant_choice.and_then(|variant| self.conditional_files.get(variant))
        } else {
            None
        };
        FileProcessingConfig { classification: self, include_optional_module, selected }
    }
}

/// Classification resolved against one run's toggle and variant.
#[derive(Debug, Clone, Copy)]
pub struct FileProcessingConfig<'a> {
    pub classification: &'a TemplateClassification,
    pub include_optional_module: bool,
    selected: Option<&'a IndexSet<String>>,
}

impl FileProcessingConfig<'_> {
    /// Whether the path belongs to the selected variant.
    pub fn is_selected(&self, relative_path: &str) -> bool {
        self.selected.is_some_and(|files| files.contains(relative_path))
    }

    /// Whether the path belongs to a variant other than the selected one.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.classification.is_conditional(relative_path) && !self.is_selected(relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification_is_valid() {
        let classification = TemplateClassification::default();
        assert!(classification.validate().is_ok());
        assert_eq!(classification.variant_names(), vec!["rsbuild", "vite"]);
        assert!(classification.is_placeholder_file("Plugin.java"));
        assert!(classification.is_placeholder_file("PluginTest.java"));
    }

    #[test]
    fn test_optional_module_membership() {
        let classification = TemplateClassification::default();
        assert!(classification.is_in_optional_module("ui/vite.config.ts"));
        assert!(classification.is_in_optional_module("ui/src/index.ts.template"));
        assert!(!classification.is_in_optional_module("ui"));
        assert!(!classification.is_in_optional_module("uikit/file.txt"));
        assert!(!classification.is_in_optional_module("src/ui/file.txt"));
    }

    #[test]
    fn test_resolve_selects_variant_only_with_module() {
        let classification = TemplateClassification::default();

        let config = classification.resolve(true, Some("vite"));
        assert!(config.is_selected("ui/vite.config.ts"));
        assert!(config.is_excluded("ui/rsbuild.config.ts"));
        assert!(!config.is_excluded("build.gradle.template"));

        let config = classification.resolve(false, Some("vite"));
        assert!(!config.is_selected("ui/vite.config.ts"));
        assert!(config.is_excluded("ui/vite.config.ts"));

        let config = classification.resolve(true, None);
        assert!(config.is_excluded("ui/vite.config.ts"));
        assert!(config.is_excluded("ui/rsbuild.config.ts"));
    }

    #[test]
    fn test_validate_variant() {
        let classification = TemplateClassification::default();
        assert!(classification.validate_variant("rsbuild").is_ok());
        let err = classification.validate_variant("webpack").unwrap_err();
        assert_eq!(err.to_string(), "unknown variant 'webpack' (expected one of: rsbuild, vite)");
    }

    #[test]
    fn test_parse_yaml() {
        let content = r#"
template_files:
  - "README.md.template"
conditional_files:
  a: ["extra\\a.txt"]
  b: ["extra/b.txt"]
optional_module: "extra/"
"#;
        let classification = TemplateClassification::parse(content).unwrap();
        assert!(classification.conditional_files["a"].contains("extra/a.txt"));
        assert_eq!(classification.optional_module.as_deref(), Some("extra"));
        assert!(classification.placeholder_files.is_empty());
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"template_files": ["a.txt.template"], "placeholder_files": ["Main.java"]}"#;
        let classification = TemplateClassification::parse(content).unwrap();
        assert!(classification.template_files.contains("a.txt.template"));
        assert!(classification.is_placeholder_file("Main.java"));
        assert_eq!(classification.optional_module, None);
    }

    #[test]
    fn test_validate_rejects_overlaps() {
        let content = r#"{"conditional_files": {"a": ["x.txt"], "b": ["x.txt"]}}"#;
        assert!(matches!(TemplateClassification::parse(content), Err(Error::ConfigError(_))));

        let content = r#"{"template_files": ["x.template"], "conditional_files": {"a": ["x.template"]}}"#;
        assert!(matches!(TemplateClassification::parse(content), Err(Error::ConfigError(_))));

        let content = r#"{"template_files": ["x.txt"]}"#;
        assert!(matches!(TemplateClassification::parse(content), Err(Error::ConfigError(_))));

        let content = r#"{"optional_module": "a/b"}"#;
        assert!(matches!(TemplateClassification::parse(content), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let content = r#"{"templates": []}"#;
        assert!(matches!(TemplateClassification::parse(content), Err(Error::ConfigError(_))));
    }
}
