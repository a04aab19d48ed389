//! Per-file classification.
//! Decides for every template-root file whether it is rendered, copied or
//! skipped, and where its output goes.

use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::FileProcessingConfig;
use crate::constants::TEMPLATE_SUFFIX;
use crate::variables::Variables;

/// What happens to a single template-root file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDecision {
    /// Render the template and write it to `target`
    Render { source: PathBuf, target: PathBuf },
    /// Copy a file of the selected variant
    CopyConditional { source: PathBuf, target: PathBuf },
    /// Copy a plain file
    CopyStatic { source: PathBuf, target: PathBuf },
    Skip { source: PathBuf, reason: SkipReason },
}

/// Why a file produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file lives in the optional module, which is disabled
    OptionalModuleDisabled,
    /// The file belongs to a variant that was not chosen
    VariantNotSelected,
    /// The file disappeared between enumeration and processing
    SourceMissing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OptionalModuleDisabled => write!(f, "optional module disabled"),
            SkipReason::VariantNotSelected => write!(f, "variant not selected"),
            SkipReason::SourceMissing => write!(f, "source file missing"),
        }
    }
}

impl FileDecision {
    pub fn source(&self) -> &Path {
        match self {
            FileDecision::Render { source, .. }
            | FileDecision::CopyConditional { source, .. }
            | FileDecision::CopyStatic { source, .. }
            | FileDecision::Skip { source, .. } => source,
        }
    }

    /// The output path, `None` for skipped files.
    pub fn target(&self) -> Option<&Path> {
        match self {
            FileDecision::Render { target, .. }
            | FileDecision::CopyConditional { target, .. }
            | FileDecision::CopyStatic { target, .. } => Some(target),
            FileDecision::Skip { .. } => None,
        }
    }

    /// Short label used in progress output.
    pub fn action(&self) -> &'static str {
        match self {
            FileDecision::Render { .. } => "Render template",
            FileDecision::CopyConditional { .. } => "Copy conditional file",
            FileDecision::CopyStatic { .. } => "Copy file",
            FileDecision::Skip { .. } => "Skip",
        }
    }
}

pub struct TemplateProcessor<'a> {
    config: FileProcessingConfig<'a>,
    variables: &'a Variables,
    template_root: &'a Path,
    output_root: &'a Path,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        config: FileProcessingConfig<'a>,
        variables: &'a Variables,
        template_root: &'a Path,
        output_root: &'a Path,
    ) -> Self {
        Self { config, variables, template_root, output_root }
    }

    /// Classifies a file given by its forward-slash path relative to the template root.
    ///
    /// Rules, first match wins:
    /// 1. inside the disabled optional module: skip
    /// 2. template suffix: render
    /// 3. file of a variant that was not chosen: skip
    /// 4. file of the chosen variant: conditional copy
    /// 5. anything else: static copy
    pub fn decide(&self, relative_path: &str) -> FileDecision {
        let source = self.template_root.join(relative_path);
        let classification = self.config.classification;

        let decision = if !self.config.include_optional_module
            && classification.is_in_optional_module(relative_path)
        {
            FileDecision::Skip { source, reason: SkipReason::OptionalModuleDisabled }
        } else if relative_path.ends_with(TEMPLATE_SUFFIX) {
            FileDecision::Render { source, target: self.render_target(relative_path) }
        } else if self.config.is_excluded(relative_path) {
            FileDecision::Skip { source, reason: SkipReason::VariantNotSelected }
        } else if self.config.is_selected(relative_path) {
            FileDecision::CopyConditional { source, target: self.output_root.join(relative_path) }
        } else {
            FileDecision::CopyStatic { source, target: self.output_root.join(relative_path) }
        };

        debug!("{}: '{}'", decision.action(), relative_path);
        decision
    }

    /// Computes where a rendered template lands.
    ///
    /// The template suffix is stripped. Placeholder files are prefixed with the
    /// type name and moved into the package directory below their parent, so
    /// `src/main/java/Plugin.java.template` becomes
    /// `src/main/java/com/example/links/LinksPlugin.java`.
    pub fn render_target(&self, relative_path: &str) -> PathBuf {
        let stripped = relative_path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(relative_path);
        let (parent, file_name) = match stripped.rsplit_once('/') {
            Some((parent, file_name)) => (Some(parent), file_name),
            None => (None, stripped),
        };

        let mut target = self.output_root.to_path_buf();
        if let Some(parent) = parent {
            target.push(parent);
        }

        if self.config.classification.is_placeholder_file(file_name) {
            for segment in self.variables.package_dir().split('/') {
                target.push(segment);
            }
            target.push(format!("{}{}", self.variables.type_name, file_name));
        } else {
            target.push(file_name);
        }
        target
    }
}
