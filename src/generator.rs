//! Project generation.
//! Walks the template root, classifies each file and executes the decision.
//! The first error aborts the run; files already written stay on disk.

use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::TemplateClassification;
use crate::error::{Error, Result};
use crate::ioutils::{copy_file, write_file};
use crate::processor::{FileDecision, SkipReason, TemplateProcessor};
use crate::renderer::TemplateRenderer;
use crate::variables::Variables;

/// Counts of what a generation run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rendered: usize,
    pub copied: usize,
    pub skipped: usize,
}

/// Lists every file below `template_root` as a forward-slash relative path,
/// sorted by file name within each directory. Symlinks are followed.
pub fn collect_template_files<P: AsRef<Path>>(template_root: P) -> Result<Vec<String>> {
    let template_root = template_root.as_ref();
    if !template_root.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: template_root.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(template_root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let relative_path = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(relative_path);
    }
    Ok(files)
}

/// Generates a project from `template_root` into `output_root`.
///
/// `on_progress` is called once per file after it has been handled,
/// including skipped files.
///
/// # Errors
/// * `Error::DestinationUnwritable` if `output_root` cannot be created
/// * `Error::RenderError` if a template cannot be read, rendered or written
/// * `Error::CopyError` if a file cannot be copied
pub fn generate<F>(
    engine: &dyn TemplateRenderer,
    classification: &TemplateClassification,
    template_root: &Path,
    output_root: &Path,
    variables: &Variables,
    mut on_progress: F,
) -> Result<Summary>
where
    F: FnMut(&FileDecision),
{
    debug!("Generating project into {}", output_root.display());
    fs::create_dir_all(output_root).map_err(|source| Error::DestinationUnwritable {
        path: output_root.display().to_string(),
        source,
    })?;
    if !output_root.is_dir() {
        return Err(Error::DestinationUnwritable {
            path: output_root.display().to_string(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let files = collect_template_files(template_root)?;
    let config = classification
        .resolve(variables.include_optional_module, variables.variant_choice.as_deref());
    let processor = TemplateProcessor::new(config, variables, template_root, output_root);
    let context = variables.to_context();

    let mut summary = Summary::default();
    for relative_path in &files {
        let mut decision = processor.decide(relative_path);
        if !matches!(decision, FileDecision::Skip { .. }) && !decision.source().exists() {
            debug!("Skipping '{}': it no longer exists", relative_path);
            decision = FileDecision::Skip {
                source: decision.source().to_path_buf(),
                reason: SkipReason::SourceMissing,
            };
        }

        match &decision {
            FileDecision::Render { source, target } => {
                let template = fs::read_to_string(source).map_err(|e| Error::RenderError {
                    path: relative_path.clone(),
                    reason: e.to_string(),
                })?;
                let content = engine.render(relative_path, &template, &context)?;
                write_file(&content, target).map_err(|e| Error::RenderError {
                    path: relative_path.clone(),
                    reason: e.to_string(),
                })?;
                summary.rendered += 1;
            }
            FileDecision::CopyConditional { source, target }
            | FileDecision::CopyStatic { source, target } => {
                copy_file(source, target).map_err(|source| Error::CopyError {
                    path: relative_path.clone(),
                    source,
                })?;
                summary.copied += 1;
            }
            FileDecision::Skip { reason, .. } => {
                debug!("Skipped '{}' ({})", relative_path, reason);
                summary.skipped += 1;
            }
        }
        on_progress(&decision);
    }

    debug!(
        "Generation finished: {} rendered, {} copied, {} skipped",
        summary.rendered, summary.copied, summary.skipped
    );
    Ok(summary)
}
