//! Error handling for create-halo-plugin.
//! Defines the error types and the result alias used throughout the crate.

use std::io;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while collecting answers or generating a project.
///
/// Engine errors (`DestinationUnwritable`, `RenderError`, `CopyError`) abort
/// the current run. Files written before the failure stay on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations outside the engine
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A slug, domain or variant rejected by a validator
    #[error("Validation error: {0}.")]
    ValidationError(#[from] ValidationError),

    /// The output root cannot be created or is not a directory
    #[error("Cannot create or access output directory '{path}'. Original error: {source}")]
    DestinationUnwritable { path: String, source: io::Error },

    /// A template references an unknown variable, has invalid syntax or cannot be written
    #[error("Failed to render '{path}'. Original error: {reason}")]
    RenderError { path: String, reason: String },

    /// A static or conditional file could not be copied
    #[error("Failed to copy '{path}'. Original error: {source}")]
    CopyError { path: String, source: io::Error },

    /// Represents errors in the template classification file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents an error when the output directory already holds files
    #[error("Cannot proceed: directory '{output_dir}' is not empty. Please choose a different directory or remove existing files.")]
    OutputDirectoryNotEmptyError { output_dir: String },

    /// Represents an error when the template root does not exist
    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// An interactive prompt failed or was interrupted
    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),
}

impl Error {
    /// Whether the error happened after the output directory was touched.
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            Error::DestinationUnwritable { .. }
                | Error::RenderError { .. }
                | Error::CopyError { .. }
        )
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Generation errors get an extra hint, since a partial project may be left
/// behind in the output directory.
pub fn default_error_handler(err: Error) {
    eprintln!("❌ Creation failed: {}", err);
    if err.is_generation_error() {
        eprintln!("The output directory may contain a partially generated project. Remove it before retrying.");
    }
    std::process::exit(1);
}
