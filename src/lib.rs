//! create-halo-plugin scaffolds Halo plugin projects.
//! It collects a few naming parameters, then materializes a template
//! directory: rendering templates, selecting variant files and skipping the
//! optional UI module when it is not wanted.

/// Collects answers from flags and prompts
pub mod answers;

/// Command-line interface module
pub mod cli;

/// Template classification: templates, variants, optional module
/// Loadable from JSON or YAML
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Identifier formatting (slug, type name, package name)
pub mod formatter;

/// Walks the template root and executes per-file decisions
pub mod generator;

/// A set of helpers for working with the file system
pub mod ioutils;

/// Logger setup
pub mod logger;

/// Per-file classification and target path resolution
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// End-to-end run orchestration
pub mod runner;

/// Slug and domain validators
pub mod validation;

/// The variable bag passed to templates
pub mod variables;
