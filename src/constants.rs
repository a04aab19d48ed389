//! Common constants used throughout create-halo-plugin.

/// Suffix marking a file as a template to render
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Directory with the bundled Halo plugin template
pub const BUNDLED_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/template");

/// Prefix of the output directory when none is given on the command line
pub const DEFAULT_DIR_PREFIX: &str = "plugin-";

/// Author name used when the current user cannot be determined
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// The only entry an output directory may already contain
pub const ALLOWED_EXISTING_ENTRY: &str = ".git";
