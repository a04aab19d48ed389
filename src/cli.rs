//! Command-line interface implementation for create-halo-plugin.
//! Provides argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::constants::BUNDLED_TEMPLATE_DIR;

/// UI build tools offered for the console module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UiTool {
    /// The Rspack powered build tool (recommended)
    Rsbuild,
    /// The build tool for the web
    Vite,
}

impl UiTool {
    /// Variant name used by the template classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            UiTool::Rsbuild => "rsbuild",
            UiTool::Vite => "vite",
        }
    }

    /// Label shown in the interactive selection.
    pub fn title(&self) -> &'static str {
        match self {
            UiTool::Rsbuild => "Rsbuild - The Rspack Powered Build Tool (Recommended)",
            UiTool::Vite => "Vite - The Build Tool for the Web",
        }
    }

    pub fn all() -> [UiTool; 2] {
        [UiTool::Rsbuild, UiTool::Vite]
    }
}

/// Command-line arguments structure for create-halo-plugin.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Quickly create Halo plugin development templates",
    long_about = None,
    after_help = "Examples:\n  create-halo-plugin                     # Create in plugin-{name} directory\n  create-halo-plugin my-plugin           # Create in my-plugin directory\n  create-halo-plugin ./my-awesome-plugin # Create in specified path"
)]
pub struct Args {
    /// Directory where the project will be created (default: plugin-<name>)
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Plugin name, e.g. my-awesome-plugin
    #[arg(short, long)]
    pub name: Option<String>,

    /// Domain used for the group and package name, e.g. com.example
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Author name (default: current user)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Build tool for the UI module
    #[arg(short, long, value_enum, conflicts_with = "no_ui")]
    pub ui_tool: Option<UiTool>,

    /// Do not generate the UI module
    #[arg(long)]
    pub no_ui: bool,

    /// Template directory to generate from
    #[arg(long, value_name = "DIR", default_value = BUNDLED_TEMPLATE_DIR)]
    pub template: PathBuf,

    /// JSON or YAML file describing how the template files are classified
    #[arg(long, value_name = "FILE")]
    pub classification: Option<PathBuf>,

    /// Skip the final confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments, exiting with clap's error handling on failure.
pub fn get_args() -> Args {
    Args::parse()
}
