//! Orchestrates a full run: pre-flight checks, answers, confirmation and generation.

use log::debug;
use std::path::{Path, PathBuf};

use crate::answers::AnswerCollector;
use crate::cli::Args;
use crate::config::TemplateClassification;
use crate::constants::DEFAULT_DIR_PREFIX;
use crate::error::{Error, Result};
use crate::generator::{generate, Summary};
use crate::ioutils::check_output_dir;
use crate::processor::FileDecision;
use crate::prompt::Prompter;
use crate::renderer::MiniJinjaRenderer;
use crate::variables::Variables;

/// Loads the classification given on the command line, or the bundled one.
pub fn load_classification(args: &Args) -> Result<TemplateClassification> {
    match &args.classification {
        Some(path) => TemplateClassification::load(path),
        None => Ok(TemplateClassification::default()),
    }
}

/// The explicit project directory, or `plugin-<slug>` in the current directory.
pub fn resolve_output_dir(project_dir: Option<&Path>, variables: &Variables) -> PathBuf {
    match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from(format!("{}{}", DEFAULT_DIR_PREFIX, variables.project_slug)),
    }
}

fn print_configuration(variables: &Variables, output_dir: &Path) {
    println!("\n📋 Project Configuration:");
    println!("   Name: {}", variables.project_slug);
    println!("   Domain: {}", variables.group_domain);
    println!("   Package: {}", variables.package_name);
    println!("   Author: {}", variables.author_name);
    match &variables.variant_choice {
        Some(variant) => println!("   UI Tool: {}", variant),
        None if variables.include_optional_module => println!("   UI: included"),
        None => println!("   UI: not included"),
    }
    println!("   Output Directory: {}", output_dir.display());
}

fn print_progress(decision: &FileDecision, output_root: &Path) {
    if let Some(target) = decision.target() {
        let shown = target.strip_prefix(output_root).unwrap_or(target);
        println!("✓ {}: {}", decision.action(), shown.display());
    }
}

/// Main application logic.
///
/// # Returns
/// * `Ok(Some(summary))` - the project was generated
/// * `Ok(None)` - the user declined the confirmation
///
/// # Flow
/// 1. Rejects a non-empty explicit project directory before any question
/// 2. Loads and checks the template classification
/// 3. Collects answers from flags and prompts
/// 4. Checks the resolved output directory and asks for confirmation
/// 5. Generates the project
pub fn run(args: &Args, prompter: &dyn Prompter) -> Result<Option<Summary>> {
    if let Some(dir) = &args.project_dir {
        check_output_dir(dir)?;
    }

    if !args.template.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: args.template.display().to_string(),
        });
    }
    let classification = load_classification(args)?;
    classification.check_template_root(&args.template)?;

    let variables = AnswerCollector::new(prompter, &classification).collect(args)?;

    let output_dir = resolve_output_dir(args.project_dir.as_deref(), &variables);
    if args.project_dir.is_none() {
        check_output_dir(&output_dir)?;
    }

    print_configuration(&variables, &output_dir);
    if !args.yes && !prompter.confirm("Create project?", true)? {
        println!("❌ Operation cancelled");
        return Ok(None);
    }

    println!("🔄 Generating project...");
    let engine = MiniJinjaRenderer::new();
    let summary = generate(
        &engine,
        &classification,
        &args.template,
        &output_dir,
        &variables,
        |decision| print_progress(decision, &output_dir),
    )?;
    debug!("{:?}", summary);

    let dir_name = output_dir.file_name().map(|n| n.to_string_lossy().into_owned());
    println!("\n✅ Project created successfully!");
    println!("\n📖 Next steps:");
    println!("   cd {}", dir_name.unwrap_or_else(|| output_dir.display().to_string()));
    println!("   ./gradlew haloServer");
    Ok(Some(summary))
}
