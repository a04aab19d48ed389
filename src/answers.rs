//! Collects the values a project needs, from flags first and prompts second.

use log::debug;

use crate::cli::{Args, UiTool};
use crate::config::TemplateClassification;
use crate::constants::DEFAULT_AUTHOR;
use crate::error::Result;
use crate::ioutils::current_user;
use crate::prompt::Prompter;
use crate::validation::{validate_domain, validate_slug, ValidationError};
use crate::variables::Variables;

type Validator = fn(&str) -> std::result::Result<(), ValidationError>;

/// Whether the optional module is generated and with which variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub include_optional_module: bool,
    pub variant_choice: Option<String>,
}

pub struct AnswerCollector<'a> {
    prompter: &'a dyn Prompter,
    classification: &'a TemplateClassification,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter, classification: &'a TemplateClassification) -> Self {
        Self { prompter, classification }
    }

    /// Builds the variable bag from `args`, prompting for anything missing.
    ///
    /// Values given as flags are validated once and rejected with a
    /// `ValidationError`. Prompted values are asked again until they pass.
    /// With `--yes`, the author and module options fall back to their
    /// defaults instead of being asked.
    pub fn collect(&self, args: &Args) -> Result<Variables> {
        let name =
            self.text(args.name.as_deref(), "Plugin name (e.g., my-awesome-plugin)", validate_slug)?;
        let domain = self.text(
            args.domain.as_deref(),
            "Domain for group and package name (e.g., com.example)",
            validate_domain,
        )?;
        let author = match &args.author {
            Some(author) => author.clone(),
            None if args.yes => current_user(DEFAULT_AUTHOR),
            None => self.prompter.input("Author name", Some(&current_user(DEFAULT_AUTHOR)))?,
        };
        let options = self.options(args)?;

        debug!("Collected answers: name={}, domain={}, options={:?}", name, domain, options);
        Ok(Variables::new(
            &name,
            &domain,
            &author,
            options.include_optional_module,
            options.variant_choice,
        ))
    }

    fn text(&self, preset: Option<&str>, prompt: &str, validator: Validator) -> Result<String> {
        if let Some(value) = preset {
            validator(value)?;
            return Ok(value.to_string());
        }
        loop {
            let value = self.prompter.input(prompt, None)?;
            match validator(&value) {
                Ok(()) => return Ok(value),
                Err(e) => eprintln!("✗ {}", e),
            }
        }
    }

    /// Resolves the optional module toggle and the variant.
    pub fn options(&self, args: &Args) -> Result<ProjectOptions> {
        let disabled = ProjectOptions { include_optional_module: false, variant_choice: None };
        if args.no_ui || self.classification.optional_module.is_none() {
            return Ok(disabled);
        }
        if let Some(tool) = args.ui_tool {
            self.classification.validate_variant(tool.as_str())?;
            return Ok(ProjectOptions {
                include_optional_module: true,
                variant_choice: Some(tool.as_str().to_string()),
            });
        }

        let variants = self.classification.variant_names();
        if args.yes {
            return Ok(ProjectOptions {
                include_optional_module: true,
                variant_choice: variants.first().map(|v| v.to_string()),
            });
        }

        if !self.prompter.confirm("Include UI module?", true)? {
            return Ok(disabled);
        }
        if variants.is_empty() {
            return Ok(ProjectOptions { include_optional_module: true, variant_choice: None });
        }

        let items: Vec<String> = variants.iter().map(|v| variant_title(v)).collect();
        let index = self.prompter.select("Choose UI build tool", &items, 0)?;
        Ok(ProjectOptions {
            include_optional_module: true,
            variant_choice: variants.get(index).map(|v| v.to_string()),
        })
    }
}

fn variant_title(variant: &str) -> String {
    UiTool::all()
        .iter()
        .find(|tool| tool.as_str() == variant)
        .map(|tool| tool.title().to_string())
        .unwrap_or_else(|| variant.to_string())
}
