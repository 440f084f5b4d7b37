//! Interactive prompts.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{DockerEnvError, Result};

use super::{is_yes, Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to DockerEnvError.
fn map_dialoguer_err(e: dialoguer::Error) -> DockerEnvError {
    DockerEnvError::Io(e.into())
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt.default.as_deref().map(is_yes).unwrap_or(false);

    let result = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(DockerEnvError::InvalidInput {
            message: format!("Nothing to choose for '{}'", prompt.key),
        });
    }

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = default_index(prompt.default.as_deref(), options);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}

fn default_index(default: Option<&str>, options: &[PromptOption]) -> usize {
    default
        .and_then(|d| options.iter().position(|o| o.value == d))
        .unwrap_or(0)
}
