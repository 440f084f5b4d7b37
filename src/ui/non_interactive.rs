//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{DockerEnvError, Result};

use super::theme::Theme;
use super::{is_yes, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of the environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "DOCKER_ENV_INIT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `DOCKER_ENV_INIT_PROMPT_<KEY>` variables, then
/// from the prompt's default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: Theme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: Theme::plain(),
        }
    }

    fn answer(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let Some(value) = self.answer(prompt) else {
            return Err(DockerEnvError::InvalidInput {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            });
        };

        match &prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(is_yes(&value))),
            PromptType::Select { options } => {
                if options.iter().any(|o| o.value == value) {
                    Ok(PromptResult::String(value))
                } else {
                    Err(DockerEnvError::InvalidInput {
                        message: format!("'{}' is not a valid choice for '{}'", value, prompt.key),
                    })
                }
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(NoopSpinner {
            show: self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("{}", self.theme.format_hint(hint));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints the final line (for non-interactive mode).
struct NoopSpinner {
    show: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.show {
            println!("{}", Theme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", Theme::plain().format_error(msg));
    }
}
