use inquire::{InquireError, MultiSelect, Text};

use vitekit_core::error::Result;
use vitekit_core::{Feature, ProjectPrompt, ScaffoldError};

/// inquire を使った対話式プロンプト。
///
/// Esc / Ctrl+C によるキャンセルは `ScaffoldError::Prompt` として返す。
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompt;

impl InquirePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectPrompt for InquirePrompt {
    fn input_project_name(&self, default: &str) -> Result<String> {
        Text::new("Project name:")
            .with_default(default)
            .prompt()
            .map_err(prompt_error)
    }

    fn select_features(&self, choices: &[Feature]) -> Result<Vec<Feature>> {
        MultiSelect::new("Select features:", choices.to_vec())
            .with_help_message("space to toggle, enter to confirm")
            .prompt()
            .map_err(prompt_error)
    }
}

fn prompt_error(e: InquireError) -> ScaffoldError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            ScaffoldError::Prompt("cancelled by user".to_string())
        }
        other => ScaffoldError::Prompt(other.to_string()),
    }
}


#[cfg(test)]
mod tests_inquire_prompt {
    use super::*;

    #[test]
    fn test_inquire_prompt_default() {
        let _prompt: InquirePrompt = Default::default();
        let _prompt = InquirePrompt::new();
    }

    #[test]
    fn test_prompt_error_maps_cancel() {
        let err = prompt_error(InquireError::OperationCanceled);
        assert_eq!(err.to_string(), "prompt failed: cancelled by user");
        let err = prompt_error(InquireError::OperationInterrupted);
        assert!(matches!(err, ScaffoldError::Prompt(_)));
    }
}
