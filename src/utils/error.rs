use crate::domain::model::WorkflowDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TennisError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("workflow '{identifier}' not found\nAvailable workflows:\n{}", format_candidates(.candidates))]
    WorkflowNotFound {
        identifier: String,
        candidates: Vec<WorkflowDescriptor>,
    },

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    ApiError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Validation,
    Resolution,
    Remote,
}

impl TennisError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Config,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::WorkflowNotFound { .. } => ErrorCategory::Resolution,
            Self::HttpError(_) | Self::ApiError { .. } => ErrorCategory::Remote,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigError { .. } => {
                "Set GITHUB_TOKEN (or GH_TOKEN) and GITHUB_REPOSITORY, or pass --token/--owner/--repo"
            }
            Self::ValidationError { .. } => "Check the command arguments against `tennis --help`",
            Self::WorkflowNotFound { .. } => {
                "Use a workflow name, file name, or path from the list above"
            }
            Self::HttpError(_) => "Check network connectivity and the --api-url setting",
            Self::ApiError { status: 401, .. } | Self::ApiError { status: 403, .. } => {
                "Check that the token is valid and has the required repository scopes"
            }
            Self::ApiError { .. } => "Check the repository name and the message returned by GitHub",
        }
    }

    /// Every failure ends the command with a non-zero status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn format_candidates(candidates: &[WorkflowDescriptor]) -> String {
    if candidates.is_empty() {
        return "  (none)".to_string();
    }
    candidates
        .iter()
        .map(|w| format!("  - {} ({})", w.name, w.path))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, TennisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_candidates() {
        let err = TennisError::WorkflowNotFound {
            identifier: "rebuild".to_string(),
            candidates: vec![WorkflowDescriptor {
                id: 7,
                name: "Rebuild Rankings".to_string(),
                path: ".github/workflows/rebuild-rankings.yml".to_string(),
            }],
        };

        assert_eq!(
            err.to_string(),
            "workflow 'rebuild' not found\nAvailable workflows:\n  - Rebuild Rankings (.github/workflows/rebuild-rankings.yml)"
        );
        assert_eq!(err.category(), ErrorCategory::Resolution);
    }

    #[test]
    fn test_api_error_passes_message_through() {
        let err = TennisError::ApiError {
            status: 422,
            message: r#"{"message":"Validation Failed"}"#.to_string(),
        };
        assert!(err.to_string().ends_with(r#"{"message":"Validation Failed"}"#));
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_ne!(err.exit_code(), 0);
    }
}
