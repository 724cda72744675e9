use std::io;

use thiserror::Error;

/// Main error type for sysfacts
#[derive(Debug, Error)]
pub enum SysfactsError {
    /// Terminal initialization or painting failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// External command could not be started or did not finish in time
    #[error("Command `{command}` could not run: {reason}")]
    Execution { command: String, reason: String },

    /// External command exited abnormally
    #[error("Command `{command}` failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Command output did not have the expected shape
    #[error("Unexpected {field} output: {reason}")]
    Parse { field: String, reason: String },
}

impl SysfactsError {
    /// Create an execution error
    pub fn execution(command: impl Into<String>, reason: impl Into<String>) -> Self {
        SysfactsError::Execution {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a command failure error
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        SysfactsError::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a parse error
    pub fn parse(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SysfactsError::Parse {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for sysfacts operations
pub type Result<T> = std::result::Result<T, SysfactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SysfactsError::execution("lspci -mm", "not found");
        assert!(err.to_string().contains("lspci -mm"));
        assert!(err.to_string().contains("not found"));
        assert!(matches!(err, SysfactsError::Execution { .. }));
    }

    #[test]
    fn test_error_creation_helpers() {
        let err = SysfactsError::command_failed("wmic", Some(2));
        assert!(
            matches!(err, SysfactsError::CommandFailed { command, code } if command == "wmic" && code == Some(2))
        );

        let err = SysfactsError::parse("GPU", "no display adapter");
        assert!(
            matches!(err, SysfactsError::Parse { field, reason } if field == "GPU" && reason == "no display adapter")
        );
    }
}
