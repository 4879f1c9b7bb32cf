use sortrace_core::GenerateError;
use sortrace_runtime::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// Process exit code: 2 for bad user input, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Generate(_) | Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use sortrace_core::GenerateError;

    #[test]
    fn unknown_algorithm_is_a_usage_error() {
        let error = CliError::from(GenerateError::unknown("bogo"));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "unknown algorithm: bogo");
    }

    #[test]
    fn invalid_constructor_formats_message() {
        let error = CliError::invalid("--len must be at most 10");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "invalid argument: --len must be at most 10"
        );
    }

    #[test]
    fn io_errors_exit_with_one() {
        let error = CliError::from(std::io::Error::other("disk gone"));
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "I/O error: disk gone");
    }
}
