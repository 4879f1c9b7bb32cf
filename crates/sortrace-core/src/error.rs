use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors surfaced by trace generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },
}

impl GenerateError {
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::GenerateError;

    #[test]
    fn unknown_algorithm_message_names_the_input() {
        let error = GenerateError::unknown("NotARealSort");
        assert_eq!(error.to_string(), "unknown algorithm: NotARealSort");
    }
}
