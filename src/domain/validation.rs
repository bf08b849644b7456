use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "server token",
        };
        assert_eq!(err.to_string(), "server token must not be empty");

        let err = ValidationError::InvalidBaseUrl {
            input: "not a url".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid base URL: not a url");
    }
}
