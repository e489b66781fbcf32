use thiserror::Error;

/// Main error type for aghblock
///
/// Usage errors (unknown subcommand, missing argument) are owned by clap
/// and never reach this enum.
#[derive(Error, Debug)]
pub enum AghError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote error: {status} {text}")]
    Remote { status: u16, text: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn remote_error_carries_status_and_text() {
        let err = AghError::Remote {
            status: 503,
            text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Remote error: 503 Service Unavailable");
    }
}
