#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {family} address '{value}'")]
    InvalidAddress { family: &'static str, value: String },

    #[error("Invalid listen address '{0}': expected host:port or :port")]
    InvalidListenAddress(String),

    #[error("Unknown answer policy '{0}': expected 'matched' or 'both'")]
    UnknownAnswerPolicy(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
