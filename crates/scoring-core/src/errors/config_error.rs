/// Errors that can occur while loading configuration or policy documents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("unsupported config format for {path}, expected .toml or .json")]
    UnsupportedFormat { path: String },
}
