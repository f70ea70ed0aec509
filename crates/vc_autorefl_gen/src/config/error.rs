use thiserror::Error;

/// Failure to build a [`Config`](crate::Config) from external input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[cfg(feature = "toml")]
    #[error("Failed to parse config document: {0}")]
    Parse(#[from] toml_edit::TomlError),

    #[error("Unknown config key `{0}`")]
    UnknownKey(String),

    #[error("Config key `{key}` expects {expected}")]
    InvalidType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("Unknown attr list const mode `{0}`, expected `constexpr`, `const` or `non_const`")]
    UnknownConstMode(String),
}
