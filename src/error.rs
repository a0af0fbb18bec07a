use thiserror::Error;

/// Errors raised while folding parsed sections into a Clash configuration
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Malformed address `{0}`, expected host:port")]
    MalformedAddress(String),

    #[error("Invalid port in address `{0}`")]
    InvalidPort(String),

    #[error("YAML encoding error: {0}")]
    Encode(#[from] serde_yaml::Error),
}

/// Errors raised while retrieving a remote source document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Failed to send request: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Response body exceeds {0} bytes")]
    TooLarge(usize),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// End-to-end failure of a fetch-then-convert run
#[derive(Error, Debug)]
pub enum Surge2ClashError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Errors raised while loading the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
