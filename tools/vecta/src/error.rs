use thiserror::Error;
use vecta_data::DataError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("could not render configuration: {0}")]
    ConfigRender(#[from] toml::ser::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}
