use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlBuildError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("GitLab API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Stored build number {value:?} is not a non-negative integer")]
    InvalidBuildNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Build number {0} cannot be incremented any further")]
    BuildNumberOverflow(u64),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GlBuildError>;
