use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendsError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}: {body}")]
    ApiStatus {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrendsError>;
