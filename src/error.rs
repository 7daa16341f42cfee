use thiserror::Error;

/// Errors that can occur while scraping and exporting recipes
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to reach the API (DNS, timeout, connection reset, ...)
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("Request for letter '{letter}' failed with status {status}")]
    Status {
        letter: char,
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON in the expected shape
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to write the output file
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
