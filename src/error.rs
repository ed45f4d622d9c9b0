/// Errors raised while talking to the upstream completion API.
///
/// None of these reach the HTTP caller: the curator service logs them and
/// answers with the endpoint's default payload instead.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl AppError {
    /// True when the upstream call ran past the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::HttpClient(e) if e.is_timeout())
    }
}

pub type AppResult<T> = Result<T, AppError>;
