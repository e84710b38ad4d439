use thiserror::Error;

/// Errors that can come out of a text-generation backend.
///
/// None of these cross the [`analyze`](crate::service::AnalysisService::analyze)
/// boundary: the service folds every variant into the user-facing
/// service-unavailable notice. A well-formed response without usable
/// text is not an error at all; backends report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered with a failure (auth, quota, bad request).
    #[error("API error: {0}")]
    Api(String),

    /// The endpoint answered 2xx but the body did not decode.
    #[error("Malformed response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Http(err.to_string())
    }
}
