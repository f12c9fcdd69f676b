use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaiverError {
    #[error("Resend API error: {0}")]
    EmailApi(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for WaiverError {
    fn from(error: reqwest::Error) -> Self {
        WaiverError::HttpError(error.to_string())
    }
}
