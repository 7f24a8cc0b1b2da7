use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArcadiaError {
    /// The API answered 403.
    #[error("Forbidden: you are not allowed to access this resource")]
    Forbidden,
    /// Any status other than 200 or 403. The API does not document its other
    /// codes, so rate limits and server errors end up here as well.
    #[error("Not found: this resource does not exist or you are not allowed to access it (status {status})")]
    NotFound { status: StatusCode },
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ArcadiaError {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::FORBIDDEN {
            ArcadiaError::Forbidden
        } else {
            ArcadiaError::NotFound { status }
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ArcadiaError::Forbidden)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ArcadiaError::NotFound { .. })
    }

    /// Status code of the failed response, if the error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ArcadiaError::Forbidden => Some(StatusCode::FORBIDDEN),
            ArcadiaError::NotFound { status } => Some(*status),
            ArcadiaError::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArcadiaError>;
