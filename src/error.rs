use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("couldn't load PDF document: {0}")]
    DocumentLoad(String),

    #[error("{0}")]
    Structure(String),

    #[error("menu text is empty")]
    EmptyMenu,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// True for both transport failures and non-success statuses.
    pub fn is_fetch(&self) -> bool {
        matches!(self, MenuError::Fetch { .. } | MenuError::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
