use thiserror::Error;
use webfinger_jrd::JrdError;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum WebFingerError {
    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("JRD not found ({tried} candidate URLs tried)")]
    NotFound { tried: usize },

    #[error("Cannot find the {rel} link in the host JRD")]
    MissingLink { rel: &'static str },

    #[error("Cannot find the template in the host JRD")]
    MissingTemplate,

    #[error("Fetching resource JRD from {url} failed: {source}")]
    FinalFetch {
        url: String,
        #[source]
        source: CandidateError,
    },

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Jrd(#[from] JrdError),
}

/// Why a single candidate URL was rejected.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid JRD: {0}")]
    Jrd(#[from] JrdError),
}

pub type Result<T> = std::result::Result<T, WebFingerError>;
