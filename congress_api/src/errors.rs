//! Error types for the API client.

/// Metadata of the HTTP response behind a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Response body, truncated to a readable snippet.
    pub body: String,
}

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A chamber argument was neither `house` nor `senate`.
    #[error("chamber must be either \"house\" or \"senate\", got {0:?}")]
    InvalidChamber(String),
    /// A date argument could not be parsed.
    #[error("could not parse date {0:?}")]
    InvalidDate(String),
    /// An argument was outside the values the endpoint accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A path template slot had no value.
    #[error("missing value for `{slot}` in path template {template:?}")]
    MissingPathArgument { template: String, slot: String },
    /// Congress numbers only exist from 1789 on.
    #[error("there was no Congress before 1789 (got {0})")]
    NoCongress(i32),
    /// No API key was configured when a request was made.
    #[error("no API key configured; pass one explicitly or set {0}")]
    MissingApiKey(&'static str),
    /// The API reported that the requested record does not exist.
    #[error("not found: {message} ({url})")]
    NotFound {
        message: String,
        url: String,
        response: Option<ResponseMeta>,
    },
    /// The API returned a non-success status or an unusable envelope.
    #[error("API error: {message} ({url})")]
    Api {
        message: String,
        url: String,
        response: Option<ResponseMeta>,
    },
    /// A request URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The HTTP transport failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Returns true for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns true for errors raised before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidChamber(_)
                | Error::InvalidDate(_)
                | Error::InvalidArgument(_)
                | Error::MissingPathArgument { .. }
                | Error::NoCongress(_)
                | Error::MissingApiKey(_)
        )
    }

    /// The URL of the failing request, with credentials removed.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::NotFound { url, .. } | Error::Api { url, .. } => Some(url),
            _ => None,
        }
    }

    /// The HTTP response metadata, when the failure came from a response.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            Error::NotFound { response, .. } | Error::Api { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}
