///! Error taxonomy for NASA NEO API operations
///!
///! Every failure is either a transport problem (the request never
///! produced a usable 2xx body) or a structural problem (the body did not
///! have the shape the API promises). User-facing output collapses both
///! into one "Error: ..." line; callers and tests can still tell them
///! apart via [`NeoError::kind`].

use thiserror::Error;

/// Coarse failure family of a [`NeoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// DNS, connect, timeout, read, or HTTP-status failures.
    Transport,
    /// Invalid JSON, a missing required key, or a wrong-typed field.
    Structural,
}

#[derive(Debug, Error)]
pub enum NeoError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status: {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response is missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("unexpected JSON type at `{0}`")]
    UnexpectedType(&'static str),
}

impl NeoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NeoError::Request(_) | NeoError::HttpStatus(_) => ErrorKind::Transport,
            NeoError::Parse(_) | NeoError::MissingKey(_) | NeoError::UnexpectedType(_) => {
                ErrorKind::Structural
            }
        }
    }
}
