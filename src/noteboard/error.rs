use crate::model::NoteId;
use reqwest::Method;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteboardError {
    #[error("Request failed: {method} {url}: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed: {method} {url} returned {status}")]
    Status {
        method: Method,
        url: String,
        status: u16,
    },

    #[error("Request failed: malformed response from {method} {url}: {source}")]
    Decode {
        method: Method,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request failed: {0}")]
    Unavailable(String),

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl NoteboardError {
    /// True for every failure the board treats as "request failed".
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            NoteboardError::Transport { .. }
                | NoteboardError::Status { .. }
                | NoteboardError::Decode { .. }
                | NoteboardError::Unavailable(_)
                | NoteboardError::NoteNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NoteboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failures_are_classified() {
        let status = NoteboardError::Status {
            method: Method::PUT,
            url: "http://localhost/notes/1".into(),
            status: 500,
        };
        assert!(status.is_request_failure());
        assert!(NoteboardError::Unavailable("down".into()).is_request_failure());
        assert!(!NoteboardError::Config("bad".into()).is_request_failure());
    }

    #[test]
    fn status_message_names_the_request() {
        let err = NoteboardError::Status {
            method: Method::DELETE,
            url: "http://localhost/notes/7".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Request failed: DELETE http://localhost/notes/7 returned 404"
        );
    }
}
