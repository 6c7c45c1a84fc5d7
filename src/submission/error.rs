use thiserror::Error;

/// Local presence checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Please select an RSVP option")]
    NoStatusChosen,
}

/// The request could not be handed to the endpoint.
///
/// HTTP status codes are never errors: the endpoint is write-only and its
/// response is not read.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Submission worker is not running")]
    WorkerUnavailable,

    #[error("Submission task ended without sending")]
    Abandoned,
}

impl TransportError {
    /// Text for the error toast.
    pub fn user_message(&self) -> &'static str {
        "Connection error. Try again."
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(err) => err.to_string(),
            SubmitError::Transport(err) => err.user_message().to_string(),
        }
    }
}
