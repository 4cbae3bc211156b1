use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub(crate) enum Error {
    /// Transport failure: DNS, connect, or body read
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GET {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("photo {url} was saved before its content was fetched")]
    MissingContent { url: String },

    #[error("response from {url} has no content-type header")]
    MissingContentType { url: String },

    #[error("content-type '{value}' has no subtype")]
    MalformedContentType { value: String },

    #[error("photo {photo_id} references unknown album {album_id}")]
    UnknownAlbum { album_id: u64, photo_id: u64 },

    #[error("invalid value '{value}' for --{name}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("worker pool closed: {0}")]
    PoolClosed(#[from] tokio::sync::AcquireError),

    /// A worker task panicked or was cancelled before it finished
    #[error("worker task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}
