use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Fetch failed for {path}: status {status}")]
    FetchFailed { path: String, status: u16 },

    #[error("Media playback could not start: {0}")]
    PlaybackStart(String),

    #[error("Payment widget error: {0}")]
    Payment(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
