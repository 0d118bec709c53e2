//! Page-level error types.

use thiserror::Error;

/// Errors raised by page configuration and checkout operations.
///
/// Everything the page shows the visitor (load failures, capture failures)
/// is converted to a surface message at the boundary where it occurs; the
/// variants here are what remains for the host programmer.
#[derive(Error, Debug)]
pub enum PageError {
    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An order operation was invoked while no payment provider is
    /// configured.
    #[error("Payment widget is not configured")]
    PaymentNotConfigured,

    /// An order operation was invoked with no purchase pending.
    #[error("No purchase is pending")]
    NoPendingPurchase,

    /// The payment widget rejected an order operation.
    #[error("Payment widget error: {0}")]
    Payment(#[from] bridge_traits::BridgeError),
}

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, PageError>;
