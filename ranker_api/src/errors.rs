//! Error types for the scoring service client.

/// Errors that can occur when talking to the scoring service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unparseable response).
    #[error("Request failed")]
    RequestFailed,
    /// The service returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
