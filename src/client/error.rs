use thiserror::Error;

/// Failure modes for a single backend request.
///
/// All three are terminal for that one request only: the client does not
/// retry, and no error here is fatal to the process.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: backend unreachable, timeout, broken connection
    #[error("transport failure: {0}")]
    Transport(String),

    /// Backend answered with a non-success HTTP status
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// Response body did not decode as the expected JSON shape
    #[error("malformed response body: {0}")]
    Body(String),
}
