//! HTTP protocol client for the local recording backend
//!
//! The backend exposes three endpoints:
//! - POST /start - begin a recording session
//! - POST /stop - end the recording session
//! - GET /transcribe - snapshot of accumulated transcriptions

mod backend;
mod error;
mod messages;

pub use backend::{BackendClient, HttpBackendClient};
pub use error::ClientError;
pub use messages::{StatusResponse, TranscriptionSet};
