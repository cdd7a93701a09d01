use serde::Deserialize;
use std::collections::BTreeMap;

/// Body of the POST /start and POST /stop control responses
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Snapshot of accumulated transcriptions returned by GET /transcribe
///
/// The backend keys each transcript by its chunk filename. No ordering is
/// guaranteed on the wire; a BTreeMap keeps display order deterministic
/// (sorted by filename). The snapshot is replaced wholesale on every poll.
pub type TranscriptionSet = BTreeMap<String, String>;
