use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub poll: PollConfig,
}

#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the recording backend
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct PollConfig {
    /// Seconds between transcription polls
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// The backend address is a single explicit value here; the default is
    /// the local Flask service on port 5000.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("backend.base_url", "http://127.0.0.1:5000")?
            .set_default("poll.interval_secs", 10_i64)?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
