pub mod client;
pub mod config;
pub mod control;
pub mod render;
pub mod shell;

pub use client::{BackendClient, ClientError, HttpBackendClient, StatusResponse, TranscriptionSet};
pub use config::Config;
pub use control::{
    ConsoleListingView, ConsoleNotifier, ListingView, Notifier, PollerHandle, SessionController,
    SessionToggle, TranscriptionPoller,
};
pub use render::{render, Listing, Row};
