//! Session control: the start/stop toggle, user notifications, and the
//! scheduled transcription poll

mod controller;
mod poller;
mod view;

pub use controller::{SessionController, SessionToggle};
pub use poller::{PollerHandle, TranscriptionPoller};
pub use view::{ConsoleListingView, ConsoleNotifier, ListingView, Notifier};
