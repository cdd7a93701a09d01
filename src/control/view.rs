use crate::render::Listing;

/// User-facing notification seam.
///
/// Control outcomes (status text, failure messages) go through this trait so
/// the controller can be tested without a terminal.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Writes notifications straight to the terminal
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Sink for the rendered transcription listing.
///
/// Every poll replaces the whole listing; when polls overlap, completions
/// land in arrival order (last writer wins on the view).
pub trait ListingView: Send + Sync {
    fn replace(&self, listing: Listing);
}

/// Prints the full listing to the terminal on every refresh
pub struct ConsoleListingView;

impl ListingView for ConsoleListingView {
    fn replace(&self, listing: Listing) {
        println!("--- transcriptions ---");
        println!("{}", listing.to_text());
    }
}
