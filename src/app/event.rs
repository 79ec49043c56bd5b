use crate::fetch::client::FetchError;
use crate::fetch::loader::{FetchHandle, MessageRow};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A fetch attempt finished. The handle identifies the attempt; the
    /// loader decides whether the result is still current.
    FetchFinished {
        handle: FetchHandle,
        result: Result<Vec<MessageRow>, FetchError>,
    },

    /// Tick for UI refresh
    Tick,
}
