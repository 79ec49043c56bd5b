//! Pure render derivation.
//!
//! What the content area shows is a function of the current fetch outcome
//! alone; the widgets in `message_panel` only translate the derived view
//! into ratatui primitives.

use crate::fetch::loader::{FetchOutcome, MessageRow};

#[derive(Debug, PartialEq, Eq)]
pub enum ContentView<'a> {
    Loading,
    Error(&'a str),
    /// Loaded, zero rows.
    Empty,
    /// Loaded, exactly one row: shown as a prominent heading.
    Heading(&'a str),
    /// Loaded, two or more rows: one entry per row, in returned order.
    List(&'a [MessageRow]),
}

impl<'a> ContentView<'a> {
    pub fn derive(outcome: &'a FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Idle | FetchOutcome::Loading => ContentView::Loading,
            FetchOutcome::Failed(description) => ContentView::Error(description),
            FetchOutcome::Loaded(rows) => match rows.as_slice() {
                [] => ContentView::Empty,
                [row] => ContentView::Heading(&row.text),
                rows => ContentView::List(rows),
            },
        }
    }
}
