#[derive(Debug)]
pub enum Action {
    /// Start a new fetch attempt, superseding any in-flight one.
    Refresh,
    Quit,
}
