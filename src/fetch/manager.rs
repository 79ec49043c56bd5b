use crate::app::event::AppEvent;
use crate::fetch::client::RowSource;
use crate::fetch::loader::FetchHandle;
use tokio::sync::mpsc;

/// Spawns one retrieval task per attempt and posts the completion back to the
/// main loop. The handle travels with the result so the loader can reject
/// stale completions.
pub struct FetchManager<C> {
    client: C,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<C: RowSource + Clone> FetchManager<C> {
    pub fn new(client: C, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    pub fn spawn_fetch(&self, handle: FetchHandle) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tracing::debug!(?handle, "starting fetch attempt");
        tokio::spawn(async move {
            let result = client.fetch_rows().await;
            let _ = tx.send(AppEvent::FetchFinished { handle, result });
        });
    }
}
