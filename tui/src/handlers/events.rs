use folio_core::AppEvent;
use tracing::{debug, info};
use crate::state::AppState;

/// Handles application events from background tasks
pub struct EventHandler;

impl EventHandler {
    /// Handle application events
    pub async fn handle_event(state: &mut AppState, event: AppEvent) {
        debug!("Handling app event: {:?}", event);
        match event {
            AppEvent::ContactFinished(status) => {
                info!("Contact submission finished: {:?}", status);
                state.contact.finish(status);
            }
        }
    }
}
