use crate::contact::SubmitStatus;
use tokio::sync::mpsc;

/// Events that flow back into the application loop from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The contact form request completed
    ContactFinished(SubmitStatus),
}

/// Channel from background work (the contact request) to the UI loop
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// A cloneable handle for tasks that report back
    pub fn sender(&self) -> EventSender {
        EventSender {
            inner: self.sender.clone(),
        }
    }

    /// Consumed by the UI loop, which owns the only receiver
    pub fn into_receiver(self) -> mpsc::UnboundedReceiver<AppEvent> {
        self.receiver
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct EventSender {
    inner: mpsc::UnboundedSender<AppEvent>,
}

impl EventSender {
    pub fn send(&self, event: AppEvent) -> Result<(), EventSendError> {
        self.inner
            .send(event)
            .map_err(|_| EventSendError::ChannelClosed)
    }

    /// Report how a contact submission ended
    pub fn send_contact_result(&self, status: SubmitStatus) -> Result<(), EventSendError> {
        self.send(AppEvent::ContactFinished(status))
    }
}

/// The UI loop has gone away
#[derive(Debug, thiserror::Error)]
pub enum EventSendError {
    #[error("event receiver dropped")]
    ChannelClosed,
}
