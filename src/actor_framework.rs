use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. REQUEST / RESPONSE
// =============================================================================

/// One-shot reply channel carried inside every request message.
pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Sends a request built around a fresh reply channel and waits for the reply.
pub async fn request<M, T>(
    sender: &mpsc::Sender<M>,
    build: impl FnOnce(Response<T>) -> M,
) -> Result<T, FrameworkError> {
    let (respond_to, response) = oneshot::channel();
    sender
        .send(build(respond_to))
        .await
        .map_err(|_| FrameworkError::ActorClosed)?;
    response.await.map_err(|_| FrameworkError::ActorDropped)
}

// =============================================================================
// 2. LISTENERS
// =============================================================================

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The receiving end of a listener registration.
///
/// The subscriber owns this value outright. The emitting side only keeps the
/// sender half, so dropping a `Subscription` is enough to stop delivery.
#[derive(Debug)]
pub struct Subscription<E> {
    id: ListenerId,
    receiver: mpsc::UnboundedReceiver<E>,
}

impl<E> Subscription<E> {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Waits for the next event. Returns `None` once the emitter is gone.
    pub async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// Returns an already-delivered event without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }
}

/// Registry of listeners that each receive a copy of every emitted event.
#[derive(Debug)]
pub struct Listeners<E> {
    next_id: u64,
    senders: Vec<(ListenerId, mpsc::UnboundedSender<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 1,
            senders: Vec::new(),
        }
    }
}

impl<E: Clone> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription<E> {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let (sender, receiver) = mpsc::unbounded_channel();
        self.senders.push((id, sender));
        Subscription { id, receiver }
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.senders.len();
        self.senders.retain(|(listener, _)| *listener != id);
        self.senders.len() != before
    }

    /// Delivers `event` to every live listener and forgets the ones whose
    /// subscription was dropped. Returns the number of deliveries.
    pub fn emit(&mut self, event: &E) -> usize {
        self.senders.retain(|(_, sender)| sender.send(event.clone()).is_ok());
        self.senders.len()
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
