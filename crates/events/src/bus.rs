//! State-change publishing/subscription abstraction (mechanics only).
//!
//! Observers of a dispatcher never read its state directly; they subscribe to a
//! bus and receive a `StateChanged` message per accepted action.
//!
//! - **Broadcast**: every subscription gets a copy of every message
//! - **Ordered per publisher**: a single dispatcher publishes in submission order
//! - **No persistence**: a subscriber only sees messages published after it subscribed

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to a message stream.
///
/// ## Usage Pattern
///
/// ```ignore
/// let subscription = bus.subscribe();
/// dispatcher.dispatch(CartAction::ClearCart)?;
///
/// for change in subscription.drain() {
///     render(change.state());
/// }
/// ```
///
/// Subscriptions are meant for a single consumer; hand the messages on through a
/// channel if several threads need them.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Collect every message already delivered, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Transport-agnostic pub/sub bus.
///
/// `publish()` can fail (e.g. a poisoned lock); failures are surfaced to the
/// caller, typically a `Dispatcher`, which has already committed the new state.
///
/// The trait requires `Send + Sync` so a bus can sit behind a `SharedDispatcher`.
pub trait EventBus<M>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
