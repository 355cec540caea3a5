//! Mutex-guarded dispatcher for callers on several threads.

use std::sync::{Mutex, MutexGuard};

use cartkit_core::Reducer;

use crate::bus::{EventBus, Subscription};
use crate::dispatcher::{DispatchError, Dispatcher};
use crate::notification::StateChanged;
use crate::Action;

/// A `Dispatcher` behind a single sequence point.
///
/// The lock is held across reduce, commit and publish, so every action is
/// applied to completion (and its notification sent) before the next one is
/// read. Subscribers therefore see strictly increasing sequence numbers no
/// matter how many threads dispatch.
#[derive(Debug)]
pub struct SharedDispatcher<R, B>
where
    R: Reducer,
{
    inner: Mutex<Dispatcher<R, B>>,
}

impl<R, B> SharedDispatcher<R, B>
where
    R: Reducer,
{
    pub fn new(dispatcher: Dispatcher<R, B>) -> Self {
        Self {
            inner: Mutex::new(dispatcher),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Dispatcher<R, B>>, DispatchError<R::Error>> {
        self.inner.lock().map_err(|_| DispatchError::Poisoned)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Result<R::State, DispatchError<R::Error>> {
        Ok(self.lock()?.state().clone())
    }

    pub fn sequence(&self) -> Result<u64, DispatchError<R::Error>> {
        Ok(self.lock()?.sequence())
    }
}

impl<R, B> SharedDispatcher<R, B>
where
    R: Reducer,
    R::Action: Action,
    B: EventBus<StateChanged<R::State>>,
{
    pub fn subscribe(
        &self,
    ) -> Result<Subscription<StateChanged<R::State>>, DispatchError<R::Error>> {
        Ok(self.lock()?.subscribe())
    }

    /// Apply `action` atomically and return a copy of the resulting state.
    pub fn dispatch(&self, action: R::Action) -> Result<R::State, DispatchError<R::Error>> {
        let mut guard = self.lock()?;
        guard.dispatch(action).cloned()
    }

    pub fn reset(&self) -> Result<R::State, DispatchError<R::Error>> {
        let mut guard = self.lock()?;
        guard.reset().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::test_support::{Adder, Tick};
    use crate::InMemoryEventBus;

    #[test]
    fn concurrent_dispatch_serializes_through_one_sequence() {
        let shared = SharedDispatcher::new(Dispatcher::new(Adder, InMemoryEventBus::new()));
        let sub = shared.subscribe().unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        shared.dispatch(Tick::Add(1)).unwrap();
                    }
                });
            }
        });

        assert_eq!(shared.state().unwrap(), 200);
        assert_eq!(shared.sequence().unwrap(), 200);

        let messages = sub.drain();
        assert_eq!(messages.len(), 200);
        for (i, msg) in messages.iter().enumerate() {
            let expected = i as u64 + 1;
            assert_eq!(msg.sequence_number(), expected);
            assert_eq!(u64::from(*msg.state()), expected);
        }
    }

    #[test]
    fn rejection_is_returned_to_the_calling_thread() {
        let shared = SharedDispatcher::new(Dispatcher::new(Adder, InMemoryEventBus::new()));
        shared.dispatch(Tick::Add(3)).unwrap();

        assert!(matches!(
            shared.dispatch(Tick::Fail),
            Err(DispatchError::Rejected("refused"))
        ));
        assert_eq!(shared.state().unwrap(), 3);
    }

    #[test]
    fn panicking_reducer_poisons_the_dispatcher() {
        let shared = SharedDispatcher::new(Dispatcher::new(Adder, InMemoryEventBus::new()));
        shared.dispatch(Tick::Add(1)).unwrap();

        std::thread::scope(|scope| {
            let worker = scope.spawn(|| shared.dispatch(Tick::Panic));
            assert!(worker.join().is_err());
        });

        assert!(matches!(shared.dispatch(Tick::Add(1)), Err(DispatchError::Poisoned)));
        assert!(matches!(shared.state(), Err(DispatchError::Poisoned)));
        assert!(matches!(shared.reset(), Err(DispatchError::Poisoned)));
    }
}
