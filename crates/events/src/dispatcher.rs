//! Action dispatch pipeline (the boundary between callers and a reducer).
//!
//! ```text
//! Action
//!   ↓
//! 1. Reduce (pure: current state + action → next state, or rejection)
//!   ↓
//! 2. Commit (next state replaces current state, sequence += 1)
//!   ↓
//! 3. Publish (StateChanged to every subscription on the bus)
//!   ↓
//! return &next state
//! ```
//!
//! Everything happens synchronously inside `dispatch`: observers have been sent
//! the new state before the caller gets control back. There is no queue and no
//! batching; ordering is exactly the order of `dispatch` calls.
//!
//! A `Dispatcher` takes `&mut self`, so the borrow checker already guarantees a
//! single writer. Use `SharedDispatcher` to hand one out to several threads.

use thiserror::Error;

use cartkit_core::Reducer;

use crate::bus::{EventBus, Subscription};
use crate::notification::StateChanged;
use crate::Action;

/// Action type recorded when a dispatcher is reset to the reducer's initial state.
pub const RESET_ACTION_TYPE: &str = "dispatcher.reset";

#[derive(Debug, Error)]
pub enum DispatchError<E> {
    /// The reducer rejected the action; state is unchanged and nothing was published.
    #[error("action rejected: {0:?}")]
    Rejected(E),
    /// Publication failed after the new state was committed.
    #[error("publish failed: {0}")]
    Publish(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A `SharedDispatcher` lock was poisoned by a panicking holder.
    #[error("dispatcher lock poisoned")]
    Poisoned,
}

/// Owns one state value and advances it through a reducer.
///
/// ## Execution Guarantees
///
/// - **Atomic transition**: a rejected action leaves state and sequence untouched
/// - **Replacement, not mutation**: the reducer builds the next state; the old one is dropped
/// - **Publish before return**: subscribers are sent the state before `dispatch` returns
///
/// If publishing fails, the state is already committed; the caller receives
/// `DispatchError::Publish` and may read `state()` to recover.
#[derive(Debug)]
pub struct Dispatcher<R, B>
where
    R: Reducer,
{
    reducer: R,
    state: R::State,
    bus: B,
    sequence: u64,
}

impl<R, B> Dispatcher<R, B>
where
    R: Reducer,
{
    /// Start from the reducer's initial state.
    pub fn new(reducer: R, bus: B) -> Self {
        let state = reducer.initial_state();
        Self::with_state(reducer, state, bus)
    }

    /// Start from an explicit state (e.g. seeded fixtures).
    pub fn with_state(reducer: R, state: R::State, bus: B) -> Self {
        Self {
            reducer,
            state,
            bus,
            sequence: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of accepted actions (and resets) so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Give back the reducer, the final state and the bus.
    pub fn into_parts(self) -> (R, R::State, B) {
        (self.reducer, self.state, self.bus)
    }
}

impl<R, B> Dispatcher<R, B>
where
    R: Reducer,
    R::Action: Action,
    B: EventBus<StateChanged<R::State>>,
{
    pub fn subscribe(&self) -> Subscription<StateChanged<R::State>> {
        self.bus.subscribe()
    }

    /// Apply `action` and publish the resulting state.
    pub fn dispatch(&mut self, action: R::Action) -> Result<&R::State, DispatchError<R::Error>> {
        let action_type = action.action_type();

        let next = match self.reducer.reduce(&self.state, &action) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(action_type, error = ?err, "action rejected");
                return Err(DispatchError::Rejected(err));
            }
        };

        let changed = next != self.state;
        self.commit(next, action_type)?;

        tracing::debug!(action_type, sequence = self.sequence, changed, "action applied");
        Ok(&self.state)
    }

    /// Replace the state with the reducer's initial state.
    ///
    /// Published like any other change, with action type `dispatcher.reset`.
    pub fn reset(&mut self) -> Result<&R::State, DispatchError<R::Error>> {
        let initial = self.reducer.initial_state();
        self.commit(initial, RESET_ACTION_TYPE)?;

        tracing::debug!(sequence = self.sequence, "dispatcher reset");
        Ok(&self.state)
    }

    fn commit(
        &mut self,
        next: R::State,
        action_type: &'static str,
    ) -> Result<(), DispatchError<R::Error>> {
        self.state = next;
        self.sequence += 1;

        let message = StateChanged::new(self.sequence, action_type, self.state.clone());
        self.bus.publish(message).map_err(|e| {
            tracing::error!(action_type, sequence = self.sequence, error = ?e, "publish failed");
            DispatchError::Publish(Box::new(e))
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    use std::sync::mpsc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Tick {
        Add(u32),
        Fail,
        /// Makes the reducer panic mid-dispatch.
        Panic,
    }

    impl Action for Tick {
        fn action_type(&self) -> &'static str {
            match self {
                Tick::Add(_) => "test.add",
                Tick::Fail => "test.fail",
                Tick::Panic => "test.panic",
            }
        }
    }

    #[derive(Debug)]
    pub struct Adder;

    impl Reducer for Adder {
        type State = u32;
        type Action = Tick;
        type Error = &'static str;

        fn initial_state(&self) -> u32 {
            0
        }

        fn reduce(&self, state: &u32, action: &Tick) -> Result<u32, Self::Error> {
            match action {
                Tick::Add(n) => Ok(state + n),
                Tick::Fail => Err("refused"),
                Tick::Panic => panic!("reducer blew up"),
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("bus closed")]
    pub struct BusClosed;

    /// Bus that refuses every message.
    #[derive(Debug, Default)]
    pub struct ClosedBus;

    impl<M> EventBus<M> for ClosedBus {
        type Error = BusClosed;

        fn publish(&self, _message: M) -> Result<(), BusClosed> {
            Err(BusClosed)
        }

        fn subscribe(&self) -> Subscription<M> {
            let (_tx, rx) = mpsc::channel();
            Subscription::new(rx)
        }
    }
}
