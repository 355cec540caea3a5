//! Reducer trait: pure state transitions for in-memory aggregates.

/// Pure transition function over an immutable state value.
///
/// - **Decision and evolution in one step**: `reduce(&state, action)` returns the
///   next state as a wholly new value.
/// - **No mutation**: the input state is borrowed immutably and must be left as it
///   was, so callers can keep or discard it freely.
///
/// Reducers must not perform IO, read the clock, or draw randomness. Anything an
/// action needs (ids, names, prices) travels in its payload.
pub trait Reducer {
    /// State value owned by whoever drives the reducer.
    type State: Clone + PartialEq + core::fmt::Debug;
    /// Transition request.
    type Action: Clone + core::fmt::Debug;
    /// Rejection reason for malformed actions.
    type Error: core::fmt::Debug;

    /// State every session starts from.
    fn initial_state(&self) -> Self::State;

    /// Compute the next state from `state` and `action`.
    ///
    /// An `Err` means the action was rejected and `state` remains current.
    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, Self::Error>;
}
