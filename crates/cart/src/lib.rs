//! Shopping cart domain module.
//!
//! The cart is a pure state machine: `apply(state, action)` builds the next
//! `CartState` without IO or mutation. Drive it directly, or hand `CartReducer`
//! to a `cartkit_events::Dispatcher` to publish every change.

pub mod cart;

#[cfg(test)]
mod properties;

pub use cart::{CartAction, CartReducer, CartState, LineItem, apply, initial_state, try_apply};
