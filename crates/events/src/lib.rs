//! Action dispatch and state-change notification.
//!
//! A `Dispatcher` feeds actions to a pure `Reducer` and publishes every new
//! state on an `EventBus`; observers hold a `Subscription`.

pub mod action;
pub mod bus;
pub mod dispatcher;
pub mod in_memory_bus;
pub mod notification;
pub mod shared;

pub use action::Action;
pub use bus::{EventBus, Subscription};
pub use dispatcher::{DispatchError, Dispatcher, RESET_ACTION_TYPE};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use notification::StateChanged;
pub use shared::SharedDispatcher;
