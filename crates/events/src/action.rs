/// A transition request accepted by a `Dispatcher`.
///
/// Actions are:
/// - **intent**, not fact: a reducer may still reject them
/// - **self-contained**: everything the transition needs travels in the payload
/// - **named**: `action_type` is a stable identifier used in logs and notifications
pub trait Action: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable action name (e.g. "cart.add_item").
    fn action_type(&self) -> &'static str;
}
