//! Interactive cart session: commands in, rendered cart out.

use std::fmt::Write as _;

use cartkit_cart::{CartAction, CartReducer, CartState};
use cartkit_catalog::Catalog;
use cartkit_events::{Dispatcher, EventBus, StateChanged, Subscription};

use crate::command::{Command, HELP};
use crate::error::DemoError;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and read the next command.
    Print(String),
    Quit,
}

/// A catalog plus a cart dispatcher.
#[derive(Debug)]
pub struct Session<B>
where
    B: EventBus<StateChanged<CartState>>,
{
    catalog: Catalog,
    dispatcher: Dispatcher<CartReducer, B>,
}

impl<B> Session<B>
where
    B: EventBus<StateChanged<CartState>>,
{
    pub fn new(catalog: Catalog, bus: B) -> Self {
        Self {
            catalog,
            dispatcher: Dispatcher::new(CartReducer, bus),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        self.dispatcher.state()
    }

    pub fn subscribe(&self) -> Subscription<StateChanged<CartState>> {
        self.dispatcher.subscribe()
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, DemoError> {
        let action = match command {
            Command::Catalog => return Ok(Outcome::Print(render_catalog(&self.catalog))),
            Command::Show => return Ok(Outcome::Print(render_cart(self.cart()))),
            Command::Help => return Ok(Outcome::Print(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Add(id) => {
                let entry = self.catalog.get(id).ok_or(DemoError::UnknownItem(id))?;
                CartAction::AddItem(entry.clone())
            }
            Command::Remove(id) => CartAction::RemoveItem(id),
            Command::Quantity(id, quantity) => CartAction::UpdateQuantity { id, quantity },
            Command::Clear => CartAction::ClearCart,
        };

        let cart = self.dispatcher.dispatch(action)?;
        Ok(Outcome::Print(render_cart(cart)))
    }

    /// End the session, keeping only the final cart.
    pub fn finish(self) -> CartState {
        let (_, cart, _) = self.dispatcher.into_parts();
        cart
    }
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::from("catalog:");
    for entry in catalog.iter() {
        let _ = write!(out, "\n  [{}] {} {}", entry.id, entry.name, entry.unit_price);
    }
    out
}

pub fn render_cart(cart: &CartState) -> String {
    if cart.is_empty() {
        return "cart is empty".to_string();
    }

    let mut out = String::from("cart:");
    for item in cart.items() {
        let line_total = item
            .line_total()
            .map_or_else(|| "overflow".to_string(), |m| m.to_string());
        let _ = write!(
            out,
            "\n  [{}] {} - {} x {} = {}",
            item.id, item.name, item.unit_price, item.quantity, line_total
        );
    }
    let _ = write!(out, "\ntotal: {} ({} items)", cart.total(), cart.item_count());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartkit_core::{DomainError, ItemId};
    use cartkit_events::InMemoryEventBus;

    fn session() -> Session<InMemoryEventBus<StateChanged<CartState>>> {
        Session::new(Catalog::sample(), InMemoryEventBus::new())
    }

    fn printed(outcome: Outcome) -> String {
        match outcome {
            Outcome::Print(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn add_renders_cart_with_totals() {
        let mut s = session();
        s.execute(Command::Add(ItemId::new(1))).unwrap();
        let text = printed(s.execute(Command::Add(ItemId::new(1))).unwrap());

        assert_eq!(
            text,
            "cart:\n  [1] React Book - $29.99 x 2 = $59.98\ntotal: $59.98 (2 items)"
        );
    }

    #[test]
    fn unknown_catalog_id_is_reported() {
        let mut s = session();
        let err = s.execute(Command::Add(ItemId::new(9))).unwrap_err();
        assert!(matches!(err, DemoError::UnknownItem(id) if id == ItemId::new(9)));
        assert!(s.cart().is_empty());
    }

    #[test]
    fn invalid_quantity_surfaces_as_domain_error() {
        let mut s = session();
        s.execute(Command::Add(ItemId::new(2))).unwrap();

        let err = s.execute(Command::Quantity(ItemId::new(2), 0)).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Domain(DomainError::InvalidQuantity { quantity: 0, .. })
        ));
        assert_eq!(s.cart().item_count(), 1);
    }

    #[test]
    fn read_only_commands_do_not_dispatch() {
        let mut s = session();
        let sub = s.subscribe();

        s.execute(Command::Show).unwrap();
        s.execute(Command::Catalog).unwrap();
        s.execute(Command::Help).unwrap();
        assert_eq!(s.execute(Command::Quit).unwrap(), Outcome::Quit);

        assert!(sub.drain().is_empty());
    }

    #[test]
    fn finish_returns_the_final_cart() {
        let mut s = session();
        s.execute(Command::Add(ItemId::new(3))).unwrap();
        s.execute(Command::Quantity(ItemId::new(3), 2)).unwrap();

        let cart = s.finish();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), cartkit_core::Money::from_cents(9998));
    }

    #[test]
    fn catalog_lists_prices() {
        let text = render_catalog(&Catalog::sample());
        assert!(text.contains("[3] Web Dev Course $49.99"));
    }

    #[test]
    fn empty_cart_message() {
        assert_eq!(render_cart(&CartState::empty()), "cart is empty");
    }
}
