use serde::{Deserialize, Serialize};

use cartkit_catalog::CatalogEntry;
use cartkit_core::{DomainError, DomainResult, Entity, ItemId, Money, Reducer, find_index};
use cartkit_events::Action;

/// One catalog entry held in the cart, with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
    /// Always >= 1 inside a `CartState`.
    pub quantity: u32,
}

impl LineItem {
    /// New line for `entry` with quantity 1.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            unit_price: entry.unit_price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

impl Entity for LineItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Cart aggregate: ordered line items plus their derived total.
///
/// Fields are private so the only way to obtain a non-empty cart is through a
/// transition, which always recomputes `total` from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
    total: Money,
}

impl CartState {
    /// The empty cart: no items, zero total.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from `items`, computing the total.
    fn from_items(items: Vec<LineItem>) -> DomainResult<Self> {
        let total = items.iter().try_fold(Money::ZERO, |sum, item| {
            item.line_total()
                .and_then(|line| sum.checked_add(line))
                .ok_or_else(|| DomainError::invariant("cart total overflows"))
        })?;
        Ok(Self { items, total })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The state every cart session starts from.
pub fn initial_state() -> CartState {
    CartState::empty()
}

/// Cart transition request.
///
/// Serialized with a `type` tag and a `payload`, e.g.
/// `{"type": "REMOVE_ITEM", "payload": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of `entry`: bump an existing line or append a new one.
    AddItem(CatalogEntry),
    /// Drop the line with this id. Unknown ids are a no-op.
    RemoveItem(ItemId),
    /// Set a line's quantity. Unknown ids are a no-op; quantity must be >= 1.
    UpdateQuantity { id: ItemId, quantity: i64 },
    /// Reset to the empty cart.
    ClearCart,
}

impl Action for CartAction {
    fn action_type(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "cart.add_item",
            CartAction::RemoveItem(_) => "cart.remove_item",
            CartAction::UpdateQuantity { .. } => "cart.update_quantity",
            CartAction::ClearCart => "cart.clear",
        }
    }
}

/// Strict transition: the next cart, or the reason `action` is malformed.
///
/// Never edits `state`; every accepted action yields a freshly built `CartState`
/// whose total has been recomputed from its items.
pub fn try_apply(state: &CartState, action: &CartAction) -> DomainResult<CartState> {
    match action {
        CartAction::AddItem(entry) => add_item(state, entry),
        CartAction::RemoveItem(id) => remove_item(state, *id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, *id, *quantity),
        CartAction::ClearCart => Ok(CartState::empty()),
    }
}

/// Total transition: like `try_apply`, but a rejected action leaves the cart as it was.
pub fn apply(state: &CartState, action: &CartAction) -> CartState {
    try_apply(state, action).unwrap_or_else(|_| state.clone())
}

fn add_item(state: &CartState, entry: &CatalogEntry) -> DomainResult<CartState> {
    let items = match find_index(&state.items, &entry.id) {
        Some(index) => {
            let mut items = state.items.clone();
            let line = &mut items[index];
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or_else(|| DomainError::invariant("line quantity overflows"))?;
            items
        }
        None => {
            let mut items = Vec::with_capacity(state.items.len() + 1);
            items.extend(state.items.iter().cloned());
            items.push(LineItem::from_entry(entry));
            items
        }
    };
    CartState::from_items(items)
}

fn remove_item(state: &CartState, id: ItemId) -> DomainResult<CartState> {
    let items = state
        .items
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect();
    CartState::from_items(items)
}

fn update_quantity(state: &CartState, id: ItemId, quantity: i64) -> DomainResult<CartState> {
    let quantity = u32::try_from(quantity)
        .ok()
        .filter(|q| *q >= 1)
        .ok_or_else(|| DomainError::invalid_quantity(id, quantity))?;

    let items = state
        .items
        .iter()
        .map(|item| {
            if item.id == id {
                LineItem {
                    quantity,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect();
    CartState::from_items(items)
}

/// `Reducer` adapter so carts can be driven by a `Dispatcher`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Error = DomainError;

    fn initial_state(&self) -> CartState {
        initial_state()
    }

    fn reduce(&self, state: &CartState, action: &CartAction) -> DomainResult<CartState> {
        try_apply(state, action)
    }
}
