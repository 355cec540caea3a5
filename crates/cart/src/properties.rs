//! Property tests: invariants hold for every cart reachable by any action sequence.

use proptest::prelude::*;

use cartkit_catalog::CatalogEntry;
use cartkit_core::{ItemId, Money, ids_unique};

use crate::cart::{CartAction, CartState, apply, initial_state, try_apply};

fn arb_entry() -> impl Strategy<Value = CatalogEntry> {
    (1u64..6, 0u64..10_000).prop_map(|(id, cents)| {
        CatalogEntry::new(id, format!("item-{id}"), Money::from_cents(cents))
    })
}

fn arb_action() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        4 => arb_entry().prop_map(CartAction::AddItem),
        2 => (1u64..8).prop_map(|id| CartAction::RemoveItem(ItemId::new(id))),
        2 => (1u64..8, -3i64..20).prop_map(|(id, quantity)| CartAction::UpdateQuantity {
            id: ItemId::new(id),
            quantity,
        }),
        1 => Just(CartAction::ClearCart),
    ]
}

fn arb_cart() -> impl Strategy<Value = CartState> {
    prop::collection::vec(arb_action(), 0..40).prop_map(|actions| {
        actions
            .iter()
            .fold(initial_state(), |state, action| apply(&state, action))
    })
}

fn expected_total(state: &CartState) -> u128 {
    state
        .items()
        .iter()
        .map(|item| u128::from(item.unit_price.cents()) * u128::from(item.quantity))
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Total always equals the sum of line totals.
    #[test]
    fn total_matches_line_items(state in arb_cart()) {
        prop_assert_eq!(u128::from(state.total().cents()), expected_total(&state));
    }

    /// No two lines share an id, and no line has quantity zero.
    #[test]
    fn ids_unique_and_quantities_positive(state in arb_cart()) {
        prop_assert!(ids_unique(state.items()));
        prop_assert!(state.items().iter().all(|item| item.quantity >= 1));
    }

    /// Clearing twice is the same as clearing once, and both give the empty cart.
    #[test]
    fn clear_is_idempotent(state in arb_cart()) {
        let once = apply(&state, &CartAction::ClearCart);
        let twice = apply(&once, &CartAction::ClearCart);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, initial_state());
    }

    /// Adding the same entry twice to an empty cart yields one line with quantity 2.
    #[test]
    fn add_twice_accumulates(entry in arb_entry()) {
        let once = apply(&initial_state(), &CartAction::AddItem(entry.clone()));
        let twice = apply(&once, &CartAction::AddItem(entry.clone()));

        prop_assert_eq!(twice.items().len(), 1);
        prop_assert_eq!(twice.items()[0].quantity, 2);
        prop_assert_eq!(twice.total().cents(), 2 * entry.unit_price.cents());
    }

    /// Removing an id that is not in the cart returns an equal cart.
    #[test]
    fn remove_unknown_is_no_op(state in arb_cart(), id in 100u64..200) {
        let after = apply(&state, &CartAction::RemoveItem(ItemId::new(id)));
        prop_assert_eq!(after, state);
    }

    /// A rejected action never alters the cart it was applied to.
    #[test]
    fn rejection_leaves_state_unchanged(state in arb_cart(), action in arb_action()) {
        if try_apply(&state, &action).is_err() {
            prop_assert_eq!(apply(&state, &action), state);
        }
    }

    /// New ids are appended; existing lines keep their relative order.
    #[test]
    fn add_preserves_order(state in arb_cart(), entry in arb_entry()) {
        let before: Vec<ItemId> = state.items().iter().map(|i| i.id).collect();
        let after = apply(&state, &CartAction::AddItem(entry.clone()));
        let after_ids: Vec<ItemId> = after.items().iter().map(|i| i.id).collect();

        if state.contains(entry.id) {
            prop_assert_eq!(after_ids, before);
        } else {
            prop_assert_eq!(&after_ids[..before.len()], &before[..]);
            prop_assert_eq!(after_ids.last().copied(), Some(entry.id));
        }
    }
}
