//! Generated-cart checks for the aggregates, removal and storage round trip.

use cart::{Cart, CartLineItem, CartStoreAdapter, MemoryStore, ProductId};
use proptest::prelude::*;

/// Small id space so generated carts regularly contain duplicate ids.
fn product_id() -> impl Strategy<Value = ProductId> {
    prop_oneof![(0i64..30).prop_map(ProductId::Number), "[a-z]{1,2}".prop_map(ProductId::Text),]
}

/// Quarter-unit prices are exact in binary and survive JSON text unchanged.
fn line_item() -> impl Strategy<Value = CartLineItem> {
    (
        product_id(),
        "[A-Za-z ]{0,12}",
        0u32..400_000,
        1u32..1000,
        proptest::option::of("[a-z]{1,6}"),
    )
        .prop_map(|(id, name, quarters, quantity, image)| {
            let item = CartLineItem::new(id, name, f64::from(quarters) / 4.0, quantity);
            match image {
                Some(stem) => item.with_image_url(format!("https://img.example/{stem}.png")),
                None => item,
            }
        })
}

fn cart_lines() -> impl Strategy<Value = Vec<CartLineItem>> {
    proptest::collection::vec(line_item(), 0..20)
}

proptest! {
    #[test]
    fn item_count_is_sum_of_quantities(lines in cart_lines()) {
        let expected: u32 = lines.iter().map(|item| item.quantity).sum();
        prop_assert_eq!(Cart::from(lines).item_count(), expected);
    }

    #[test]
    fn total_is_sum_of_price_times_quantity(lines in cart_lines()) {
        let expected: f64 = lines.iter().map(|item| item.unit_price * f64::from(item.quantity)).sum();
        prop_assert_eq!(Cart::from(lines).total(), expected);
    }

    #[test]
    fn without_never_grows_and_drops_only_matching_lines(lines in cart_lines(), id in product_id()) {
        let cart = Cart::from(lines.clone());
        let next = cart.without(&id);

        prop_assert!(next.len() <= cart.len());
        prop_assert!(next.get(&id).is_none());
        let kept: Vec<CartLineItem> = lines.into_iter().filter(|item| item.product_id != id).collect();
        prop_assert_eq!(next.items(), kept.as_slice());
    }

    #[test]
    fn without_absent_id_leaves_cart_unchanged(lines in cart_lines()) {
        let cart = Cart::from(lines);
        prop_assert_eq!(cart.without(&ProductId::from("not-in-cart")), cart);
    }

    #[test]
    fn save_then_load_returns_same_cart(lines in cart_lines()) {
        let adapter = CartStoreAdapter::new(MemoryStore::new());
        let cart = Cart::from(lines);
        adapter.save(&cart).map_err(|e| TestCaseError::fail(e.to_string()))?;

        let loaded = adapter.try_load().map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&loaded, &cart);
        prop_assert_eq!(adapter.load(), cart);
    }

    #[test]
    fn add_grows_count_by_quantity_and_len_by_at_most_one(lines in cart_lines(), item in line_item()) {
        let mut cart = Cart::from(lines);
        let (count, len, quantity) = (cart.item_count(), cart.len(), item.quantity);

        cart.add(item).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(cart.item_count(), count + quantity);
        prop_assert!(cart.len() == len || cart.len() == len + 1);
    }
}
