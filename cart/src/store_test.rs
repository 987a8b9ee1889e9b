use super::*;
use crate::{CartLineItem, MemoryStore, ProductId};

fn two_item_cart() -> Cart {
    Cart::from(vec![CartLineItem::new(1, "Shoe", 500.0, 2), CartLineItem::new(2, "Shirt", 250.0, 1)])
}

/// Store whose writes always fail, for exercising error paths.
struct ReadOnlyStore(Option<String>);

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.clone())
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() })
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("no window".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no window".to_owned()))
    }
}

// =============================================================
// load / save
// =============================================================

#[test]
fn adapter_uses_cart_key_by_default() {
    let adapter = CartStoreAdapter::new(MemoryStore::new());
    assert_eq!(adapter.key(), "cart");
}

#[test]
fn load_of_absent_key_is_empty() {
    let adapter = CartStoreAdapter::new(MemoryStore::new());
    let cart = adapter.load();
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert!(cart.total().abs() < f64::EPSILON);
}

#[test]
fn load_reads_storefront_json() {
    let store = MemoryStore::with_item("cart", r#"[{"productId":1,"pname":"Shoe","price":500,"quantity":2}]"#);
    let cart = CartStoreAdapter::new(store).load();
    assert_eq!(cart.item_count(), 2);
    assert!((cart.total() - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn load_of_malformed_value_falls_back_to_empty() {
    let store = MemoryStore::with_item("cart", "{not json");
    let adapter = CartStoreAdapter::new(store);
    assert!(adapter.load().is_empty());
}

#[test]
fn try_load_of_malformed_value_reports_error() {
    let store = MemoryStore::with_item("cart", r#"{"productId":1}"#);
    let err = CartStoreAdapter::new(store).try_load().expect_err("object is not a cart");
    assert!(matches!(err, StoreError::Malformed(_)));
}

#[test]
fn load_of_unreadable_store_falls_back_to_empty() {
    let adapter = CartStoreAdapter::new(BrokenStore);
    assert!(adapter.load().is_empty());
    assert!(matches!(adapter.try_load(), Err(StoreError::Unavailable(_))));
}

#[test]
fn save_then_load_preserves_order_and_contents() {
    let adapter = CartStoreAdapter::new(MemoryStore::new());
    let cart = two_item_cart();
    adapter.save(&cart).expect("save");
    assert_eq!(adapter.load(), cart);
}

#[test]
fn save_writes_json_array_under_key() {
    let store = MemoryStore::new();
    let adapter = CartStoreAdapter::new(store.clone());
    adapter.save(&Cart::from(vec![CartLineItem::new(1, "Shoe", 500.0, 2)])).expect("save");

    let raw = store.get_item("cart").expect("read").expect("present");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value, serde_json::json!([{ "productId": 1, "pname": "Shoe", "price": 500.0, "quantity": 2 }]));
}

#[test]
fn save_surfaces_write_failure() {
    let adapter = CartStoreAdapter::new(ReadOnlyStore(None));
    let err = adapter.save(&two_item_cart()).expect_err("write should fail");
    assert!(matches!(err, StoreError::Write { .. }));
}

#[test]
fn custom_key_is_isolated_from_default_key() {
    let store = MemoryStore::new();
    let wishlist = CartStoreAdapter::with_key(store.clone(), "wishlist");
    wishlist.save(&two_item_cart()).expect("save");

    assert!(CartStoreAdapter::new(store).load().is_empty());
    assert_eq!(wishlist.load().len(), 2);
}

#[test]
fn remove_first_item_persists_only_second() {
    let store = MemoryStore::new();
    let adapter = CartStoreAdapter::new(store.clone());
    adapter.save(&two_item_cart()).expect("save");

    let updated = adapter.load().without(&ProductId::from(1));
    adapter.save(&updated).expect("save");

    let stored = CartStoreAdapter::new(store).load();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.items()[0].product_id, ProductId::from(2));
}

// =============================================================
// Concurrent writers
// =============================================================

#[test]
fn stale_writer_overwrites_newer_state_with_plain_save() {
    let store = MemoryStore::new();
    let seed = CartStoreAdapter::new(store.clone());
    seed.save(&Cart::from(vec![CartLineItem::new(1, "Shoe", 500.0, 1)])).expect("seed");

    let writer_a = CartStoreAdapter::new(store.clone());
    let writer_b = CartStoreAdapter::new(store.clone());
    let a_copy = writer_a.load();
    let b_copy = writer_b.load();

    writer_a.save(&a_copy.without(&ProductId::from(1))).expect("a saves");
    writer_b.save(&b_copy).expect("b saves stale copy");

    let stored = seed.load();
    assert_eq!(stored, b_copy);
    assert_eq!(stored.len(), 1);
}

#[test]
fn conditional_save_rejects_stale_writer() {
    let store = MemoryStore::new();
    let seed = CartStoreAdapter::new(store.clone());
    seed.save(&Cart::from(vec![CartLineItem::new(1, "Shoe", 500.0, 1)])).expect("seed");

    let writer_a = CartStoreAdapter::new(store.clone());
    let writer_b = CartStoreAdapter::new(store.clone());
    let a_snapshot = writer_a.load_snapshot();
    let b_snapshot = writer_b.load_snapshot();

    let removed = a_snapshot.cart.without(&ProductId::from(1));
    writer_a.save_if_unchanged(&a_snapshot, &removed).expect("a wins");

    let err = writer_b
        .save_if_unchanged(&b_snapshot, &b_snapshot.cart)
        .expect_err("b is stale");
    assert!(matches!(err, StoreError::Conflict(ref key) if key == "cart"));
    assert!(seed.load().is_empty());
}

#[test]
fn conditional_save_chains_from_returned_snapshot() {
    let adapter = CartStoreAdapter::new(MemoryStore::new());
    let first = adapter.load_snapshot();
    assert_eq!(first.raw, None);

    let second = adapter.save_if_unchanged(&first, &two_item_cart()).expect("first write");
    let third = adapter
        .save_if_unchanged(&second, &second.cart.without(&ProductId::from(2)))
        .expect("second write");

    assert_eq!(third.cart.len(), 1);
    assert_eq!(adapter.load(), third.cart);
}

#[test]
fn default_compare_and_set_detects_mismatch() {
    let store = ReadOnlyStore(Some("[]".to_owned()));
    let err = store.compare_and_set("cart", None, "[]").expect_err("mismatch");
    assert!(matches!(err, StoreError::Conflict(_)));
}

#[test]
fn snapshot_of_malformed_value_keeps_raw_for_conflict_detection() {
    let store = MemoryStore::with_item("cart", "garbage");
    let adapter = CartStoreAdapter::new(store.clone());
    let snapshot = adapter.load_snapshot();
    assert!(snapshot.cart.is_empty());
    assert_eq!(snapshot.raw.as_deref(), Some("garbage"));

    store.set_item("cart", "[]").expect("concurrent write");
    assert!(matches!(
        adapter.save_if_unchanged(&snapshot, &Cart::new()),
        Err(StoreError::Conflict(_))
    ));
}

#[test]
fn adapter_works_over_borrowed_store() {
    let store = MemoryStore::new();
    let adapter = CartStoreAdapter::new(&store);
    adapter.save(&two_item_cart()).expect("save");
    assert!(store.get_item("cart").expect("read").is_some());
}
