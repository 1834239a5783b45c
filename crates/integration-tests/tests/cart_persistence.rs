//! Integration tests for cart persistence.
//!
//! These tests drive the cart against a file store in a temporary directory
//! and check that what is on disk always matches the cart in memory.

use std::fs;

use ruja_core::CartItemId;
use ruja_integration_tests::{open_cart, product};
use ruja_storefront::notify::RecordingHost;

fn on_disk(dir: &std::path::Path) -> String {
    fs::read_to_string(dir.join("cart.json")).expect("cart file exists")
}

// =============================================================================
// Persist-on-mutation
// =============================================================================

#[test]
fn test_every_mutation_is_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = RecordingHost::new();
    let mut cart = open_cart(dir.path(), &host);

    let check = |cart: &ruja_integration_tests::FileCart<'_>| {
        let expected = serde_json::to_string(cart.items()).expect("serialize");
        assert_eq!(on_disk(dir.path()), expected);
    };

    cart.open_product(product("Café", "RD$350.00")).expect("open");
    let cafe = cart.add_current_product().expect("add").expect("viewed");
    check(&cart);

    cart.open_product(product("Ron", "RD$1,250.00")).expect("open");
    let ron = cart.add_current_product().expect("add").expect("viewed");
    check(&cart);

    cart.set_quantity(cafe, 3).expect("qty");
    check(&cart);

    cart.set_quantity(cafe, -10).expect("qty");
    check(&cart);

    cart.remove(CartItemId::new(1)).expect("remove unknown");
    check(&cart);

    cart.remove(ron).expect("remove");
    check(&cart);

    cart.remove(cafe).expect("remove");
    check(&cart);
    assert_eq!(on_disk(dir.path()), "[]");
}

#[test]
fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = RecordingHost::new();

    let expected = {
        let mut cart = open_cart(dir.path(), &host);
        for (title, price) in [("A", "RD$10.00"), ("B", "RD$20.00"), ("C", "RD$30.00")] {
            cart.open_product(product(title, price)).expect("open");
            cart.add_current_product().expect("add");
        }
        let second = cart.items().get(1).expect("second line").id;
        cart.set_quantity(second, 4).expect("qty");
        cart.items().to_vec()
    };

    let reloaded = open_cart(dir.path(), &host);
    assert_eq!(reloaded.items(), expected.as_slice());
    assert_eq!(
        reloaded
            .items()
            .iter()
            .map(|item| item.title.as_str())
            .collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
    assert_eq!(host.last_count(), Some(3));
}

#[test]
fn test_ids_unique_after_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = RecordingHost::new();

    let first = {
        let mut cart = open_cart(dir.path(), &host);
        cart.open_product(product("A", "RD$1.00")).expect("open");
        cart.add_current_product().expect("add").expect("viewed")
    };

    let mut cart = open_cart(dir.path(), &host);
    cart.open_product(product("A", "RD$1.00")).expect("open");
    let second = cart.add_current_product().expect("add").expect("viewed");

    assert!(second > first);
    assert_eq!(cart.item_count(), 2);
}

// =============================================================================
// Malformed data
// =============================================================================

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("cart.json"), "{ not json").expect("write");
    let host = RecordingHost::new();

    let mut cart = open_cart(dir.path(), &host);
    assert!(cart.is_empty());

    // The next mutation overwrites the corrupt data.
    cart.open_product(product("A", "RD$1.00")).expect("open");
    cart.add_current_product().expect("add");
    let stored: serde_json::Value = serde_json::from_str(&on_disk(dir.path())).expect("valid json");
    assert_eq!(stored.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_legacy_record_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("cart.json"),
        r#"[{"id":1712345678901,"image":"img/cafe.jpg","title":"Café","description":"Molido","price":"RD$350.00","quantity":2}]"#,
    )
    .expect("write");
    let host = RecordingHost::new();

    let cart = open_cart(dir.path(), &host);
    let item = cart.items().first().expect("one line");
    assert_eq!(item.id, CartItemId::new(1_712_345_678_901));
    assert_eq!(item.quantity.get(), 2);
    assert_eq!(cart.render().total, "RD$700.00");
}
