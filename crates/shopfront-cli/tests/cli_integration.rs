//! End-to-end CLI tests against the built-in demo catalog (`--offline`).

use assert_cmd::Command;
use predicates::prelude::*;

fn shopfront() -> Command {
    Command::cargo_bin("shopfront").unwrap()
}

#[test]
fn test_browse_lists_whole_demo_catalog() {
    shopfront()
        .args(["--offline", "browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 Products Found"))
        .stdout(predicate::str::contains("Showing 6 of 6 total products"))
        .stdout(predicate::str::contains("Classic Denim Jacket"))
        .stdout(predicate::str::contains("USB-C Desk Hub"));
}

#[test]
fn test_browse_filters_by_category() {
    shopfront()
        .args(["--offline", "browse", "--category", "clothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 Products Found"))
        .stdout(predicate::str::contains("in clothing"))
        .stdout(predicate::str::contains("Graphic Tee"))
        .stdout(predicate::str::contains("Wireless Earbuds").not());
}

#[test]
fn test_browse_search_matches_description() {
    // "carafe" appears only in the pour-over set's description
    shopfront()
        .args(["--offline", "browse", "--search", "carafe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Product Found"))
        .stdout(predicate::str::contains("Ceramic Pour-Over Set"));
}

#[test]
fn test_browse_sorts_by_price_ascending() {
    shopfront()
        .args(["--offline", "browse", "--sort", "price-low"])
        .assert()
        .success()
        // Cheapest first, dearest last
        .stdout(predicate::str::is_match(r"(?s)Linen Throw Pillow.*Wireless Earbuds").unwrap());
}

#[test]
fn test_browse_empty_state_is_not_an_error() {
    shopfront()
        .args(["--offline", "browse", "--search", "zzz-no-such-product"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 Products Found"))
        .stdout(predicate::str::contains("No products found"))
        .stdout(predicate::str::contains("filters"));
}

#[test]
fn test_browse_rejects_unknown_sort_key() {
    shopfront()
        .args(["--offline", "browse", "--sort", "cheapest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn test_show_renders_product_card() {
    shopfront()
        .args(["--offline", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ceramic Pour-Over Set"))
        .stdout(predicate::str::contains("$34.50"))
        .stdout(predicate::str::contains("Quantity: 1"));
}

#[test]
fn test_show_unknown_id_reports_not_found_without_retry_hint() {
    shopfront()
        .args(["--offline", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product 99 not found"))
        .stderr(predicate::str::contains("retry").not());
}

#[test]
fn test_show_ignores_non_positive_quantity() {
    shopfront()
        .args(["--offline", "show", "3", "--quantity", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity: 1"));

    shopfront()
        .args(["--offline", "show", "3", "--quantity", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity: 4"));
}

#[test]
fn test_show_add_to_cart_acknowledges() {
    shopfront()
        .args(["--offline", "show", "1", "--add-to-cart", "--wishlist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added to cart"))
        .stdout(predicate::str::contains("On your wishlist"));
}

#[test]
fn test_categories_lists_source_owned_labels() {
    shopfront()
        .args(["--offline", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clothing"))
        // Present in the category list even with zero demo products
        .stdout(predicate::str::contains("outdoors"));
}
