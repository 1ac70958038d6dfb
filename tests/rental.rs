//! Rental Catalog Integration Tests
//!
//! Tests for the checkout/return state machine and the
//! availability/checked-out invariant.

use mediashelf::{Action, Catalog, Genre, Item, ItemState, ShelfError};

fn assert_consistent(catalog: &Catalog) {
    assert!(catalog.check_invariants(), "invariant broken:\n{}", catalog);

    let rented = catalog.list_checked_out();
    for (_, item) in catalog.iter() {
        let in_view = rented.iter().any(|r| std::ptr::eq(*r, item));
        assert_eq!(item.is_available(), !in_view, "item: {}", item);
    }
}

#[test]
fn test_parasite_scenario() {
    let mut catalog = Catalog::new();
    let parasite = catalog.add(Item::new("Parasite", 2019, &[Genre::Thriller, Genre::Drama]));
    assert_consistent(&catalog);

    // First checkout succeeds
    assert!(catalog.checkout(parasite).is_ok());
    assert_consistent(&catalog);

    // Second checkout fails without touching state
    match catalog.checkout(parasite) {
        Err(ShelfError::InvalidTransition {
            title,
            state,
            action,
        }) => {
            assert_eq!(title, "Parasite");
            assert_eq!(state, ItemState::CheckedOut);
            assert_eq!(action, Action::Checkout);
        }
        other => panic!("Expected InvalidTransition, got {:?}", other),
    }
    assert_eq!(catalog.list_checked_out().len(), 1);
    assert_consistent(&catalog);

    // Return restores availability
    assert!(catalog.return_item(parasite).is_ok());
    assert!(catalog.get(parasite).unwrap().is_available());
    assert_consistent(&catalog);

    // And it can be rented again
    assert!(catalog.checkout(parasite).is_ok());
    assert_consistent(&catalog);
}

#[test]
fn test_double_checkout_yields_one_success() {
    let mut catalog = mediashelf::samples::catalog();
    let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();

    for id in ids {
        let first = catalog.checkout(id).is_ok();
        let second = catalog.checkout(id).is_ok();
        assert_eq!((first, second), (true, false));
        assert_consistent(&catalog);
    }

    assert_eq!(catalog.list_checked_out().len(), catalog.len());
}

#[test]
fn test_return_without_checkout_does_not_mutate() {
    let mut catalog = mediashelf::samples::catalog();
    let inception = catalog.find_by_title("Inception").unwrap();
    let before = catalog.list_all().to_vec();

    let err = catalog.return_item(inception).unwrap_err();
    assert!(matches!(
        err,
        ShelfError::InvalidTransition {
            action: Action::Return,
            ..
        }
    ));
    assert_eq!(catalog.list_all(), before.as_slice());
    assert!(catalog.list_checked_out().is_empty());
    assert_consistent(&catalog);
}

#[test]
fn test_duplicate_copies_are_independent() {
    let mut catalog = mediashelf::samples::catalog();
    let copies: Vec<_> = catalog
        .iter()
        .filter(|(_, item)| item.title() == "The Matrix")
        .map(|(id, _)| id)
        .collect();
    assert_eq!(copies.len(), 3);

    catalog.checkout(copies[1]).unwrap();

    assert!(catalog.get(copies[0]).unwrap().is_available());
    assert!(!catalog.get(copies[1]).unwrap().is_available());
    assert!(catalog.get(copies[2]).unwrap().is_available());
    assert_eq!(catalog.find_checked_out("The Matrix"), Some(copies[1]));
    assert_consistent(&catalog);
}

#[test]
fn test_interleaved_operations_keep_invariant() {
    let mut catalog = mediashelf::samples::catalog();
    let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();

    // Deterministic pseudo-random walk over checkout/return attempts
    let mut x: usize = 17;
    for _ in 0..200 {
        x = (x * 31 + 7) % 1009;
        let id = ids[x % ids.len()];
        if x % 2 == 0 {
            let _ = catalog.checkout(id);
        } else {
            let _ = catalog.return_item(id);
        }
        assert_consistent(&catalog);
    }
}
