//! Cross-manager scenarios: shared-identity semantics between the
//! inventory and user collections.

use stockroom_core::{CoreError, InventoryManager, ProductDto, UserDto, UserManager};

fn product(name: &str, price_cents: i64, quantity: i64) -> ProductDto {
    ProductDto {
        name: name.to_string(),
        price_cents,
        quantity,
    }
}

#[test]
fn mutation_through_inventory_is_visible_to_every_holder() {
    let mut inventory = InventoryManager::new();
    let mut users = UserManager::new();

    let p = inventory.create_product(product("Produto P", 100, 10));

    let user_a = users.create_user(UserDto { name: "A".into() });
    let user_b = users.create_user(UserDto { name: "B".into() });
    assert!(users.set_user_products(&user_a.id, vec![p.clone()]));
    assert!(users.set_user_products(&user_b.id, vec![p.clone()]));

    inventory.add_product_quantity(&p.id(), 15).unwrap();

    let view_a = users.user_by_id(&user_a.id).unwrap().view();
    let view_b = users.user_by_id(&user_b.id).unwrap().view();
    assert_eq!(view_a.products[0].quantity, 25);
    assert_eq!(view_b.products[0].quantity, 25);
}

#[test]
fn alice_and_the_mouse() {
    let mut inventory = InventoryManager::new();
    let mut users = UserManager::new();

    let alice = users.create_user(UserDto {
        name: "Alice".into(),
    });
    let mouse = inventory.create_product(product("Mouse", 150, 10));
    assert!(users.set_user_products(&alice.id, vec![mouse.clone()]));

    inventory.remove_product_quantity(&mouse.id(), 3).unwrap();

    let view = users.user_by_id(&alice.id).unwrap().view();
    assert_eq!(view.products[0].quantity, 7);

    // Over-removal fails and leaves the quantity untouched.
    let err = inventory
        .remove_product_quantity(&mouse.id(), 20)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::InsufficientStock {
            available: 7,
            requested: 20,
            ..
        }
    ));
    let view = users.user_by_id(&alice.id).unwrap().view();
    assert_eq!(view.products[0].quantity, 7);
}

#[test]
fn deleting_from_inventory_leaves_user_references_intact() {
    let mut inventory = InventoryManager::new();
    let mut users = UserManager::new();

    let p = inventory.create_product(product("Teclado", 200, 5));
    let user = users.create_user(UserDto { name: "A".into() });
    assert!(users.set_user_products(&user.id, vec![p.clone()]));

    assert!(inventory.delete_product(&p.id()));

    // Inventory no longer resolves the id...
    assert!(matches!(
        inventory.find_product_by_id(&p.id()),
        Err(CoreError::ProductNotFound(_))
    ));

    // ...but the user's reference survives (no cascading removal).
    let view = users.user_by_id(&user.id).unwrap().view();
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].name, "Teclado");
}

#[test]
fn set_user_products_failure_leaves_inventory_untouched() {
    let mut inventory = InventoryManager::new();
    let mut users = UserManager::new();

    let p = inventory.create_product(product("Mouse", 150, 10));

    assert!(!users.set_user_products("non-existent-id", vec![p.clone()]));
    assert_eq!(inventory.len(), 1);
    assert_eq!(p.snapshot().quantity, 10);
}

#[test]
fn user_list_shares_entities_with_inventory_snapshot() {
    let mut inventory = InventoryManager::new();
    let mut users = UserManager::new();

    let p = inventory.create_product(product("Monitor", 900, 3));
    let user = users.create_user(UserDto { name: "A".into() });
    assert!(users.set_user_products(&user.id, inventory.products()));

    let held = &users.user_by_id(&user.id).unwrap().products()[0];
    assert!(held.same_entity(&p));
}
