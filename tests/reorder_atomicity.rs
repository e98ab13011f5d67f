//! All-or-nothing semantics of batch reordering.

mod common;

use common::Fixture;
use pressroom_core::error::CmsError;
use pressroom_core::repository::{OrderedCollection, PositionUpdate};

#[tokio::test]
async fn reorder_applies_every_position() {
    let fixture = Fixture::new();
    let coordinator = fixture.ordering();
    let a = fixture.repository.seed_module("getting-started", "Getting started", 0);
    let b = fixture.repository.seed_module("deep-dives", "Deep dives", 1);
    let c = fixture.repository.seed_module("reference", "Reference", 2);

    coordinator
        .reorder(
            OrderedCollection::Modules,
            &[
                PositionUpdate { id: a.id, position: 2 },
                PositionUpdate { id: b.id, position: 0 },
                PositionUpdate { id: c.id, position: 1 },
            ],
        )
        .await
        .unwrap();

    let positions: Vec<i32> = [a.id, b.id, c.id]
        .iter()
        .map(|id| {
            fixture
                .repository
                .position_of(OrderedCollection::Modules, *id)
                .unwrap()
        })
        .collect();
    assert_eq!(positions, vec![2, 0, 1]);
}

#[tokio::test]
async fn one_unknown_id_leaves_all_positions_unchanged() {
    let fixture = Fixture::new();
    let coordinator = fixture.ordering();
    let a = fixture.repository.seed_module("alpha", "Alpha", 0);
    let b = fixture.repository.seed_module("beta", "Beta", 1);

    let err = coordinator
        .reorder(
            OrderedCollection::Modules,
            &[
                PositionUpdate { id: a.id, position: 5 },
                PositionUpdate { id: 9999, position: 6 },
                PositionUpdate { id: b.id, position: 7 },
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CmsError::NotFound("Module")));
    assert_eq!(
        fixture.repository.position_of(OrderedCollection::Modules, a.id),
        Some(0)
    );
    assert_eq!(
        fixture.repository.position_of(OrderedCollection::Modules, b.id),
        Some(1)
    );
}

#[tokio::test]
async fn reorder_is_idempotent() {
    let fixture = Fixture::new();
    let coordinator = fixture.ordering();
    let a = fixture.repository.seed_menu("Home", 0);
    let b = fixture.repository.seed_menu("Articles", 1);

    let batch = [
        PositionUpdate { id: a.id, position: 1 },
        PositionUpdate { id: b.id, position: 0 },
    ];

    coordinator
        .reorder(OrderedCollection::NavMenus, &batch)
        .await
        .unwrap();
    coordinator
        .reorder(OrderedCollection::NavMenus, &batch)
        .await
        .unwrap();

    assert_eq!(
        fixture.repository.position_of(OrderedCollection::NavMenus, a.id),
        Some(1)
    );
    assert_eq!(
        fixture.repository.position_of(OrderedCollection::NavMenus, b.id),
        Some(0)
    );
}

#[tokio::test]
async fn empty_batch_succeeds_and_changes_nothing() {
    let fixture = Fixture::new();
    let coordinator = fixture.ordering();
    let module = fixture.repository.seed_module("solo", "Solo", 4);

    coordinator
        .reorder(OrderedCollection::Modules, &[])
        .await
        .unwrap();

    assert_eq!(
        fixture
            .repository
            .position_of(OrderedCollection::Modules, module.id),
        Some(4)
    );
}

#[tokio::test]
async fn collections_are_isolated_from_each_other() {
    let fixture = Fixture::new();
    let coordinator = fixture.ordering();
    let menu = fixture.repository.seed_menu("Home", 0);
    let submenu = fixture.repository.seed_submenu(menu.id, "Latest", 0);

    // A submenu id is not addressable through the menus collection.
    let err = coordinator
        .reorder(
            OrderedCollection::NavMenus,
            &[PositionUpdate { id: submenu.id, position: 3 }],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CmsError::NotFound("Menu")));
    assert_eq!(
        fixture
            .repository
            .position_of(OrderedCollection::NavSubMenus, submenu.id),
        Some(0)
    );
}

#[tokio::test]
async fn duplicate_positions_are_accepted() {
    let fixture = Fixture::new();
    let coordinator = fixture.ordering();
    let a = fixture.repository.seed_module("first", "First", 0);
    let b = fixture.repository.seed_module("second", "Second", 1);

    // The primitive does not police uniqueness; ties are the caller's
    // problem.
    coordinator
        .reorder(
            OrderedCollection::Modules,
            &[
                PositionUpdate { id: a.id, position: 3 },
                PositionUpdate { id: b.id, position: 3 },
            ],
        )
        .await
        .unwrap();

    assert_eq!(
        fixture.repository.position_of(OrderedCollection::Modules, a.id),
        Some(3)
    );
    assert_eq!(
        fixture.repository.position_of(OrderedCollection::Modules, b.id),
        Some(3)
    );
}
