mod support;

use crisper::{
    IngredientPatch, IngredientStatus, ServiceError, SortMode, StorageCondition, TransitionError,
    TransitionEvent, ValidationError,
};
use support::{date, draft, service_at};

#[test]
fn create_rejects_storage_after_expiration() {
    let (service, _) = service_at(date(2026, 3, 1));
    let err = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 3, 10), date(2026, 3, 1)),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::StorageAfterExpiration { .. })
    ));
}

#[test]
fn create_rejects_empty_name() {
    let (service, _) = service_at(date(2026, 3, 1));
    let err = service
        .create_ingredient(
            "user1",
            draft("", "REFRIGERATED", date(2026, 3, 1), date(2026, 3, 5)),
        )
        .unwrap_err();
    assert_eq!(err, ServiceError::Validation(ValidationError::EmptyName));
}

#[test]
fn discard_restore_then_second_restore_fails() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    service.discard_ingredient("user1", record.id).unwrap();
    service.restore_ingredient("user1", record.id).unwrap();

    // Back in the fridge under its original compartment
    let fridge = service
        .list_fridge("user1", StorageCondition::Refrigerated, SortMode::ByExpiry)
        .unwrap();
    assert_eq!(fridge.len(), 1);
    assert_eq!(fridge[0].id, record.id);

    let err = service.restore_ingredient("user1", record.id).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Transition(TransitionError::InvalidTransition {
            status: IngredientStatus::Active,
            event: TransitionEvent::Restore,
        })
    );
}

#[test]
fn double_discard_yields_one_success_one_invalid_transition() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    service.discard_ingredient("user1", record.id).unwrap();
    let err = service.discard_ingredient("user1", record.id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Transition(TransitionError::InvalidTransition {
            status: IngredientStatus::Discarded,
            event: TransitionEvent::Discard,
        })
    ));
}

#[test]
fn consumed_is_terminal() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    service.mark_consumed("user1", record.id).unwrap();
    for result in [
        service.discard_ingredient("user1", record.id),
        service.restore_ingredient("user1", record.id),
        service.mark_consumed("user1", record.id),
        service.purge_ingredient("user1", record.id),
    ] {
        assert!(matches!(
            result.unwrap_err(),
            ServiceError::Transition(TransitionError::InvalidTransition {
                status: IngredientStatus::Consumed,
                ..
            })
        ));
    }
}

#[test]
fn purge_requires_discarded() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    let err = service.purge_ingredient("user1", record.id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Transition(TransitionError::InvalidTransition {
            status: IngredientStatus::Active,
            event: TransitionEvent::Purge,
        })
    ));

    service.discard_ingredient("user1", record.id).unwrap();
    service.purge_ingredient("user1", record.id).unwrap();
    let err = service.discard_ingredient("user1", record.id).unwrap_err();
    assert_eq!(err, ServiceError::NotFound { id: record.id });
}

#[test]
fn cross_owner_access_is_not_found() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    // Same NotFound for another owner's record as for a missing one
    let err = service.discard_ingredient("user2", record.id).unwrap_err();
    assert_eq!(err, ServiceError::NotFound { id: record.id });
    let err = service
        .edit_ingredient("user2", record.id, IngredientPatch::default())
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound { id: record.id });
    let err = service.discard_ingredient("user1", 9999).unwrap_err();
    assert_eq!(err, ServiceError::NotFound { id: 9999 });
}

#[test]
fn edit_updates_fields_in_place() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    let edited = service
        .edit_ingredient(
            "user1",
            record.id,
            IngredientPatch {
                name: Some("Oat Milk".to_string()),
                amount: Some(750.0),
                storage_condition: Some("FROZEN".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(edited.id, record.id);
    assert_eq!(edited.name, "Oat Milk");
    assert_eq!(edited.amount, 750.0);
    assert_eq!(edited.compartment(), StorageCondition::Frozen);
    assert_eq!(edited.status, IngredientStatus::Active);
}

#[test]
fn rejected_edit_changes_nothing() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();

    let err = service
        .edit_ingredient(
            "user1",
            record.id,
            IngredientPatch {
                name: Some("Cream".to_string()),
                expiration_date: Some(date(2026, 1, 1)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let fridge = service
        .list_fridge("user1", StorageCondition::Refrigerated, SortMode::ByExpiry)
        .unwrap();
    assert_eq!(fridge[0].name, "Milk");
    assert_eq!(fridge[0].expiration_date, date(2026, 2, 10));
}

#[test]
fn edit_of_discarded_record_is_rejected() {
    let (service, _) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();
    service.discard_ingredient("user1", record.id).unwrap();

    let err = service
        .edit_ingredient(
            "user1",
            record.id,
            IngredientPatch {
                amount: Some(2.0),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Transition(TransitionError::InvalidTransition {
            status: IngredientStatus::Discarded,
            event: TransitionEvent::Edit,
        })
    ));
}

#[test]
fn expired_record_can_still_be_edited_back_to_life() {
    let (service, clock) = service_at(date(2026, 2, 3));
    let record = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 5)),
        )
        .unwrap();

    clock.set_today(date(2026, 2, 8));
    assert_eq!(service.list_trash("user1").unwrap().len(), 1);

    // Stored status is still Active, so the date fix goes through
    service
        .edit_ingredient(
            "user1",
            record.id,
            IngredientPatch {
                expiration_date: Some(date(2026, 2, 20)),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(service.list_trash("user1").unwrap().is_empty());
    let fridge = service
        .list_fridge("user1", StorageCondition::Refrigerated, SortMode::ByExpiry)
        .unwrap();
    assert_eq!(fridge.len(), 1);
}

#[test]
fn ids_are_not_reused_after_purge() {
    let (service, _) = service_at(date(2026, 2, 3));
    let first = service
        .create_ingredient(
            "user1",
            draft("Milk", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();
    service.discard_ingredient("user1", first.id).unwrap();
    service.purge_ingredient("user1", first.id).unwrap();

    let second = service
        .create_ingredient(
            "user1",
            draft("Egg", "REFRIGERATED", date(2026, 2, 1), date(2026, 2, 10)),
        )
        .unwrap();
    assert!(second.id > first.id);
}
