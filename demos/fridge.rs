use chrono::{Duration, Local};
use crisper::{
    d_day, IngredientDraft, IngredientService, InMemoryIngredientStore, ServiceError, SortMode,
    StorageCondition,
};

fn main() -> Result<(), ServiceError> {
    let service = IngredientService::new(InMemoryIngredientStore::new());
    let today = Local::now().date_naive();
    let owner = "demo-user";

    let drafts = [
        ("Milk", "REFRIGERATED", -2, 3),
        ("Egg", "REFRIGERATED", -5, 12),
        ("Peas", "FROZEN", -30, 90),
        ("Yogurt", "REFRIGERATED", -10, -1),
    ];
    for (name, condition, stored_days_ago, expires_in) in drafts {
        service.create_ingredient(
            owner,
            IngredientDraft {
                name: name.to_string(),
                amount: 1.0,
                unit: Some("ea".to_string()),
                category: None,
                storage_condition: Some(condition.to_string()),
                storage_date: today + Duration::days(stored_days_ago),
                expiration_date: today + Duration::days(expires_in),
            },
        )?;
    }

    println!("Refrigerated, soonest-expiring first:");
    let fridge = service.list_fridge(owner, StorageCondition::Refrigerated, SortMode::ByExpiry)?;
    for record in &fridge {
        let badge = d_day(today, record.expiration_date);
        println!("  {:<8} {}  urgent={}", record.name, badge, badge.is_urgent());
    }

    // The expired yogurt is already in the trash without anyone discarding it
    println!("Trash:");
    for item in service.list_trash(owner)? {
        println!("  {:<8} {}", item.record.name, item.d_day);
    }

    let milk = &fridge[0];
    service.mark_consumed(owner, milk.id)?;
    println!("Consumed so far:");
    for record in service.list_consumption_history(owner)? {
        println!("  {}", record.name);
    }

    let purged = service.purge_all_discarded(owner)?;
    println!("Emptied the trash ({} items)", purged);

    Ok(())
}
