use cookable_pantry::DeleteFoodInput;
use cookable_shared::Error;

mod helpers;

fn delete_input(food_name: &str, quantity: &str, expiry_date: &str) -> DeleteFoodInput {
    DeleteFoodInput {
        username: "john.doe".to_owned(),
        food_name: food_name.to_owned(),
        quantity: quantity.to_owned(),
        expiry_date: expiry_date.to_owned(),
    }
}

#[tokio::test]
async fn test_delete_food_soft_deletes() -> anyhow::Result<()> {
    let cmd = helpers::setup_command();
    helpers::add_foods(&cmd, "john.doe", ["Rice", "Salt"]).await?;

    cmd.delete_food(delete_input(" rice ", "1", "2026-12-31"))
        .await?;

    let active = cmd.active_foods("john.doe").await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].food_name, "Salt");

    Ok(())
}

#[tokio::test]
async fn test_delete_food_requires_exact_quantity_and_date() -> anyhow::Result<()> {
    let cmd = helpers::setup_command();
    helpers::add_foods(&cmd, "john.doe", ["Rice"]).await?;

    let wrong_quantity = cmd
        .delete_food(delete_input("Rice", "2", "2026-12-31"))
        .await
        .unwrap_err();
    let wrong_date = cmd
        .delete_food(delete_input("Rice", "1", "2026-12-30"))
        .await
        .unwrap_err();

    assert!(matches!(wrong_quantity, Error::NotFound(_)));
    assert_eq!(wrong_date.to_string(), "Matching food not found");
    assert_eq!(cmd.active_foods("john.doe").await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_delete_food_twice_fails() -> anyhow::Result<()> {
    let cmd = helpers::setup_command();
    helpers::add_foods(&cmd, "john.doe", ["Rice"]).await?;

    cmd.delete_food(delete_input("Rice", "1", "2026-12-31"))
        .await?;
    let err = cmd
        .delete_food(delete_input("Rice", "1", "2026-12-31"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_delete_food_compares_quantity_as_text() -> anyhow::Result<()> {
    let cmd = helpers::setup_command();
    helpers::add_foods(&cmd, "john.doe", ["Rice"]).await?;

    for quantity in ["01", " 1 ", "1.0"] {
        let err = cmd
            .delete_food(delete_input("Rice", quantity, "2026-12-31"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)), "{quantity:?} should not match");
    }

    cmd.delete_food(delete_input("Rice", "1", "2026-12-31"))
        .await?;
    assert!(cmd.active_foods("john.doe").await?.is_empty());

    Ok(())
}
