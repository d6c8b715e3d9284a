use super::*;

/// Tests overwriting the editable fields of a plan.
///
/// Expected: Ok with new values and unchanged owner
#[tokio::test]
async fn updates_plan_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;

    let repo = PlanRepository::new(db);
    let updated = repo
        .update(UpdatePlanParams {
            id: plan.id,
            title: "Renamed".to_string(),
            location: "Gangneung".to_string(),
            description: Some("Beach".to_string()),
            start_date: plan.start_date,
            end_date: plan.end_date,
            total_budget: 50_000,
            is_public: false,
            status: true,
        })
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.location, "Gangneung");
    assert!(updated.status);
    assert!(!updated.is_public);
    assert_eq!(updated.user_id, owner.id);

    Ok(())
}

/// Tests updating a plan that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_to_update_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanRepository::new(db)
        .update(UpdatePlanParams {
            id: 404,
            title: "Ghost".to_string(),
            location: "Nowhere".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            total_budget: 0,
            is_public: true,
            status: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
