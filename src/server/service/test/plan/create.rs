use super::*;

/// Tests that creating a plan makes the creator an accepted member.
///
/// Expected: Ok with exactly one ACCEPTED membership for the creator
#[tokio::test]
async fn creates_owner_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let plan = PlanService::new(db)
        .create(CreatePlanParams {
            user_id: owner.id,
            title: "Jeju".to_string(),
            location: "Jeju".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 3).unwrap(),
            total_budget: 500_000,
            is_public: true,
            status: false,
        })
        .await?;

    let memberships = entity::prelude::PlanUser::find()
        .filter(entity::plan_user::Column::PlanId.eq(plan.id))
        .all(db)
        .await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].user_id, owner.id);
    assert_eq!(memberships[0].status, PlanUserStatus::Accepted.as_str());

    Ok(())
}

/// Tests viewing a private plan as an outsider.
///
/// Expected: Err(NotFound) for the outsider, Ok for the owner
#[tokio::test]
async fn hides_private_plan_from_outsiders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let plan = factory::create_private_plan(db, owner.id).await?;
    factory::create_member(db, plan.id, owner.id).await?;
    let outsider = factory::create_user(db).await?;

    let service = PlanService::new(db);

    assert!(matches!(
        service.get_detail(plan.id, outsider.id).await,
        Err(AppError::NotFound(_))
    ));
    let detail = service.get_detail(plan.id, owner.id).await?;
    assert_eq!(detail.owner_nickname, owner.nickname);
    assert_eq!(detail.members.len(), 1);

    Ok(())
}
