use super::*;

/// Tests copying a public plan with schedules.
///
/// Verifies that the copy is private, unfinished, owned by the caller and has as
/// many schedules as the source.
///
/// Expected: Ok with a private copy and duplicated schedules
#[tokio::test]
async fn copies_plan_with_schedules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source) = factory::create_plan_with_owner(db).await?;
    factory::schedule::ScheduleFactory::new(db, source.id)
        .status(true)
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, source.id)
        .travel_day_count(2)
        .build()
        .await?;
    let caller = factory::create_user(db).await?;

    let copy = PlanService::new(db).copy(source.id, caller.id).await?;

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.user_id, caller.id);
    assert_eq!(copy.title, source.title);
    assert!(!copy.is_public);
    assert!(!copy.status);

    let copied = entity::prelude::Schedule::find()
        .filter(entity::schedule::Column::PlanId.eq(copy.id))
        .all(db)
        .await?;
    assert_eq!(copied.len(), 2);
    assert!(copied.iter().all(|s| !s.status));

    let membership = entity::prelude::PlanUser::find()
        .filter(entity::plan_user::Column::PlanId.eq(copy.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(membership.user_id, caller.id);
    assert_eq!(membership.status, PlanUserStatus::Accepted.as_str());

    Ok(())
}

/// Tests copying a plan that does not exist.
///
/// Expected: Err(NotFound) and no plan created
#[tokio::test]
async fn fails_for_missing_plan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user(db).await?;

    let result = PlanService::new(db).copy(404, caller.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Plan::find().count(db).await?, 0);

    Ok(())
}

/// Tests copying someone else's private plan.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_private_plan_of_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let private = factory::create_private_plan(db, owner.id).await?;
    let caller = factory::create_user(db).await?;

    let result = PlanService::new(db).copy(private.id, caller.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
