use super::*;

/// Tests adding a schedule to a plan.
///
/// Expected: Ok with the schedule listed under the plan
#[tokio::test]
async fn adds_schedule_to_plan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;

    let service = ScheduleService::new(db);
    let schedule = service.create(params(plan.id)).await?;

    assert_eq!(schedule.vehicle.as_deref(), Some("Car"));
    assert_eq!(schedule.budget, Some(5_000));
    assert_eq!(service.list(plan.id).await?.len(), 1);

    Ok(())
}

/// Tests schedule validation.
///
/// Expected: Err(BadRequest) for day zero and for a negative budget
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let service = ScheduleService::new(db);

    let mut day_zero = params(plan.id);
    day_zero.travel_day_count = 0;
    assert!(matches!(
        service.create(day_zero).await,
        Err(AppError::BadRequest(_))
    ));

    let mut negative = params(plan.id);
    negative.budget = Some(-1);
    assert!(matches!(
        service.create(negative).await,
        Err(AppError::BadRequest(_))
    ));

    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 0);

    Ok(())
}

/// Tests adding a schedule to a missing plan.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_plan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleService::new(db).create(params(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
