use super::*;

/// Tests updating a schedule through its plan.
///
/// Expected: Ok with the new fields applied
#[tokio::test]
async fn updates_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let schedule = factory::create_schedule(db, plan.id).await?;

    let mut changed = params(plan.id);
    changed.status = true;
    changed.travel_day_count = 2;

    let updated = ScheduleService::new(db)
        .update(schedule.id, changed)
        .await?;

    assert!(updated.status);
    assert_eq!(updated.travel_day_count, 2);
    assert_eq!(updated.location.name, "Seongsan Ilchulbong");

    Ok(())
}

/// Tests updating and deleting a schedule through a plan it does not belong to.
///
/// Expected: Err(NotFound) for both and the schedule untouched
#[tokio::test]
async fn fails_for_schedule_of_other_plan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let other_plan = factory::create_plan_for_owner(db, &owner).await?;
    let schedule = factory::create_schedule(db, plan.id).await?;

    let service = ScheduleService::new(db);

    assert!(matches!(
        service.update(schedule.id, params(other_plan.id)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(other_plan.id, schedule.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 1);

    service.delete(plan.id, schedule.id).await?;
    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 0);

    Ok(())
}
