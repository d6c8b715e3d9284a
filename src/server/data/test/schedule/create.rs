use super::*;

/// Tests creating a schedule with a vehicle and a budget.
///
/// Verifies that the location, vehicle and budget rows are inserted and resolved
/// back into the returned schedule.
///
/// Expected: Ok with all sub-rows present
#[tokio::test]
async fn creates_schedule_with_sub_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;

    let repo = ScheduleRepository::new(db);
    let schedule = repo.create(params(plan.id, 1)).await?;

    assert_eq!(schedule.plan_id, plan.id);
    assert_eq!(schedule.location.name, "Seongsan");
    assert_eq!(schedule.vehicle.as_deref(), Some("Bus"));
    assert_eq!(schedule.budget, Some(20_000));

    let found = repo.find_by_id(schedule.id).await?;
    assert_eq!(found, Some(schedule));

    Ok(())
}

/// Tests creating a schedule without optional rows.
///
/// Expected: Ok with no vehicle or budget rows inserted
#[tokio::test]
async fn creates_schedule_without_optional_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;

    let mut bare = params(plan.id, 1);
    bare.vehicle = None;
    bare.budget = None;
    let schedule = ScheduleRepository::new(db).create(bare).await?;

    assert!(schedule.vehicle.is_none());
    assert!(schedule.budget.is_none());
    assert_eq!(entity::prelude::Vehicle::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Budget::find().count(db).await?, 0);

    Ok(())
}

/// Tests schedule ordering within a plan.
///
/// Expected: Ok with schedules ordered by travel day
#[tokio::test]
async fn orders_schedules_by_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;

    let repo = ScheduleRepository::new(db);
    let day_two = repo.create(params(plan.id, 2)).await?;
    let day_one = repo.create(params(plan.id, 1)).await?;

    let schedules = repo.find_by_plan(plan.id).await?;

    let ids: Vec<i32> = schedules.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![day_one.id, day_two.id]);

    Ok(())
}
