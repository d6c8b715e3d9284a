//! Schedule entries of a plan.
//!
//! Callers are expected to have checked plan membership; the service makes sure
//! the schedule addressed actually belongs to the plan in the path.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{plan::PlanRepository, schedule::ScheduleRepository},
    error::AppError,
    model::schedule::{Schedule, ScheduleParams},
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, plan_id: i32) -> Result<Vec<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db).find_by_plan(plan_id).await?)
    }

    pub async fn create(&self, params: ScheduleParams) -> Result<Schedule, AppError> {
        validate(&params)?;

        let txn = self.db.begin().await?;
        if PlanRepository::new(&txn)
            .find_by_id(params.plan_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Plan {} not found",
                params.plan_id
            )));
        }
        let schedule = ScheduleRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(schedule)
    }

    pub async fn update(
        &self,
        schedule_id: i32,
        params: ScheduleParams,
    ) -> Result<Schedule, AppError> {
        validate(&params)?;

        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);
        ensure_in_plan(&repo, schedule_id, params.plan_id).await?;
        let schedule = repo.update(schedule_id, params).await?;
        txn.commit().await?;

        Ok(schedule)
    }

    pub async fn delete(&self, plan_id: i32, schedule_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);
        ensure_in_plan(&repo, schedule_id, plan_id).await?;
        repo.delete(schedule_id).await?;
        txn.commit().await?;

        Ok(())
    }
}

async fn ensure_in_plan<C: sea_orm::ConnectionTrait>(
    repo: &ScheduleRepository<'_, C>,
    schedule_id: i32,
    plan_id: i32,
) -> Result<(), AppError> {
    match repo.find_by_id(schedule_id).await? {
        Some(schedule) if schedule.plan_id == plan_id => Ok(()),
        _ => Err(AppError::NotFound(format!(
            "Schedule {} not found in plan {}",
            schedule_id, plan_id
        ))),
    }
}

fn validate(params: &ScheduleParams) -> Result<(), AppError> {
    if params.travel_day_count < 1 {
        return Err(AppError::BadRequest(
            "Travel day count starts at 1".to_string(),
        ));
    }
    if params.budget.is_some_and(|amount| amount < 0) {
        return Err(AppError::BadRequest(
            "Budget amount must not be negative".to_string(),
        ));
    }

    Ok(())
}
