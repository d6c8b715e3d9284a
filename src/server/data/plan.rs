//! Plan data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    plan::{CreatePlanParams, Plan, UpdatePlanParams},
    plan_user::PlanUserStatus,
};

pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a plan row. Membership rows are created separately by the caller.
    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, DbErr> {
        let entity = entity::plan::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            location: ActiveValue::Set(params.location),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            total_budget: ActiveValue::Set(params.total_budget),
            is_public: ActiveValue::Set(params.is_public),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Plan::from_entity(entity))
    }

    pub async fn find_by_id(&self, plan_id: i32) -> Result<Option<Plan>, DbErr> {
        let entity = entity::prelude::Plan::find_by_id(plan_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Plan::from_entity))
    }

    /// Gets public plans newest first, optionally restricted to titles containing `keyword`.
    pub async fn find_public(&self, keyword: Option<&str>) -> Result<Vec<Plan>, DbErr> {
        let mut query =
            entity::prelude::Plan::find().filter(entity::plan::Column::IsPublic.eq(true));

        if let Some(keyword) = keyword {
            query = query.filter(entity::plan::Column::Title.contains(keyword));
        }

        let entities = query
            .order_by_desc(entity::plan::Column::CreatedAt)
            .order_by_desc(entity::plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Plan::from_entity).collect())
    }

    /// Gets the plans with the given IDs, returned in the order of `plan_ids`.
    ///
    /// IDs without a matching plan are skipped.
    pub async fn find_by_ids(&self, plan_ids: &[i32]) -> Result<Vec<Plan>, DbErr> {
        if plan_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<i32, entity::plan::Model> = entity::prelude::Plan::find()
            .filter(entity::plan::Column::Id.is_in(plan_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(plan_ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .map(Plan::from_entity)
            .collect())
    }

    /// Gets every plan the user owns.
    pub async fn find_by_owner(&self, user_id: i32) -> Result<Vec<Plan>, DbErr> {
        let entities = entity::prelude::Plan::find()
            .filter(entity::plan::Column::UserId.eq(user_id))
            .order_by_asc(entity::plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Plan::from_entity).collect())
    }

    /// Gets the plans the user is an accepted member of, owned ones included.
    pub async fn find_by_member(&self, user_id: i32) -> Result<Vec<Plan>, DbErr> {
        let entities = entity::prelude::Plan::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::plan::Relation::PlanUser.def(),
            )
            .filter(entity::plan_user::Column::UserId.eq(user_id))
            .filter(entity::plan_user::Column::Status.eq(PlanUserStatus::Accepted.as_str()))
            .order_by_desc(entity::plan::Column::CreatedAt)
            .order_by_desc(entity::plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Plan::from_entity).collect())
    }

    /// Overwrites the editable fields of a plan.
    ///
    /// # Returns
    /// - `Ok(Plan)` - The updated plan
    /// - `Err(DbErr::RecordNotUpdated)` - No plan with that ID
    pub async fn update(&self, params: UpdatePlanParams) -> Result<Plan, DbErr> {
        let entity = entity::plan::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            title: ActiveValue::Set(params.title),
            location: ActiveValue::Set(params.location),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            total_budget: ActiveValue::Set(params.total_budget),
            is_public: ActiveValue::Set(params.is_public),
            status: ActiveValue::Set(params.status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Plan::from_entity(entity))
    }

    /// Deletes a plan row. Child rows must already be gone.
    pub async fn delete(&self, plan_id: i32) -> Result<(), DbErr> {
        entity::prelude::Plan::delete_by_id(plan_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
