//! Plan membership repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::plan_user::{PlanMember, PlanUser, PlanUserStatus};

pub struct PlanUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        plan_id: i32,
        user_id: i32,
        status: PlanUserStatus,
    ) -> Result<PlanUser, DbErr> {
        let entity = entity::plan_user::ActiveModel {
            plan_id: ActiveValue::Set(plan_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlanUser::from_entity(entity))
    }

    /// Finds the membership row of a user in a plan regardless of status.
    pub async fn find(&self, plan_id: i32, user_id: i32) -> Result<Option<PlanUser>, DbErr> {
        let entity = entity::prelude::PlanUser::find()
            .filter(entity::plan_user::Column::PlanId.eq(plan_id))
            .filter(entity::plan_user::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(PlanUser::from_entity))
    }

    /// Returns whether the user has an accepted membership in the plan.
    pub async fn is_accepted_member(&self, plan_id: i32, user_id: i32) -> Result<bool, DbErr> {
        Ok(self
            .find(plan_id, user_id)
            .await?
            .is_some_and(|m| m.status == PlanUserStatus::Accepted))
    }

    /// Gets every membership of a plan joined with the member's nickname, in join order.
    pub async fn find_by_plan(&self, plan_id: i32) -> Result<Vec<PlanMember>, DbErr> {
        let rows = entity::prelude::PlanUser::find()
            .filter(entity::plan_user::Column::PlanId.eq(plan_id))
            .order_by_asc(entity::plan_user::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(membership, user)| PlanMember {
                membership: PlanUser::from_entity(membership),
                nickname: user.map(|u| u.nickname).unwrap_or_default(),
            })
            .collect())
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: PlanUserStatus,
    ) -> Result<PlanUser, DbErr> {
        let entity = entity::plan_user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(PlanUser::from_entity(entity))
    }

    /// Removes a user's membership row from a plan.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - The user had no membership in the plan
    pub async fn delete(&self, plan_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlanUser::delete_many()
            .filter(entity::plan_user::Column::PlanId.eq(plan_id))
            .filter(entity::plan_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanUser::delete_many()
            .filter(entity::plan_user::Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanUser::delete_many()
            .filter(entity::plan_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
