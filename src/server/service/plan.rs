//! Plan lifecycle: creation, detail view, update, deletion, copying and listings.
//!
//! Every multi-row write runs inside one transaction. Deletion removes the children of
//! a plan explicitly in dependency order since the schema does not cascade.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        bookmark::BookmarkRepository, chat_message::ChatMessageRepository,
        chat_room::ChatRoomRepository, chat_room_user::ChatRoomUserRepository,
        comment::CommentRepository, like::LikeRepository, plan::PlanRepository,
        plan_user::PlanUserRepository, schedule::ScheduleRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        alarm::AlarmRequest,
        plan::{CreatePlanParams, Plan, PlanDetail, PlanSummary, UpdatePlanParams},
        plan_user::PlanUserStatus,
        schedule::ScheduleParams,
    },
    service::{alarm::AlarmService, bookmark::BookmarkService, like::LikeService},
};

/// Number of plans returned by the "recent" bookmark and like listings.
pub const RECENT_LIMIT: u64 = 3;

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a plan and the owner's accepted membership in one transaction.
    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, AppError> {
        let txn = self.db.begin().await?;

        let plan = PlanRepository::new(&txn).create(params).await?;
        PlanUserRepository::new(&txn)
            .create(plan.id, plan.user_id, PlanUserStatus::Accepted)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} created plan {}", plan.user_id, plan.id);

        Ok(plan)
    }

    /// Gets a plan the viewer may see.
    ///
    /// Private plans are only visible to their accepted members; to anyone else they
    /// are reported as missing.
    pub async fn get_visible(&self, plan_id: i32, viewer_id: i32) -> Result<Plan, AppError> {
        let not_found = || AppError::NotFound(format!("Plan {} not found", plan_id));

        let plan = PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(not_found)?;

        if !plan.is_public
            && !PlanUserRepository::new(self.db)
                .is_accepted_member(plan_id, viewer_id)
                .await?
        {
            return Err(not_found());
        }

        Ok(plan)
    }

    /// Gets a plan with its schedules, members, comments and counters.
    pub async fn get_detail(&self, plan_id: i32, viewer_id: i32) -> Result<PlanDetail, AppError> {
        let plan = self.get_visible(plan_id, viewer_id).await?;

        let owner_nickname = self.owner_nickname(plan.user_id).await?;
        let schedules = ScheduleRepository::new(self.db).find_by_plan(plan_id).await?;
        let members = PlanUserRepository::new(self.db).find_by_plan(plan_id).await?;
        let comments = CommentRepository::new(self.db).find_by_plan(plan_id).await?;
        let like_count = LikeService::new(self.db).count(plan_id).await?;
        let bookmark_count = BookmarkService::new(self.db).count(plan_id).await?;

        Ok(PlanDetail {
            plan,
            owner_nickname,
            schedules,
            members,
            comments,
            like_count,
            bookmark_count,
        })
    }

    /// Updates a plan and notifies its owner.
    ///
    /// The alarm is created after the update commits; its failure is logged and does
    /// not affect the result.
    pub async fn update(&self, params: UpdatePlanParams) -> Result<Plan, AppError> {
        let plan_id = params.id;

        let txn = self.db.begin().await?;
        let plan_repo = PlanRepository::new(&txn);
        if plan_repo.find_by_id(plan_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Plan {} not found", plan_id)));
        }
        let plan = plan_repo.update(params).await?;
        txn.commit().await?;

        AlarmService::new(self.db)
            .notify(AlarmRequest::plan_updated(plan.user_id, &plan.title))
            .await;

        Ok(plan)
    }

    /// Deletes a plan and everything attached to it.
    pub async fn delete(&self, plan_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if PlanRepository::new(&txn).find_by_id(plan_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Plan {} not found", plan_id)));
        }
        delete_plan_tree(&txn, plan_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted plan {}", plan_id);

        Ok(())
    }

    /// Copies a plan and its schedules into a new private plan owned by the caller.
    ///
    /// The copy starts unfinished, with every schedule unchecked. Vehicles and budgets
    /// of the source schedules are not carried over.
    pub async fn copy(&self, plan_id: i32, caller_id: i32) -> Result<Plan, AppError> {
        let source = self.get_visible(plan_id, caller_id).await?;

        let txn = self.db.begin().await?;

        let copy = PlanRepository::new(&txn)
            .create(CreatePlanParams::copy_of(&source, caller_id))
            .await?;
        PlanUserRepository::new(&txn)
            .create(copy.id, caller_id, PlanUserStatus::Accepted)
            .await?;

        let schedule_repo = ScheduleRepository::new(&txn);
        for schedule in schedule_repo.find_by_plan(source.id).await? {
            schedule_repo
                .create(ScheduleParams::copy_of(&schedule, copy.id))
                .await?;
        }

        txn.commit().await?;

        tracing::info!("User {} copied plan {} into {}", caller_id, source.id, copy.id);

        Ok(copy)
    }

    /// Lists public plans, optionally filtered by a title keyword.
    pub async fn list_public(&self, keyword: Option<&str>) -> Result<Vec<PlanSummary>, AppError> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        let plans = PlanRepository::new(self.db).find_public(keyword).await?;

        self.summarize(plans).await
    }

    /// Lists the plans the user owns or has joined.
    pub async fn list_user_plans(&self, user_id: i32) -> Result<Vec<PlanSummary>, AppError> {
        let plans = PlanRepository::new(self.db).find_by_member(user_id).await?;

        self.summarize(plans).await
    }

    /// Lists the plans the user bookmarked, most recent first.
    ///
    /// With `recent` only the latest [`RECENT_LIMIT`] are returned.
    pub async fn list_bookmarked(
        &self,
        user_id: i32,
        recent: bool,
    ) -> Result<Vec<PlanSummary>, AppError> {
        let limit = recent.then_some(RECENT_LIMIT);
        let ids = BookmarkRepository::new(self.db)
            .find_plan_ids_by_user(user_id, limit)
            .await?;
        let plans = PlanRepository::new(self.db).find_by_ids(&ids).await?;
        let plans = self.retain_visible(plans, user_id).await?;

        self.summarize(plans).await
    }

    /// Lists the plans the user liked, most recent first.
    pub async fn list_liked(
        &self,
        user_id: i32,
        recent: bool,
    ) -> Result<Vec<PlanSummary>, AppError> {
        let limit = recent.then_some(RECENT_LIMIT);
        let ids = LikeRepository::new(self.db)
            .find_plan_ids_by_user(user_id, limit)
            .await?;
        let plans = PlanRepository::new(self.db).find_by_ids(&ids).await?;
        let plans = self.retain_visible(plans, user_id).await?;

        self.summarize(plans).await
    }

    /// Drops private plans the viewer is not an accepted member of.
    ///
    /// A plan liked or bookmarked while public stays annotated after its owner makes it
    /// private, so listings built from annotations filter again.
    async fn retain_visible(&self, plans: Vec<Plan>, viewer_id: i32) -> Result<Vec<Plan>, AppError> {
        let member_repo = PlanUserRepository::new(self.db);

        let mut visible = Vec::with_capacity(plans.len());
        for plan in plans {
            if plan.is_public || member_repo.is_accepted_member(plan.id, viewer_id).await? {
                visible.push(plan);
            }
        }

        Ok(visible)
    }

    /// Projects plans into list entries, looking up the counters and owner per plan.
    async fn summarize(&self, plans: Vec<Plan>) -> Result<Vec<PlanSummary>, AppError> {
        let like_service = LikeService::new(self.db);
        let bookmark_service = BookmarkService::new(self.db);

        let mut summaries = Vec::with_capacity(plans.len());
        for plan in plans {
            let like_count = like_service.count(plan.id).await?;
            let bookmark_count = bookmark_service.count(plan.id).await?;
            let nickname = self.owner_nickname(plan.user_id).await?;

            summaries.push(PlanSummary {
                plan,
                bookmark_count,
                like_count,
                nickname,
            });
        }

        Ok(summaries)
    }

    async fn owner_nickname(&self, owner_id: i32) -> Result<String, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .map(|user| user.nickname)
            .unwrap_or_default())
    }
}

/// Deletes a plan row after removing every row that references it.
///
/// Runs on whatever connection it is given so callers can compose it into a larger
/// transaction, such as account deletion.
pub(crate) async fn delete_plan_tree<C: ConnectionTrait>(db: &C, plan_id: i32) -> Result<(), AppError> {
    let room_repo = ChatRoomRepository::new(db);
    let room_user_repo = ChatRoomUserRepository::new(db);
    let message_repo = ChatMessageRepository::new(db);

    for room in room_repo.find_by_plan(plan_id).await? {
        message_repo.delete_by_room(room.id).await?;
        room_user_repo.delete_by_room(room.id).await?;
        room_repo.delete(room.id).await?;
    }

    ScheduleRepository::new(db).delete_by_plan(plan_id).await?;
    CommentRepository::new(db).delete_by_plan(plan_id).await?;
    LikeRepository::new(db).delete_by_plan(plan_id).await?;
    BookmarkRepository::new(db).delete_by_plan(plan_id).await?;
    PlanUserRepository::new(db).delete_by_plan(plan_id).await?;
    PlanRepository::new(db).delete(plan_id).await?;

    Ok(())
}
