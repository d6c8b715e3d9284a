//! Plan membership: invitations, responses and removal.
//!
//! An invitation is a `PENDING` membership row. Accepting it makes the invitee an
//! editor of the plan and a member of the plan's existing chat rooms. The owner's own
//! membership can never be removed.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        chat_room::ChatRoomRepository, chat_room_user::ChatRoomUserRepository,
        plan::PlanRepository, plan_user::PlanUserRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        alarm::AlarmRequest,
        plan::Plan,
        plan_user::{PlanMember, PlanUser, PlanUserStatus},
        user::User,
    },
    service::{alarm::AlarmService, chat::leave_room},
};

pub struct PlanUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, plan_id: i32) -> Result<Vec<PlanMember>, AppError> {
        self.find_plan(plan_id).await?;

        Ok(PlanUserRepository::new(self.db).find_by_plan(plan_id).await?)
    }

    /// Invites a user to a plan and notifies them.
    ///
    /// A previously declined invitation is reopened.
    ///
    /// # Returns
    /// - `Ok(PlanUser)` - Pending membership
    /// - `Err(AppError::NotFound)` - Plan or invitee does not exist
    /// - `Err(AppError::Conflict)` - Invitee is already a member or already invited
    pub async fn invite(&self, plan_id: i32, invitee_id: i32) -> Result<PlanUser, AppError> {
        let plan = self.find_plan(plan_id).await?;

        if UserRepository::new(self.db)
            .find_by_id(invitee_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", invitee_id)));
        }

        let repo = PlanUserRepository::new(self.db);
        let membership = match repo.find(plan_id, invitee_id).await? {
            None => {
                repo.create(plan_id, invitee_id, PlanUserStatus::Pending)
                    .await?
            }
            Some(existing) => match existing.status {
                PlanUserStatus::Accepted => {
                    return Err(AppError::Conflict(
                        "User is already a member of this plan".to_string(),
                    ))
                }
                PlanUserStatus::Pending => {
                    return Err(AppError::Conflict(
                        "User has already been invited".to_string(),
                    ))
                }
                PlanUserStatus::Declined => {
                    repo.update_status(existing.id, PlanUserStatus::Pending)
                        .await?
                }
            },
        };

        AlarmService::new(self.db)
            .notify(AlarmRequest::plan_invitation(invitee_id, &plan.title))
            .await;

        Ok(membership)
    }

    /// Accepts a pending invitation and joins the plan's chat rooms.
    pub async fn accept(&self, plan_id: i32, user_id: i32) -> Result<PlanUser, AppError> {
        let txn = self.db.begin().await?;

        let invitation = pending_invitation(&txn, plan_id, user_id).await?;
        let membership = PlanUserRepository::new(&txn)
            .update_status(invitation.id, PlanUserStatus::Accepted)
            .await?;

        let room_user_repo = ChatRoomUserRepository::new(&txn);
        for room in ChatRoomRepository::new(&txn).find_by_plan(plan_id).await? {
            if !room_user_repo.exists(room.id, user_id).await? {
                room_user_repo.create(room.id, user_id).await?;
            }
        }

        txn.commit().await?;

        tracing::info!("User {} joined plan {}", user_id, plan_id);

        Ok(membership)
    }

    pub async fn reject(&self, plan_id: i32, user_id: i32) -> Result<PlanUser, AppError> {
        let invitation = pending_invitation(self.db, plan_id, user_id).await?;

        Ok(PlanUserRepository::new(self.db)
            .update_status(invitation.id, PlanUserStatus::Declined)
            .await?)
    }

    /// Removes a user from a plan.
    ///
    /// The owner and admins may remove anyone but the owner; other members may only
    /// remove themselves. The removed user also leaves the plan's chat rooms.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::Forbidden)` - Target is the owner, or caller is neither owner, admin nor target
    /// - `Err(AppError::NotFound)` - Plan missing or target not a member
    pub async fn remove(&self, plan_id: i32, caller: &User, target_id: i32) -> Result<(), AppError> {
        let plan = self.find_plan(plan_id).await?;

        if target_id == plan.user_id {
            return Err(AppError::Forbidden(
                "The plan owner cannot be removed".to_string(),
            ));
        }
        if caller.id != plan.user_id && caller.id != target_id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "Only the plan owner can remove other members".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        if !PlanUserRepository::new(&txn)
            .delete(plan_id, target_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of plan {}",
                target_id, plan_id
            )));
        }

        let room_user_repo = ChatRoomUserRepository::new(&txn);
        for room in ChatRoomRepository::new(&txn).find_by_plan(plan_id).await? {
            if room_user_repo.exists(room.id, target_id).await? {
                leave_room(&txn, room.id, target_id).await?;
            }
        }

        txn.commit().await?;

        tracing::info!("User {} removed from plan {}", target_id, plan_id);

        Ok(())
    }

    async fn find_plan(&self, plan_id: i32) -> Result<Plan, AppError> {
        PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", plan_id)))
    }
}

async fn pending_invitation<C: ConnectionTrait>(
    db: &C,
    plan_id: i32,
    user_id: i32,
) -> Result<PlanUser, AppError> {
    match PlanUserRepository::new(db).find(plan_id, user_id).await? {
        Some(membership) if membership.status == PlanUserStatus::Pending => Ok(membership),
        Some(_) => Err(AppError::Conflict(
            "Invitation has already been answered".to_string(),
        )),
        None => Err(AppError::NotFound(format!(
            "No invitation to plan {}",
            plan_id
        ))),
    }
}
