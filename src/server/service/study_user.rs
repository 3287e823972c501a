//! Join workflow: applying to a study, host review, and withdrawal.
//!
//! Seat counters on the study change in the same transaction as the request they
//! belong to, so `members_count + vacancy == capacity` holds after every commit.

use entity::notification::NotificationKind;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        notification::NotificationRepository, study::StudyRepository,
        study_user::StudyUserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        notification::CreateNotificationParams,
        study::Study,
        study_user::{AcceptStudyUserParams, StudyUser},
    },
    util::parse::require_text,
};

pub struct StudyUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a join request and notifies the host.
    ///
    /// # Returns
    /// - `Ok(StudyUser)` - The pending request
    /// - `Err(AppError::BadRequest)` - Blank introduction, caller hosts the study, the
    ///   study is closed, or the caller already applied
    /// - `Err(AppError::NotFound)` - No such study
    pub async fn join(
        &self,
        study_id: Uuid,
        user_id: Uuid,
        temp_bio: &str,
    ) -> Result<StudyUser, AppError> {
        let temp_bio = require_text(temp_bio, "tempBio")?;
        let study = self.get_study(study_id).await?;

        if study.is_host(user_id) {
            return Err(AppError::BadRequest(
                "Hosts cannot apply to their own study".to_string(),
            ));
        }
        if !study.is_open {
            return Err(AppError::BadRequest("Study is closed".to_string()));
        }

        let txn = self.db.begin().await?;

        let requests = StudyUserRepository::new(&txn);
        if requests.find(study_id, user_id).await?.is_some() {
            return Err(AppError::BadRequest("Already applied to this study".to_string()));
        }

        let request = requests.create(study_id, user_id, temp_bio).await?;
        NotificationRepository::new(&txn)
            .create(CreateNotificationParams::for_study(
                study.host_id,
                study.id,
                &study.title,
                NotificationKind::NewApply,
            ))
            .await?;

        txn.commit().await?;

        Ok(request)
    }

    /// Lists requests on a study. Hosts see every request, others only accepted members.
    pub async fn list(&self, study_id: Uuid, viewer_id: Uuid) -> Result<Vec<StudyUser>, AppError> {
        let study = self.get_study(study_id).await?;

        Ok(StudyUserRepository::new(self.db)
            .get_by_study(study_id, !study.is_host(viewer_id))
            .await?)
    }

    /// Replaces the introduction on the caller's own request.
    pub async fn update_temp_bio(
        &self,
        study_id: Uuid,
        user_id: Uuid,
        temp_bio: &str,
    ) -> Result<(), AppError> {
        let temp_bio = require_text(temp_bio, "tempBio")?;

        let updated = StudyUserRepository::new(self.db)
            .update_temp_bio(study_id, user_id, &temp_bio)
            .await?;
        if updated == 0 {
            return Err(AppError::NotFound("Join request not found".to_string()));
        }

        Ok(())
    }

    /// Withdraws the caller's request, freeing the seat if it had been accepted.
    pub async fn withdraw(&self, study_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let requests = StudyUserRepository::new(&txn);
        let Some(request) = requests.find(study_id, user_id).await? else {
            return Err(AppError::NotFound("Join request not found".to_string()));
        };

        requests.delete(study_id, user_id).await?;
        if request.is_accepted {
            StudyRepository::new(&txn).free_seat(study_id).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Applies the host's decision on a request and notifies the applicant.
    ///
    /// Accepting takes a seat, rejecting a previously accepted request frees it.
    /// Repeating the current decision leaves the counters alone.
    ///
    /// # Returns
    /// - `Ok(StudyUser)` - The request after the decision
    /// - `Err(AppError::NotFound)` - No such study or request
    /// - `Err(AuthError::AccessDenied)` - Caller is not the host
    /// - `Err(AppError::BadRequest)` - Accepting into a full study
    pub async fn decide(&self, params: AcceptStudyUserParams) -> Result<StudyUser, AppError> {
        let study = self.get_study(params.study_id).await?;
        if !study.is_host(params.host_id) {
            return Err(AuthError::AccessDenied(
                params.host_id,
                format!("not the host of study {}", study.id),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        let requests = StudyUserRepository::new(&txn);
        let Some(request) = requests.find(study.id, params.user_id).await? else {
            return Err(AppError::NotFound("Join request not found".to_string()));
        };

        let studies = StudyRepository::new(&txn);
        match (request.is_accepted, params.accept) {
            (false, true) => {
                if studies.take_seat(study.id).await? == 0 {
                    return Err(AppError::BadRequest("Study is full".to_string()));
                }
            }
            (true, false) => {
                studies.free_seat(study.id).await?;
            }
            _ => {}
        }

        requests
            .set_accepted(study.id, params.user_id, params.accept)
            .await?;

        let kind = if params.accept {
            NotificationKind::Accepted
        } else {
            NotificationKind::Rejected
        };
        NotificationRepository::new(&txn)
            .create(CreateNotificationParams::for_study(
                params.user_id,
                study.id,
                &study.title,
                kind,
            ))
            .await?;

        txn.commit().await?;

        Ok(StudyUser {
            is_accepted: params.accept,
            ..request
        })
    }

    async fn get_study(&self, study_id: Uuid) -> Result<Study, AppError> {
        StudyRepository::new(self.db)
            .find_by_id(study_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))
    }
}
