//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing accounts: creation at signup,
//! lookups by id, email and pending token, session and role flags, and the list of
//! studies a user has applied to.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    study::Study,
    user::{AppliedStudy, CreateUserParams, User},
};

/// Repository providing database operations for user accounts.
///
/// Generic over the connection so services can run it inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account with the `GUEST` role.
    ///
    /// # Arguments
    /// - `params` - Id, email, password hash and email verification token
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(params.id),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(UserRole::Guest),
            is_logout: ActiveValue::Set(false),
            token: ActiveValue::Set(params.token),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user holding a pending verification or reset token.
    ///
    /// Empty tokens never match since the column is cleared once a token is used.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        if token.is_empty() {
            return Ok(None);
        }

        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Promotes a `GUEST` account to `USER` after email verification.
    ///
    /// # Returns
    /// - `Ok(1)` - Account promoted
    /// - `Ok(0)` - No `GUEST` account with that id (unknown or already verified)
    /// - `Err(DbErr)` - Database error during update
    pub async fn verify_guest(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Role.eq(UserRole::Guest))
            .col_expr(entity::user::Column::Role, Expr::value(UserRole::User))
            .col_expr(entity::user::Column::Token, Expr::value(String::new()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets or clears the logout flag.
    ///
    /// Tokens issued to an account with the flag set no longer authenticate.
    pub async fn set_logout(&self, id: Uuid, is_logout: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::IsLogout, Expr::value(is_logout))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the pending token.
    pub async fn set_token(&self, id: Uuid, token: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::Token, Expr::value(token))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stores a new password hash and consumes the pending token.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::Password, Expr::value(password_hash))
            .col_expr(entity::user::Column::Token, Expr::value(String::new()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Promotes every account with one of the given emails to `ADMIN`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of accounts whose role changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn promote_admins(&self, emails: &[String]) -> Result<u64, DbErr> {
        if emails.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.is_in(emails.iter().cloned()))
            .filter(entity::user::Column::Role.ne(UserRole::Admin))
            .col_expr(entity::user::Column::Role, Expr::value(UserRole::Admin))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an account. Profiles, studies, join requests, bookmarks, flags and
    /// notifications cascade; authored comments keep their place with no author.
    ///
    /// # Returns
    /// - `Ok(1)` - Account deleted
    /// - `Ok(0)` - No account with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Lists studies the user applied to, most recent request first.
    pub async fn get_applied_studies(&self, user_id: Uuid) -> Result<Vec<AppliedStudy>, DbErr> {
        let rows = entity::prelude::StudyUser::find()
            .filter(entity::study_user::Column::UserId.eq(user_id))
            .order_by_desc(entity::study_user::Column::CreatedAt)
            .find_also_related(entity::prelude::Study)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(request, study)| {
                study.map(|study| AppliedStudy {
                    study: Study::from_entity(study),
                    is_accepted: request.is_accepted,
                })
            })
            .collect())
    }
}
