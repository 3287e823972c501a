use sea_orm_migration::{prelude::*, schema::*};

use super::m20220101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(pk_uuid(UserProfile::UserId))
                    .col(string_uniq(UserProfile::UserName))
                    .col(string(UserProfile::Dept))
                    .col(integer(UserProfile::Grade))
                    .col(text(UserProfile::Bio))
                    .col(text(UserProfile::UserAbout))
                    .col(boolean(UserProfile::ShowDept).default(true))
                    .col(boolean(UserProfile::ShowGrade).default(true))
                    .col(boolean(UserProfile::OnBreak).default(false))
                    .col(string_null(UserProfile::Link1))
                    .col(string_null(UserProfile::Link2))
                    .col(string_null(UserProfile::Link3))
                    .col(string(UserProfile::Categories).default(""))
                    .col(string(UserProfile::Image).default(""))
                    .col(string(UserProfile::Email))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_user_id")
                            .from(UserProfile::Table, UserProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    UserId,
    UserName,
    Dept,
    Grade,
    Bio,
    UserAbout,
    ShowDept,
    ShowGrade,
    OnBreak,
    Link1,
    Link2,
    Link3,
    Categories,
    Image,
    Email,
}
