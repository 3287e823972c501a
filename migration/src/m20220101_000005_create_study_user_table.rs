use sea_orm_migration::{prelude::*, schema::*};

use super::{m20220101_000001_create_user_table::User, m20220101_000004_create_study_table::Study};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyUser::Table)
                    .if_not_exists()
                    .col(uuid(StudyUser::StudyId))
                    .col(uuid(StudyUser::UserId))
                    .col(boolean(StudyUser::IsAccepted).default(false))
                    .col(text(StudyUser::TempBio))
                    .col(
                        timestamp_with_time_zone(StudyUser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StudyUser::StudyId)
                            .col(StudyUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_user_study_id")
                            .from(StudyUser::Table, StudyUser::StudyId)
                            .to(Study::Table, Study::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_user_user_id")
                            .from(StudyUser::Table, StudyUser::UserId)
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
            .drop_table(Table::drop().table(StudyUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyUser {
    Table,
    StudyId,
    UserId,
    IsAccepted,
    TempBio,
    CreatedAt,
}
