use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20220101_000001_create_user_table::User, m20220101_000003_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Study::Table)
                    .if_not_exists()
                    .col(pk_uuid(Study::Id))
                    .col(
                        timestamp_with_time_zone(Study::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Study::Title))
                    .col(text(Study::StudyAbout))
                    .col(string(Study::Weekday))
                    .col(string_len(Study::Frequency, 16))
                    .col(string(Study::Location))
                    .col(uuid(Study::HostId))
                    .col(integer(Study::Capacity))
                    .col(integer(Study::MembersCount).default(0))
                    .col(integer(Study::Vacancy))
                    .col(boolean(Study::IsOpen).default(true))
                    .col(integer(Study::CategoryCode))
                    .col(integer(Study::Views).default(0))
                    .col(integer(Study::BookmarkCount).default(0))
                    .col(timestamp_with_time_zone(Study::DueDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_host_id")
                            .from(Study::Table, Study::HostId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_category_code")
                            .from(Study::Table, Study::CategoryCode)
                            .to(Category::Table, Category::Code)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_study_created_at")
                    .table(Study::Table)
                    .col(Study::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Study::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Study {
    Table,
    Id,
    CreatedAt,
    Title,
    StudyAbout,
    Weekday,
    Frequency,
    Location,
    HostId,
    Capacity,
    MembersCount,
    Vacancy,
    IsOpen,
    CategoryCode,
    Views,
    BookmarkCount,
    DueDate,
}
