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
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_uuid(Notice::Id))
                    .col(string(Notice::Title))
                    .col(text(Notice::About))
                    .col(uuid(Notice::HostId))
                    .col(integer(Notice::Views).default(0))
                    .col(
                        timestamp_with_time_zone(Notice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notice_host_id")
                            .from(Notice::Table, Notice::HostId)
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
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notice {
    Table,
    Id,
    Title,
    About,
    HostId,
    Views,
    CreatedAt,
}
