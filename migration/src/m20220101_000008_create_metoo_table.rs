use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20220101_000001_create_user_table::User, m20220101_000007_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metoo::Table)
                    .if_not_exists()
                    .col(uuid(Metoo::CommentId))
                    .col(uuid(Metoo::UserId))
                    .col(
                        timestamp_with_time_zone(Metoo::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(Metoo::CommentId).col(Metoo::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_metoo_comment_id")
                            .from(Metoo::Table, Metoo::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_metoo_user_id")
                            .from(Metoo::Table, Metoo::UserId)
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
            .drop_table(Table::drop().table(Metoo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Metoo {
    Table,
    CommentId,
    UserId,
    CreatedAt,
}
