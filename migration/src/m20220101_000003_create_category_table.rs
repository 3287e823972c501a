use sea_orm_migration::{prelude::*, schema::*};

/// Category codes offered when creating a study, grouped by their main category.
const CATEGORIES: &[(i32, &str, &str)] = &[
    (100, "language", "language"),
    (101, "language", "english"),
    (102, "language", "japanese"),
    (103, "language", "chinese"),
    (104, "language", "other languages"),
    (200, "employment", "employment"),
    (201, "employment", "interview"),
    (202, "employment", "cover letter"),
    (203, "employment", "internship"),
    (300, "certification", "certification"),
    (301, "certification", "technical certificate"),
    (302, "certification", "civil service exam"),
    (400, "coursework", "coursework"),
    (401, "coursework", "major"),
    (402, "coursework", "general education"),
    (500, "programming", "programming"),
    (501, "programming", "algorithms"),
    (502, "programming", "web"),
    (503, "programming", "data science"),
    (600, "hobby", "hobby"),
    (601, "hobby", "reading"),
    (602, "hobby", "sports"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(integer(Category::Code).primary_key())
                    .col(string(Category::Main))
                    .col(string(Category::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Code, Category::Main, Category::Name])
            .to_owned();
        for (code, main, name) in CATEGORIES {
            insert
                .values([(*code).into(), (*main).into(), (*name).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Code,
    Main,
    Name,
}
