pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_user_table;
mod m20220101_000002_create_user_profile_table;
mod m20220101_000003_create_category_table;
mod m20220101_000004_create_study_table;
mod m20220101_000005_create_study_user_table;
mod m20220101_000006_create_bookmark_table;
mod m20220101_000007_create_comment_table;
mod m20220101_000008_create_metoo_table;
mod m20220101_000009_create_notification_table;
mod m20220101_000010_create_notice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_user_table::Migration),
            Box::new(m20220101_000002_create_user_profile_table::Migration),
            Box::new(m20220101_000003_create_category_table::Migration),
            Box::new(m20220101_000004_create_study_table::Migration),
            Box::new(m20220101_000005_create_study_user_table::Migration),
            Box::new(m20220101_000006_create_bookmark_table::Migration),
            Box::new(m20220101_000007_create_comment_table::Migration),
            Box::new(m20220101_000008_create_metoo_table::Migration),
            Box::new(m20220101_000009_create_notification_table::Migration),
            Box::new(m20220101_000010_create_notice_table::Migration),
        ]
    }
}
