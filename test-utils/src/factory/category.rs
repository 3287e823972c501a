//! Category factory.
//!
//! Migrations seed the production category list, but test schemas are generated from
//! entities, so tests insert the categories they reference.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category with the given code.
pub async fn create_category_with_code(
    db: &DatabaseConnection,
    code: i32,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        code: ActiveValue::Set(code),
        main: ActiveValue::Set("programming".to_string()),
        name: ActiveValue::Set(format!("category {}", code)),
    }
    .insert(db)
    .await
}

/// Creates a category with a unique code.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    create_category_with_code(db, 10_000 + next_id() as i32).await
}
