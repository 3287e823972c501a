//! Category lookups. Categories are seeded by migration and read-only at runtime.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, ColumnTrait};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a category code exists.
    pub async fn exists(&self, code: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
