use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How often a study group meets per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    #[sea_orm(string_value = "ONCE")]
    Once,
    #[sea_orm(string_value = "TWICE")]
    Twice,
    #[sea_orm(string_value = "MORE")]
    More,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeUtc,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub study_about: String,
    /// Comma separated weekday tags, e.g. `mon,tue`
    pub weekday: String,
    pub frequency: Frequency,
    /// Comma separated location tags
    pub location: String,
    pub host_id: Uuid,
    pub capacity: i32,
    pub members_count: i32,
    pub vacancy: i32,
    pub is_open: bool,
    pub category_code: i32,
    pub views: i32,
    pub bookmark_count: i32,
    pub due_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::HostId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Host,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryCode",
        to = "super::category::Column::Code",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(has_many = "super::study_user::Entity")]
    StudyUser,
    #[sea_orm(has_many = "super::bookmark::Entity")]
    Bookmark,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::study_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyUser.def()
    }
}

impl Related<super::bookmark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookmark.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
