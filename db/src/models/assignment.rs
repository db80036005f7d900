use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A group assignment shared with the study group. Serde renames keep the
/// serialized form on the camelCase wire shape the frontend expects.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: Option<String>,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: Option<String>,
    pub marks: Option<i32>,
    pub description: Option<String>,
    #[serde(rename = "difficultyLevel")]
    pub difficulty_level: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    /// Email of the creator, checked on update and delete.
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        title: Option<String>,
        thumbnail_url: Option<String>,
        marks: Option<i32>,
        description: Option<String>,
        difficulty_level: Option<String>,
        due_date: Option<String>,
        email: Option<String>,
    ) -> Result<Model, DbErr> {
        let assignment = ActiveModel {
            title: Set(title),
            thumbnail_url: Set(thumbnail_url),
            marks: Set(marks),
            description: Set(description),
            difficulty_level: Set(difficulty_level),
            due_date: Set(due_date),
            email: Set(email),
            ..Default::default()
        };

        assignment.insert(db).await
    }

    pub async fn get_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Replaces every payload column. Fields absent from the request are
    /// written back as NULL, matching a whole-document update.
    pub async fn update(
        db: &DbConn,
        id: i64,
        title: Option<String>,
        thumbnail_url: Option<String>,
        marks: Option<i32>,
        description: Option<String>,
        difficulty_level: Option<String>,
        due_date: Option<String>,
        email: Option<String>,
    ) -> Result<Model, DbErr> {
        let assignment = ActiveModel {
            id: Set(id),
            title: Set(title),
            thumbnail_url: Set(thumbnail_url),
            marks: Set(marks),
            description: Set(description),
            difficulty_level: Set(difficulty_level),
            due_date: Set(due_date),
            email: Set(email),
        };

        assignment.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<u64, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
