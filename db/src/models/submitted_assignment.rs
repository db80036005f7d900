use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter, prelude::Expr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "submitted_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[serde(rename = "assignmentId")]
    pub assignment_id: Option<i64>,
    pub title: Option<String>,
    pub marks: Option<i32>,
    #[serde(rename = "pdfURL")]
    pub pdf_url: Option<String>,
    pub note: Option<String>,
    #[serde(rename = "examineeName")]
    pub examinee_name: Option<String>,
    /// Email of the submitter, used as the list filter key.
    pub email: Option<String>,

    pub status: Option<String>,
    /// Mark awarded by the grader, absent until graded.
    #[serde(rename = "givenMark")]
    pub given_mark: Option<i32>,
    pub feedback: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Payload for a new submission, stored as sent.
#[derive(Debug, Clone, Default)]
pub struct NewSubmission {
    pub assignment_id: Option<i64>,
    pub title: Option<String>,
    pub marks: Option<i32>,
    pub pdf_url: Option<String>,
    pub note: Option<String>,
    pub examinee_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl Model {
    pub async fn create(db: &DbConn, submission: NewSubmission) -> Result<Model, DbErr> {
        let submission = ActiveModel {
            assignment_id: Set(submission.assignment_id),
            title: Set(submission.title),
            marks: Set(submission.marks),
            pdf_url: Set(submission.pdf_url),
            note: Set(submission.note),
            examinee_name: Set(submission.examinee_name),
            email: Set(submission.email),
            status: Set(submission.status),
            ..Default::default()
        };

        submission.insert(db).await
    }

    /// Lists submissions, restricted to one submitter when an email is
    /// given. The match is exact and case sensitive.
    pub async fn get_all(db: &DbConn, email: Option<String>) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find();
        if let Some(email) = email {
            query = query.filter(Column::Email.eq(email));
        }
        query.all(db).await
    }

    /// Writes the three grading columns for the given id and reports how
    /// many rows matched. A miss is zero rows, not an error, so grading an
    /// unknown id stays a no-op.
    pub async fn grade(
        db: &DbConn,
        id: i64,
        status: Option<String>,
        given_mark: Option<i32>,
        feedback: Option<String>,
    ) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status))
            .col_expr(Column::GivenMark, Expr::value(given_mark))
            .col_expr(Column::Feedback, Expr::value(feedback))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
