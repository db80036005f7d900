use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202507010002_create_submitted_assignments"
    }
}

// No foreign key on assignment_id: submissions outlive assignment deletion,
// and the reference is informational only.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("submitted_assignments"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("assignment_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("title")).string().null())
                    .col(ColumnDef::new(Alias::new("marks")).integer().null())
                    .col(ColumnDef::new(Alias::new("pdf_url")).string().null())
                    .col(ColumnDef::new(Alias::new("note")).string().null())
                    .col(ColumnDef::new(Alias::new("examinee_name")).string().null())
                    .col(ColumnDef::new(Alias::new("email")).string().null())
                    .col(ColumnDef::new(Alias::new("status")).string().null())
                    .col(ColumnDef::new(Alias::new("given_mark")).integer().null())
                    .col(ColumnDef::new(Alias::new("feedback")).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("submitted_assignments")).to_owned())
            .await
    }
}
