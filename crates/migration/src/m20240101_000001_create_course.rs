//! Create `course` table.
//!
//! Only `name` is mandatory; catalogue attributes are nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Course::Name, 255).not_null())
                    .col(text_null(Course::Description))
                    .col(string_len_null(Course::Duration, 255))
                    .col(string_len_null(Course::Level, 64))
                    .col(string_len_null(Course::Category, 255))
                    .col(double_null(Course::Price))
                    .col(text_null(Course::Prerequisites))
                    .col(text_null(Course::Features))
                    .col(string_len_null(Course::Instructor, 255))
                    .col(double_null(Course::Rating))
                    .col(integer_null(Course::StudentsEnrolled))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Course::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
    Name,
    Description,
    Duration,
    Level,
    Category,
    Price,
    Prerequisites,
    Features,
    Instructor,
    Rating,
    StudentsEnrolled,
}
