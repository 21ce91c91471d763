//! Migrator registering one migration per entity table.
//! The three tables are independent; order only matters for readability.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_course;
mod m20240101_000002_create_student;
mod m20240101_000003_create_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_course::Migration),
            Box::new(m20240101_000002_create_student::Migration),
            Box::new(m20240101_000003_create_message::Migration),
        ]
    }
}
