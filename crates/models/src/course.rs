use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub duration: Option<String>,
    /// Beginner / Intermediate / Advanced, stored as free text.
    pub level: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub prerequisites: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub features: Option<String>,
    pub instructor: Option<String>,
    pub rating: Option<f64>,
    pub students_enrolled: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Course names must be present and non-blank.
pub fn validate_name(name: Option<&str>) -> Result<&str, errors::ModelError> {
    validation::require_text("name", name)
}
