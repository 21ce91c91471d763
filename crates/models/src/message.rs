use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

/// Column width of `message.content`.
pub const CONTENT_MAX_CHARS: usize = 2000;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sender_name: String,
    pub email: String,
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

/// Validated message fields, borrowed from the input.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidFields<'a> {
    pub sender_name: &'a str,
    pub email: &'a str,
    pub content: &'a str,
}

/// All three fields are required and non-blank; content must fit the column.
pub fn validate<'a>(
    sender_name: Option<&'a str>,
    email: Option<&'a str>,
    content: Option<&'a str>,
) -> Result<ValidFields<'a>, errors::ModelError> {
    let sender_name = validation::require_text("senderName", sender_name)?;
    let email = validation::require_text("email", email)?;
    let content = validation::require_text("content", content)?;
    validation::max_chars("content", content, CONTENT_MAX_CHARS)?;
    Ok(ValidFields { sender_name, email, content })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        assert!(validate(None, Some("a@b.c"), Some("hi")).is_err());
        assert!(validate(Some("Alice"), Some(" "), Some("hi")).is_err());
        assert!(validate(Some("Alice"), Some("a@b.c"), None).is_err());
        let ok = validate(Some("Alice"), Some("a@b.c"), Some("hi")).unwrap();
        assert_eq!(ok.sender_name, "Alice");
        assert_eq!(ok.content, "hi");
    }

    #[test]
    fn content_longer_than_column_is_rejected() {
        let long = "x".repeat(CONTENT_MAX_CHARS + 1);
        let err = validate(Some("Alice"), Some("a@b.c"), Some(&long)).unwrap_err();
        assert!(err.to_string().contains("at most 2000"));
        let exact = "x".repeat(CONTENT_MAX_CHARS);
        assert!(validate(Some("Alice"), Some("a@b.c"), Some(&exact)).is_ok());
    }
}
