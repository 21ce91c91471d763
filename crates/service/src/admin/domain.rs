use serde::{Deserialize, Serialize};

use models::{course, message, validation};

/// Records with a store-assigned identity.
pub trait Identified {
    fn id(&self) -> Option<i64>;
    fn with_id(self, id: i64) -> Self;
}

/// Course as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub prerequisites: Option<String>,
    pub features: Option<String>,
    pub instructor: Option<String>,
    pub rating: Option<f64>,
    pub students_enrolled: Option<i32>,
}

impl Course {
    /// Unsaved course with only name and description set.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            duration: None,
            level: None,
            category: None,
            price: None,
            prerequisites: None,
            features: None,
            instructor: None,
            rating: None,
            students_enrolled: None,
        }
    }
}

impl Identified for Course {
    fn id(&self) -> Option<i64> { self.id }
    fn with_id(self, id: i64) -> Self { Self { id: Some(id), ..self } }
}

/// Request body for course create and update. Every field is optional so the
/// same shape serves as a creation payload and as a partial patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub prerequisites: Option<String>,
    pub features: Option<String>,
    pub instructor: Option<String>,
    pub rating: Option<f64>,
    pub students_enrolled: Option<i32>,
}

impl CourseInput {
    /// Validate and convert into an unsaved course.
    pub fn into_new_course(self) -> Result<Course, models::errors::ModelError> {
        course::validate_name(self.name.as_deref())?;
        Ok(Course {
            id: None,
            name: self.name.unwrap_or_default(),
            description: self.description,
            duration: self.duration,
            level: self.level,
            category: self.category,
            price: self.price,
            prerequisites: self.prerequisites,
            features: self.features,
            instructor: self.instructor,
            rating: self.rating,
            students_enrolled: self.students_enrolled,
        })
    }
}

fn merge_text(current: Option<String>, patch: Option<String>) -> Option<String> {
    if validation::is_supplied(patch.as_deref()) { patch } else { current }
}

/// Apply a partial update. Text fields are overwritten only by present,
/// non-blank values; numeric fields only by present values. `id` is kept.
pub fn merge(existing: Course, patch: CourseInput) -> Course {
    let name = match patch.name {
        Some(n) if validation::is_supplied(Some(n.as_str())) => n,
        _ => existing.name,
    };
    Course {
        id: existing.id,
        name,
        description: merge_text(existing.description, patch.description),
        duration: merge_text(existing.duration, patch.duration),
        level: merge_text(existing.level, patch.level),
        category: merge_text(existing.category, patch.category),
        price: patch.price.or(existing.price),
        prerequisites: merge_text(existing.prerequisites, patch.prerequisites),
        features: merge_text(existing.features, patch.features),
        instructor: merge_text(existing.instructor, patch.instructor),
        rating: patch.rating.or(existing.rating),
        students_enrolled: patch.students_enrolled.or(existing.students_enrolled),
    }
}

/// Student (read-only through the API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), email: email.into() }
    }
}

impl Identified for Student {
    fn id(&self) -> Option<i64> { self.id }
    fn with_id(self, id: i64) -> Self { Self { id: Some(id), ..self } }
}

/// Contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Option<i64>,
    pub sender_name: String,
    pub email: String,
    pub content: String,
}

impl Message {
    pub fn new(sender_name: impl Into<String>, email: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: None, sender_name: sender_name.into(), email: email.into(), content: content.into() }
    }
}

impl Identified for Message {
    fn id(&self) -> Option<i64> { self.id }
    fn with_id(self, id: i64) -> Self { Self { id: Some(id), ..self } }
}

/// Request body for message submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageInput {
    pub sender_name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

impl MessageInput {
    pub fn into_new_message(self) -> Result<Message, models::errors::ModelError> {
        let valid = message::validate(self.sender_name.as_deref(), self.email.as_deref(), self.content.as_deref())?;
        Ok(Message::new(valid.sender_name, valid.email, valid.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_course() -> Course {
        Course {
            id: Some(1),
            name: "Java Programming".into(),
            description: Some("Learn Java fundamentals".into()),
            duration: Some("8 weeks".into()),
            level: Some("Beginner".into()),
            category: Some("Programming".into()),
            price: Some(99.0),
            prerequisites: None,
            features: None,
            instructor: Some("Dr. Smith".into()),
            rating: Some(4.2),
            students_enrolled: Some(10),
        }
    }

    #[test]
    fn merge_description_only_keeps_name() {
        let patch = CourseInput { description: Some("New description".into()), ..Default::default() };
        let merged = merge(stored_course(), patch);
        assert_eq!(merged.name, "Java Programming");
        assert_eq!(merged.description.as_deref(), Some("New description"));
        assert_eq!(merged.level.as_deref(), Some("Beginner"));
        assert_eq!(merged.id, Some(1));
    }

    #[test]
    fn merge_ignores_blank_values() {
        let patch = CourseInput {
            name: Some("   ".into()),
            instructor: Some("".into()),
            ..Default::default()
        };
        let merged = merge(stored_course(), patch);
        assert_eq!(merged, stored_course());
    }

    #[test]
    fn merge_overwrites_numbers_when_present() {
        let patch = CourseInput { price: Some(0.0), students_enrolled: Some(42), ..Default::default() };
        let merged = merge(stored_course(), patch);
        assert_eq!(merged.price, Some(0.0));
        assert_eq!(merged.students_enrolled, Some(42));
        assert_eq!(merged.rating, Some(4.2));
    }

    #[test]
    fn empty_patch_is_identity() {
        assert_eq!(merge(stored_course(), CourseInput::default()), stored_course());
    }

    #[test]
    fn course_input_requires_name() {
        assert!(CourseInput::default().into_new_course().is_err());
        let blank = CourseInput { name: Some(" \t".into()), ..Default::default() };
        assert!(blank.into_new_course().is_err());
        let ok = CourseInput { name: Some("Rust".into()), level: Some("Advanced".into()), ..Default::default() }
            .into_new_course()
            .unwrap();
        assert_eq!(ok.id, None);
        assert_eq!(ok.level.as_deref(), Some("Advanced"));
    }

    #[test]
    fn course_json_is_camel_case_with_nulls() {
        let c = Course::new("Java Programming", Some("Learn Java fundamentals".into())).with_id(3);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["name"], "Java Programming");
        assert!(v["studentsEnrolled"].is_null());
        assert!(v.get("students_enrolled").is_none());
    }

    #[test]
    fn course_input_accepts_partial_camel_case_body() {
        let input: CourseInput = serde_json::from_str(r#"{"studentsEnrolled": 5, "id": 99}"#).unwrap();
        assert_eq!(input.students_enrolled, Some(5));
        assert_eq!(input.name, None);
    }

    #[test]
    fn message_input_validation() {
        let input: MessageInput = serde_json::from_str(r#"{"senderName":"Alice","email":"alice@example.com","content":"Hi"}"#).unwrap();
        let m = input.into_new_message().unwrap();
        assert_eq!(m.sender_name, "Alice");
        assert_eq!(m.id, None);

        let missing: MessageInput = serde_json::from_str(r#"{"senderName":"Alice","content":"Hi"}"#).unwrap();
        assert!(missing.into_new_message().is_err());
    }
}
