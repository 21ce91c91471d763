//! Sample data loaded into empty stores at startup.
//!
//! Each store is checked independently; a non-empty store is left alone.
//! Not safe against two processes seeding the same database concurrently.

use tracing::info;

use crate::admin::domain::{Message, Student};
use crate::admin::repository::Repository;
use crate::errors::ServiceError;

/// Row counts after seeding; `None` means the store already had data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub students: Option<u64>,
    pub messages: Option<u64>,
}

pub fn sample_students() -> Vec<Student> {
    [
        ("Alice Johnson", "alice.johnson@email.com"),
        ("Bob Smith", "bob.smith@email.com"),
        ("Carol Davis", "carol.davis@email.com"),
        ("David Wilson", "david.wilson@email.com"),
        ("Emma Brown", "emma.brown@email.com"),
        ("Frank Miller", "frank.miller@email.com"),
        ("Grace Lee", "grace.lee@email.com"),
        ("Henry Taylor", "henry.taylor@email.com"),
    ]
    .into_iter()
    .map(|(name, email)| Student::new(name, email))
    .collect()
}

pub fn sample_messages() -> Vec<Message> {
    [
        (
            "Alice Johnson",
            "alice.johnson@email.com",
            "Hello! I'm interested in enrolling in the Advanced JavaScript course. Could you please provide more information about the prerequisites and schedule?",
        ),
        (
            "Bob Smith",
            "bob.smith@email.com",
            "I'm having trouble accessing the course materials. Could someone help me with the login process?",
        ),
        (
            "Carol Davis",
            "carol.davis@email.com",
            "Thank you for the excellent Spring Boot course! The content was very comprehensive and well-structured. I would love to see more advanced topics covered.",
        ),
        (
            "David Wilson",
            "david.wilson@email.com",
            "Is there a mobile app available for accessing course content? It would be great to study on the go.",
        ),
        (
            "Emma Brown",
            "emma.brown@email.com",
            "I'm interested in the upcoming React course. When will registration open and what are the fees?",
        ),
    ]
    .into_iter()
    .map(|(sender, email, content)| Message::new(sender, email, content))
    .collect()
}

async fn seed_one<T: Send + 'static>(
    repo: &dyn Repository<T>,
    rows: Vec<T>,
    what: &str,
) -> Result<Option<u64>, ServiceError> {
    if repo.count().await? > 0 {
        return Ok(None);
    }
    for row in rows {
        repo.save(row).await?;
    }
    let count = repo.count().await?;
    info!(count, entity = what, "initialized sample data");
    Ok(Some(count))
}

/// Seed students and messages when their stores are empty.
pub async fn seed_if_empty(
    students: &dyn Repository<Student>,
    messages: &dyn Repository<Message>,
) -> Result<SeedReport, ServiceError> {
    Ok(SeedReport {
        students: seed_one(students, sample_students(), "student").await?,
        messages: seed_one(messages, sample_messages(), "message").await?,
    })
}
