use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use crate::admin::domain::{self, Course, CourseInput, Message, MessageInput, Student};
use crate::admin::repo::seaorm::{SeaOrmCourseRepository, SeaOrmMessageRepository, SeaOrmStudentRepository};
use crate::admin::repository::{memory::InMemoryRepository, Repository};
use crate::admin::seed::{self, SeedReport};
use crate::errors::ServiceError;

/// Application service for the admin API.
///
/// Plain lookups return `Option`; update and delete of a missing id fail with
/// `ServiceError::NotFound`. Create operations validate before any write.
#[derive(Clone)]
pub struct AdminService {
    courses: Arc<dyn Repository<Course>>,
    students: Arc<dyn Repository<Student>>,
    messages: Arc<dyn Repository<Message>>,
}

impl AdminService {
    pub fn new(
        courses: Arc<dyn Repository<Course>>,
        students: Arc<dyn Repository<Student>>,
        messages: Arc<dyn Repository<Message>>,
    ) -> Self {
        Self { courses, students, messages }
    }

    /// Service over fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Course>::new()),
            Arc::new(InMemoryRepository::<Student>::new()),
            Arc::new(InMemoryRepository::<Message>::new()),
        )
    }

    /// Service over the SeaORM repositories sharing one connection pool.
    pub fn with_seaorm(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCourseRepository { db: db.clone() }),
            Arc::new(SeaOrmStudentRepository { db: db.clone() }),
            Arc::new(SeaOrmMessageRepository { db }),
        )
    }

    // ---------------- Courses ----------------

    pub async fn list_courses(&self) -> Result<Vec<Course>, ServiceError> {
        self.courses.find_all().await
    }

    pub async fn get_course(&self, id: i64) -> Result<Option<Course>, ServiceError> {
        self.courses.find_by_id(id).await
    }

    /// Create a course. The name must be present and non-blank.
    ///
    /// # Examples
    /// ```
    /// use service::admin::{AdminService, domain::CourseInput};
    /// let svc = AdminService::in_memory();
    /// let input = CourseInput { name: Some("Java Programming".into()), description: Some("Learn Java fundamentals".into()), ..Default::default() };
    /// let course = tokio_test::block_on(svc.add_course(input)).unwrap();
    /// assert_eq!(course.id, Some(1));
    /// assert_eq!(course.name, "Java Programming");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn add_course(&self, input: CourseInput) -> Result<Course, ServiceError> {
        let course = input.into_new_course()?;
        let saved = self.courses.save(course).await?;
        info!(id = ?saved.id, name = %saved.name, "course_created");
        Ok(saved)
    }

    /// Merge the supplied fields into an existing course.
    #[instrument(skip(self, patch))]
    pub async fn update_course(&self, id: i64, patch: CourseInput) -> Result<Course, ServiceError> {
        let existing = self
            .courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("course", id))?;
        let merged = domain::merge(existing, patch);
        let saved = self.courses.save(merged).await?;
        info!(id, "course_updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_course(&self, id: i64) -> Result<(), ServiceError> {
        if !self.courses.exists_by_id(id).await? {
            return Err(ServiceError::not_found("course", id));
        }
        self.courses.delete_by_id(id).await?;
        info!(id, "course_deleted");
        Ok(())
    }

    // ---------------- Students ----------------

    pub async fn list_students(&self) -> Result<Vec<Student>, ServiceError> {
        self.students.find_all().await
    }

    pub async fn get_student(&self, id: i64) -> Result<Option<Student>, ServiceError> {
        self.students.find_by_id(id).await
    }

    // ---------------- Messages ----------------

    pub async fn list_messages(&self) -> Result<Vec<Message>, ServiceError> {
        self.messages.find_all().await
    }

    pub async fn get_message(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        self.messages.find_by_id(id).await
    }

    /// Store a contact message; sender name, email and content are required.
    #[instrument(skip(self, input))]
    pub async fn add_message(&self, input: MessageInput) -> Result<Message, ServiceError> {
        let message = input.into_new_message()?;
        let saved = self.messages.save(message).await?;
        info!(id = ?saved.id, email = %saved.email, "message_created");
        Ok(saved)
    }

    /// Fill empty student and message stores with sample data.
    pub async fn seed_sample_data(&self) -> Result<SeedReport, ServiceError> {
        seed::seed_if_empty(self.students.as_ref(), self.messages.as_ref()).await
    }
}
