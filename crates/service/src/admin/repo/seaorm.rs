use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use models::{course, message, student};

use crate::admin::domain::{Course, Message, Student};
use crate::admin::repository::Repository;
use crate::errors::ServiceError;

fn db_err(e: sea_orm::DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

fn id_value(id: Option<i64>) -> ActiveValue<i64> {
    match id {
        Some(id) => Set(id),
        None => ActiveValue::NotSet,
    }
}

impl From<course::Model> for Course {
    fn from(m: course::Model) -> Self {
        Course {
            id: Some(m.id),
            name: m.name,
            description: m.description,
            duration: m.duration,
            level: m.level,
            category: m.category,
            price: m.price,
            prerequisites: m.prerequisites,
            features: m.features,
            instructor: m.instructor,
            rating: m.rating,
            students_enrolled: m.students_enrolled,
        }
    }
}

impl From<Course> for course::ActiveModel {
    fn from(c: Course) -> Self {
        course::ActiveModel {
            id: id_value(c.id),
            name: Set(c.name),
            description: Set(c.description),
            duration: Set(c.duration),
            level: Set(c.level),
            category: Set(c.category),
            price: Set(c.price),
            prerequisites: Set(c.prerequisites),
            features: Set(c.features),
            instructor: Set(c.instructor),
            rating: Set(c.rating),
            students_enrolled: Set(c.students_enrolled),
        }
    }
}

impl From<student::Model> for Student {
    fn from(m: student::Model) -> Self { Student { id: Some(m.id), name: m.name, email: m.email } }
}

impl From<Student> for student::ActiveModel {
    fn from(s: Student) -> Self {
        student::ActiveModel { id: id_value(s.id), name: Set(s.name), email: Set(s.email) }
    }
}

impl From<message::Model> for Message {
    fn from(m: message::Model) -> Self {
        Message { id: Some(m.id), sender_name: m.sender_name, email: m.email, content: m.content }
    }
}

impl From<Message> for message::ActiveModel {
    fn from(m: Message) -> Self {
        message::ActiveModel {
            id: id_value(m.id),
            sender_name: Set(m.sender_name),
            email: Set(m.email),
            content: Set(m.content),
        }
    }
}

/// SeaORM-backed course repository.
pub struct SeaOrmCourseRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Course> for SeaOrmCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, ServiceError> {
        let rows = course::Entity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, ServiceError> {
        let res = course::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(res.map(Course::from))
    }

    async fn save(&self, record: Course) -> Result<Course, ServiceError> {
        let is_update = record.id.is_some();
        let am: course::ActiveModel = record.into();
        let saved = if is_update { am.update(&self.db).await } else { am.insert(&self.db).await };
        Ok(saved.map_err(db_err)?.into())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        course::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        course::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

/// SeaORM-backed student repository.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Student> for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError> {
        let res = student::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(res.map(Student::from))
    }

    async fn save(&self, record: Student) -> Result<Student, ServiceError> {
        let is_update = record.id.is_some();
        let am: student::ActiveModel = record.into();
        let saved = if is_update { am.update(&self.db).await } else { am.insert(&self.db).await };
        Ok(saved.map_err(db_err)?.into())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        student::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        student::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

/// SeaORM-backed message repository.
pub struct SeaOrmMessageRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Message> for SeaOrmMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>, ServiceError> {
        let rows = message::Entity::find()
            .order_by_asc(message::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        let res = message::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(res.map(Message::from))
    }

    async fn save(&self, record: Message) -> Result<Message, ServiceError> {
        let is_update = record.id.is_some();
        let am: message::ActiveModel = record.into();
        let saved = if is_update { am.update(&self.db).await } else { am.insert(&self.db).await };
        Ok(saved.map_err(db_err)?.into())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        message::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        message::Entity::find().count(&self.db).await.map_err(db_err)
    }
}
