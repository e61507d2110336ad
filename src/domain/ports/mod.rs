use crate::domain::models::{
    calendar_event::CalendarEvent,
    project::{Project, ProjectMember},
    task::{Task, TaskComment},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: &Project) -> Result<Project, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;
    async fn update(&self, project: &Project) -> Result<Project, AppError>;
    async fn list_by_member(&self, user_id: &str) -> Result<Vec<Project>, AppError>;
}

#[async_trait]
pub trait ProjectMemberRepository: Send + Sync {
    async fn add(&self, member: &ProjectMember) -> Result<ProjectMember, AppError>;
    async fn find(&self, project_id: &str, user_id: &str) -> Result<Option<ProjectMember>, AppError>;
    async fn list_user_ids(&self, project_id: &str) -> Result<Vec<String>, AppError>;
    async fn remove(&self, project_id: &str, user_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: &Task) -> Result<Task, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError>;
    async fn update(&self, task: &Task) -> Result<Task, AppError>;
    async fn list_by_project(&self, project_id: &str) -> Result<Vec<Task>, AppError>;
    /// Tasks the user created or is assigned to.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, AppError>;
    async fn list_by_assignee(&self, user_id: &str) -> Result<Vec<Task>, AppError>;
}

#[async_trait]
pub trait TaskCommentRepository: Send + Sync {
    async fn create(&self, comment: &TaskComment) -> Result<TaskComment, AppError>;
    async fn list_by_task(&self, task_id: &str) -> Result<Vec<TaskComment>, AppError>;
}

#[async_trait]
pub trait CalendarEventRepository: Send + Sync {
    async fn create(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<CalendarEvent>, AppError>;
    async fn update(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError>;
    /// Owner-scoped listing; both range bounds are optional and apply
    /// independently (`start_at >= from`, `end_at <= to`). An upper-bounded
    /// query only matches events that carry an end time.
    async fn list_by_owner(
        &self,
        owner_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<CalendarEvent>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
