pub mod sqlite_calendar_repo;
pub mod sqlite_comment_repo;
pub mod sqlite_member_repo;
pub mod sqlite_project_repo;
pub mod sqlite_task_repo;
pub mod sqlite_user_repo;

pub mod postgres_calendar_repo;
pub mod postgres_comment_repo;
pub mod postgres_member_repo;
pub mod postgres_project_repo;
pub mod postgres_task_repo;
pub mod postgres_user_repo;
