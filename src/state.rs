use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    CalendarEventRepository, ProjectMemberRepository, ProjectRepository,
    TaskCommentRepository, TaskRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub member_repo: Arc<dyn ProjectMemberRepository>,
    pub task_repo: Arc<dyn TaskRepository>,
    pub comment_repo: Arc<dyn TaskCommentRepository>,
    pub event_repo: Arc<dyn CalendarEventRepository>,
    pub auth_service: Arc<AuthService>,
}
