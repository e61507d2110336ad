use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::api::dtos::requests::UpdateTaskRequest;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// `done` is terminal: upcoming-deadline aggregation skips it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: Option<String>,
    pub creator_id: String,
    pub assignee_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: Option<String>,
        status: Option<TaskStatus>,
        priority: Option<TaskPriority>,
        project_id: Option<String>,
        creator_id: String,
        assignee_id: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status: status.unwrap_or(TaskStatus::Todo),
            priority: priority.unwrap_or(TaskPriority::Medium),
            project_id,
            creator_id,
            assignee_id,
            due_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, patch: UpdateTaskRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee_id) = patch.assignee_id {
            self.assignee_id = Some(assignee_id);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        self.updated_at = Utc::now();
    }
}

/// Append-only; visibility mirrors the parent task.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TaskComment {
    pub id: String,
    pub task_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl TaskComment {
    pub fn new(task_id: String, author_id: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            task_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}
