use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::api::dtos::requests::UpdateProjectRequest;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum MemberRole {
    Owner,
    Manager,
    Member,
    Observer,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        name: String,
        description: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        status: Option<ProjectStatus>,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            start_date,
            end_date,
            status: status.unwrap_or(ProjectStatus::NotStarted),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, patch: UpdateProjectRequest) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

/// Association record: one row per (project, user) pair.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ProjectMember {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub role: MemberRole,
}

impl ProjectMember {
    pub fn new(project_id: String, user_id: String, role: MemberRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id,
            user_id,
            role,
        }
    }
}
