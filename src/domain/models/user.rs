use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::api::dtos::requests::UpdateProfileRequest;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            position: None,
            department: None,
            phone: None,
            bio: None,
            avatar_url: None,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Merges a profile patch: only supplied fields change. Password and the
    /// admin flag are not reachable through profile updates.
    pub fn apply_profile(&mut self, patch: UpdateProfileRequest) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = Some(position);
        }
        if let Some(department) = patch.department {
            self.department = Some(department);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
    }
}
