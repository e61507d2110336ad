//! Authorization decisions for every resource type, defined in one place so
//! the rules are testable without a transport. Handlers fetch the resource
//! snapshot (and the member set where relevant), then ask for a decision.
//!
//! A denial is always a distinguishable outcome, never an empty result:
//! callers keep "resource missing" (NotFound) separate from "exists but
//! access denied" (Forbidden).

use crate::domain::models::{calendar_event::CalendarEvent, project::Project, task::Task, user::User};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAProjectMember,
    NotProjectCreator,
    NoTaskAccess,
    NotEventOwner,
    NotSelfOrAdmin,
}

impl DenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::NotAProjectMember => "You are not a member of this project",
            DenyReason::NotProjectCreator => "Only the project creator may do this",
            DenyReason::NoTaskAccess => "You do not have access to this task",
            DenyReason::NotEventOwner => "You do not own this calendar event",
            DenyReason::NotSelfOrAdmin => "You may only update your own profile",
        }
    }
}

impl Decision {
    /// Maps a denial to `AppError::Forbidden` for handler use.
    pub fn require(self) -> Result<(), AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(AppError::Forbidden(reason.message().to_string())),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

fn allow_if(condition: bool, reason: DenyReason) -> Decision {
    if condition {
        Decision::Allow
    } else {
        Decision::Deny(reason)
    }
}

/// Project read (fields, member list, bound tasks): members only.
pub fn read_project(principal_id: &str, member_ids: &[String]) -> Decision {
    allow_if(
        member_ids.iter().any(|id| id == principal_id),
        DenyReason::NotAProjectMember,
    )
}

/// Project field updates: creator only. One policy for every mutation of
/// the project itself, including membership changes.
pub fn update_project(principal_id: &str, project: &Project) -> Decision {
    allow_if(
        project.created_by == principal_id,
        DenyReason::NotProjectCreator,
    )
}

/// Membership add/remove: creator only, same policy as field updates.
pub fn manage_members(principal_id: &str, project: &Project) -> Decision {
    allow_if(
        project.created_by == principal_id,
        DenyReason::NotProjectCreator,
    )
}

/// Unbound tasks may be created by anyone authenticated; project-bound tasks
/// only by members of that project.
pub fn create_task(principal_id: &str, project_member_ids: Option<&[String]>) -> Decision {
    match project_member_ids {
        None => Decision::Allow,
        Some(members) => allow_if(
            members.iter().any(|id| id == principal_id),
            DenyReason::NotAProjectMember,
        ),
    }
}

/// Task read, update and commenting share one predicate: creator, assignee,
/// or member of the bound project.
pub fn access_task(principal_id: &str, task: &Task, project_member_ids: Option<&[String]>) -> Decision {
    if task.creator_id == principal_id {
        return Decision::Allow;
    }
    if task.assignee_id.as_deref() == Some(principal_id) {
        return Decision::Allow;
    }
    if let Some(members) = project_member_ids {
        if members.iter().any(|id| id == principal_id) {
            return Decision::Allow;
        }
    }
    Decision::Deny(DenyReason::NoTaskAccess)
}

/// Calendar events are exclusively owned. No admin override.
pub fn access_event(principal_id: &str, event: &CalendarEvent) -> Decision {
    allow_if(event.owner_id == principal_id, DenyReason::NotEventOwner)
}

/// Profile updates: the user themselves, or an admin.
pub fn update_user(actor: &User, target_user_id: &str) -> Decision {
    allow_if(
        actor.id == target_user_id || actor.is_admin,
        DenyReason::NotSelfOrAdmin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::calendar_event::CalendarEvent;
    use crate::domain::models::project::Project;
    use crate::domain::models::task::Task;
    use crate::domain::models::user::User;

    fn project(created_by: &str) -> Project {
        Project::new("P1".into(), None, None, None, None, created_by.into())
    }

    fn task(creator: &str, assignee: Option<&str>, project_id: Option<&str>) -> Task {
        Task::new(
            "T1".into(),
            None,
            None,
            None,
            project_id.map(String::from),
            creator.into(),
            assignee.map(String::from),
            None,
        )
    }

    fn members(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn project_read_requires_membership() {
        let m = members(&["alice", "bob"]);
        assert!(read_project("alice", &m).is_allowed());
        assert_eq!(
            read_project("mallory", &m),
            Decision::Deny(DenyReason::NotAProjectMember)
        );
    }

    #[test]
    fn project_update_is_creator_only() {
        let p = project("alice");
        assert!(update_project("alice", &p).is_allowed());
        assert_eq!(
            update_project("bob", &p),
            Decision::Deny(DenyReason::NotProjectCreator)
        );
        // Same policy gates membership changes.
        assert!(manage_members("alice", &p).is_allowed());
        assert!(!manage_members("bob", &p).is_allowed());
    }

    #[test]
    fn unbound_task_creation_is_open() {
        assert!(create_task("anyone", None).is_allowed());
    }

    #[test]
    fn bound_task_creation_requires_membership() {
        let m = members(&["alice"]);
        assert!(create_task("alice", Some(&m)).is_allowed());
        assert_eq!(
            create_task("bob", Some(&m)),
            Decision::Deny(DenyReason::NotAProjectMember)
        );
    }

    #[test]
    fn task_access_for_creator_and_assignee() {
        let t = task("alice", Some("bob"), None);
        assert!(access_task("alice", &t, None).is_allowed());
        assert!(access_task("bob", &t, None).is_allowed());
        assert_eq!(
            access_task("mallory", &t, None),
            Decision::Deny(DenyReason::NoTaskAccess)
        );
    }

    #[test]
    fn bound_task_access_extends_to_project_members() {
        let t = task("alice", None, Some("p1"));
        let m = members(&["alice", "carol"]);
        assert!(access_task("carol", &t, Some(&m)).is_allowed());
        assert!(!access_task("mallory", &t, Some(&m)).is_allowed());
    }

    #[test]
    fn event_access_is_owner_exclusive() {
        let event = CalendarEvent::new(
            "alice".into(),
            "standup".into(),
            None,
            chrono::Utc::now(),
            None,
            None,
            None,
            None,
        );
        assert!(access_event("alice", &event).is_allowed());
        // Admins and project members get no exception.
        assert_eq!(
            access_event("admin", &event),
            Decision::Deny(DenyReason::NotEventOwner)
        );
    }

    #[test]
    fn profile_update_self_or_admin() {
        let mut actor = User::new("A".into(), "a@x.com".into(), "hash".into());
        assert!(update_user(&actor, &actor.id.clone()).is_allowed());
        assert!(!update_user(&actor, "someone-else").is_allowed());

        actor.is_admin = true;
        assert!(update_user(&actor, "someone-else").is_allowed());
    }

    #[test]
    fn denial_maps_to_forbidden() {
        let err = Decision::Deny(DenyReason::NotAProjectMember).require().unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert!(Decision::Allow.require().is_ok());
    }
}
