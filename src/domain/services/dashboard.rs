//! Read-side aggregates for the dashboard view. Pure computation over rows
//! the handler already fetched; recomputed on every call, no caching.

use crate::domain::models::project::{Project, ProjectStatus};
use crate::domain::models::task::Task;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectCounts {
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub projects: ProjectCounts,
    pub tasks: TaskCounts,
    /// Tasks due inside the lookahead window and not yet done.
    pub upcoming: Vec<Task>,
}

pub fn build_summary(
    member_projects: &[Project],
    assigned_tasks: &[Task],
    today: NaiveDate,
    lookahead_days: i64,
) -> DashboardSummary {
    let horizon = today + chrono::Duration::days(lookahead_days);

    let active = member_projects
        .iter()
        .filter(|p| p.status == ProjectStatus::InProgress)
        .count();

    let completed = assigned_tasks
        .iter()
        .filter(|t| t.status.is_terminal())
        .count();

    let mut upcoming: Vec<Task> = assigned_tasks
        .iter()
        .filter(|t| !t.status.is_terminal())
        .filter(|t| {
            t.due_date
                .map(|due| due >= today && due <= horizon)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|t| t.due_date);

    DashboardSummary {
        projects: ProjectCounts {
            total: member_projects.len(),
            active,
        },
        tasks: TaskCounts {
            total: assigned_tasks.len(),
            completed,
        },
        upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::task::{TaskPriority, TaskStatus};

    fn project(status: ProjectStatus) -> Project {
        Project::new("p".into(), None, None, None, Some(status), "u1".into())
    }

    fn task(status: TaskStatus, due: Option<NaiveDate>) -> Task {
        Task::new(
            "t".into(),
            None,
            Some(status),
            Some(TaskPriority::Medium),
            None,
            "u1".into(),
            Some("u1".into()),
            due,
        )
    }

    #[test]
    fn counts_active_projects_and_completed_tasks() {
        let projects = vec![
            project(ProjectStatus::InProgress),
            project(ProjectStatus::Completed),
            project(ProjectStatus::OnHold),
        ];
        let tasks = vec![
            task(TaskStatus::Done, None),
            task(TaskStatus::Todo, None),
        ];

        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let summary = build_summary(&projects, &tasks, today, 7);

        assert_eq!(summary.projects.total, 3);
        assert_eq!(summary.projects.active, 1);
        assert_eq!(summary.tasks.total, 2);
        assert_eq!(summary.tasks.completed, 1);
    }

    #[test]
    fn upcoming_window_excludes_done_and_out_of_range() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let in_window = today + chrono::Duration::days(3);
        let past = today - chrono::Duration::days(1);
        let far = today + chrono::Duration::days(30);

        let tasks = vec![
            task(TaskStatus::Todo, Some(in_window)),
            task(TaskStatus::Done, Some(in_window)),
            task(TaskStatus::Todo, Some(past)),
            task(TaskStatus::Todo, Some(far)),
            task(TaskStatus::Todo, None),
        ];

        let summary = build_summary(&[], &tasks, today, 7);
        assert_eq!(summary.upcoming.len(), 1);
        assert_eq!(summary.upcoming[0].due_date, Some(in_window));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let tasks = vec![
            task(TaskStatus::Todo, Some(today)),
            task(TaskStatus::Todo, Some(today + chrono::Duration::days(7))),
            task(TaskStatus::Todo, Some(today + chrono::Duration::days(8))),
        ];

        let summary = build_summary(&[], &tasks, today, 7);
        assert_eq!(summary.upcoming.len(), 2);
    }
}
