//! Core types for the StoreFlow task-management core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique task identifier.
pub type TaskId = Uuid;

/// Task priority. Carries a total order for sorting: high sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Rank used by the priority sort: high=0, medium=1, low=2.
    pub fn sort_order(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Task status. A free-form field, not a governed state machine: any status is
/// reachable from any other, including reopening a completed task from the
/// detail screen. Tightening this would be a product decision, not a bug fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Complete,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Complete => "complete",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "not_started" => Some(TaskStatus::NotStarted),
            "in_progress" => Some(TaskStatus::InProgress),
            "complete" => Some(TaskStatus::Complete),
            "cancelled" => Some(TaskStatus::Cancelled),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Complete",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

/// Workflow category a task relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    OrderFulfillment,
    Replenishment,
    TopStock,
    Expiration,
    Receiving,
    ShelfCapture,
    Inventory,
    Other,
}

impl FeatureType {
    pub fn display_name(&self) -> &'static str {
        match self {
            FeatureType::OrderFulfillment => "Order Fulfillment",
            FeatureType::Replenishment => "Replenishment",
            FeatureType::TopStock => "Top Stock",
            FeatureType::Expiration => "Expiration Management",
            FeatureType::Receiving => "Receiving",
            FeatureType::ShelfCapture => "Shelf Capture",
            FeatureType::Inventory => "Inventory",
            FeatureType::Other => "Other",
        }
    }
}

/// A unit of work assigned to a store associate.
///
/// `created_at` is set at creation and immutable; `status` and the assignment
/// metadata are the only fields the store ever mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub due_time: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub related_feature: Option<FeatureType>,
    pub status: TaskStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_by: Option<String>,
}

impl Task {
    /// Whether the task is past its due time. Derived on every read, never
    /// stored: a task with no due time is never overdue, and a completed task
    /// stops counting as overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_time {
            Some(due) => due < now && self.status != TaskStatus::Complete,
            None => false,
        }
    }

    /// Human-readable time remaining until the due time ("2h 15m", "45m",
    /// "Overdue"), or `None` if the task has no due time.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<String> {
        let due = self.due_time?;
        let minutes = (due - now).num_minutes();
        if minutes >= 60 {
            Some(format!("{}h {}m", minutes / 60, minutes % 60))
        } else if minutes > 0 {
            Some(format!("{}m", minutes))
        } else {
            Some("Overdue".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task_due_in(minutes: i64, status: TaskStatus) -> (Task, DateTime<Utc>) {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: "Restock Dairy Section".to_string(),
            description: None,
            priority: Priority::High,
            due_time: Some(now + Duration::minutes(minutes)),
            created_at: now - Duration::hours(1),
            related_feature: Some(FeatureType::Replenishment),
            status,
            assigned_to: None,
            completed_at: None,
            completed_by: None,
        };
        (task, now)
    }

    #[test]
    fn overdue_requires_past_due_time_and_incomplete_status() {
        let (task, now) = task_due_in(-5, TaskStatus::InProgress);
        assert!(task.is_overdue(now));

        let (task, now) = task_due_in(5, TaskStatus::InProgress);
        assert!(!task.is_overdue(now));

        // Completing the task clears the overdue flag.
        let (task, now) = task_due_in(-5, TaskStatus::Complete);
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn overdue_is_false_without_due_time() {
        let (mut task, now) = task_due_in(-5, TaskStatus::NotStarted);
        task.due_time = None;
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn time_remaining_formats() {
        let (task, now) = task_due_in(135, TaskStatus::NotStarted);
        assert_eq!(task.time_remaining(now).unwrap(), "2h 15m");

        let (task, now) = task_due_in(45, TaskStatus::NotStarted);
        assert_eq!(task.time_remaining(now).unwrap(), "45m");

        let (task, now) = task_due_in(-10, TaskStatus::NotStarted);
        assert_eq!(task.time_remaining(now).unwrap(), "Overdue");

        let (mut task, now) = task_due_in(45, TaskStatus::NotStarted);
        task.due_time = None;
        assert_eq!(task.time_remaining(now), None);
    }

    #[test]
    fn status_string_roundtrip() {
        for status in [
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Complete,
            TaskStatus::Cancelled,
        ] {
            assert_eq!(TaskStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_str("done"), None);
    }

    #[test]
    fn priority_sort_order() {
        assert!(Priority::High.sort_order() < Priority::Medium.sort_order());
        assert!(Priority::Medium.sort_order() < Priority::Low.sort_order());
    }
}
