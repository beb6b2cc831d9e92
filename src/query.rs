//! Task query pipeline: filter, sort, and group a task collection for
//! presentation.
//!
//! The pipeline is pure and stateless: it takes a snapshot of tasks plus a
//! filter and sort selector and produces an ordered, status-grouped view.
//! Selectors are closed enums, so an out-of-range filter or sort is
//! unrepresentable rather than a runtime error. The pipeline itself never
//! fails; empty input yields an empty view.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Task, TaskStatus};

/// Fixed presentation order for status groups, independent of enum
/// declaration order.
pub const STATUS_DISPLAY_ORDER: [TaskStatus; 4] = [
    TaskStatus::NotStarted,
    TaskStatus::InProgress,
    TaskStatus::Complete,
    TaskStatus::Cancelled,
];

/// Filter selector. `All` matches every task regardless of status, including
/// cancelled ones; the rest match tasks with exactly that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    NotStarted,
    InProgress,
    Complete,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::NotStarted => task.status == TaskStatus::NotStarted,
            TaskFilter::InProgress => task.status == TaskStatus::InProgress,
            TaskFilter::Complete => task.status == TaskStatus::Complete,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::NotStarted => "Not Started",
            TaskFilter::InProgress => "In Progress",
            TaskFilter::Complete => "Complete",
        }
    }
}

/// Sort selector.
///
/// Ties are broken by creation time, then id, so the order is deterministic
/// for any input multiset of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// By priority rank ascending (high before medium before low).
    Priority,
    /// By due time ascending; tasks without a due time sort last.
    DueTime,
}

impl TaskSort {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let primary = match self {
            TaskSort::Priority => a.priority.sort_order().cmp(&b.priority.sort_order()),
            TaskSort::DueTime => match (a.due_time, b.due_time) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        primary
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Tasks partitioned by status, preserving the order in which they were
/// inserted (i.e. the sort order of the filtered list).
#[derive(Debug, Default)]
pub struct GroupedTasks {
    groups: HashMap<TaskStatus, Vec<Task>>,
}

impl GroupedTasks {
    /// Tasks in the given group, in sorted order. Empty slice if the status
    /// has no tasks.
    pub fn get(&self, status: TaskStatus) -> &[Task] {
        self.groups.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over non-empty groups in display order. Empty groups are
    /// never yielded; consumers only ever see statuses that have tasks.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        STATUS_DISPLAY_ORDER
            .iter()
            .filter_map(|status| match self.groups.get(status) {
                Some(tasks) if !tasks.is_empty() => Some((*status, tasks.as_slice())),
                _ => None,
            })
    }

    /// Total number of tasks across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}

/// Apply the filter and sort selectors to a snapshot of tasks.
pub fn build_view(tasks: &[Task], filter: TaskFilter, sort: TaskSort) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    view.sort_by(|a, b| sort.compare(a, b));
    view
}

/// Partition an already filtered and sorted list by status, preserving order
/// within each group.
pub fn group_by_status(tasks: &[Task]) -> GroupedTasks {
    let mut groups: HashMap<TaskStatus, Vec<Task>> = HashMap::new();
    for task in tasks {
        groups.entry(task.status).or_default().push(task.clone());
    }
    GroupedTasks { groups }
}
