//! Output formatting for task views, in markdown and JSON.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::query::GroupedTasks;
use crate::types::{Priority, Task};

/// Output format for rendered task views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

/// Format a single task as markdown, detail-screen style.
pub fn format_task_markdown(task: &Task, now: DateTime<Utc>) -> String {
    let mut md = String::new();

    md.push_str(&format!("## Task: {}\n", task.title));
    md.push_str(&format!("- **id**: `{}`\n", task.id));
    md.push_str(&format!("- **status**: {}\n", task.status.display_name()));
    md.push_str(&format!(
        "- **priority**: {}\n",
        task.priority.display_name()
    ));

    if let Some(ref feature) = task.related_feature {
        md.push_str(&format!("- **feature**: {}\n", feature.display_name()));
    }

    if let Some(remaining) = task.time_remaining(now) {
        md.push_str(&format!("- **due**: {}\n", remaining));
    }

    if task.is_overdue(now) {
        md.push_str("- **overdue**: yes\n");
    }

    if let Some(ref assignee) = task.assigned_to {
        md.push_str(&format!("- **assigned to**: {}\n", assignee));
    }

    if let Some(ref desc) = task.description {
        md.push_str("\n### Description\n");
        md.push_str(desc);
        md.push('\n');
    }

    md
}

/// Format a grouped task view as markdown: one section per non-empty status
/// group, in display order, tasks in sort order within each section.
pub fn format_grouped_markdown(grouped: &GroupedTasks, now: DateTime<Utc>) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Tasks ({})\n\n", grouped.len()));

    for (status, tasks) in grouped.iter() {
        md.push_str(&format!("## {}\n\n", status.display_name()));
        for task in tasks {
            md.push_str(&format_task_short(task, now));
        }
        md.push('\n');
    }

    md
}

/// Format a task in short form for lists.
fn format_task_short(task: &Task, now: DateTime<Utc>) -> String {
    let priority_marker = match task.priority {
        Priority::High => "!!! ",
        Priority::Medium | Priority::Low => "",
    };

    let due = task
        .time_remaining(now)
        .map(|r| format!(" ({})", r))
        .unwrap_or_default();

    let overdue = if task.is_overdue(now) { " [OVERDUE]" } else { "" };

    let id = task.id.to_string();
    format!(
        "- {}{} `{}`{}{}\n",
        priority_marker,
        task.title,
        &id[..8],
        due,
        overdue,
    )
}

/// Render a grouped view as JSON: one entry per non-empty group, in display
/// order, with the full task records.
pub fn grouped_to_json(grouped: &GroupedTasks) -> Value {
    let groups: Vec<Value> = grouped
        .iter()
        .map(|(status, tasks)| {
            json!({
                "status": status.as_str(),
                "tasks": tasks,
            })
        })
        .collect();

    json!({
        "total": grouped.len(),
        "groups": groups,
    })
}
