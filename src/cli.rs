//! CLI command definitions and dispatch for the storeflow binary.
//!
//! The CLI is the thin driver around the library: it loads a task file
//! through the loader boundary, builds a store, and runs the query pipeline
//! or point lookups against it. Filter and sort selectors are closed value
//! enums at this boundary, so an unknown selector is rejected by clap before
//! it reaches the pipeline.

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

use crate::format::{self, OutputFormat};
use crate::loader;
use crate::query::{self, TaskFilter, TaskSort, STATUS_DISPLAY_ORDER};
use crate::store::TaskStore;

/// Filter selector as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterArg {
    #[default]
    All,
    NotStarted,
    InProgress,
    Complete,
}

impl From<FilterArg> for TaskFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => TaskFilter::All,
            FilterArg::NotStarted => TaskFilter::NotStarted,
            FilterArg::InProgress => TaskFilter::InProgress,
            FilterArg::Complete => TaskFilter::Complete,
        }
    }
}

/// Sort selector as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Priority,
    DueTime,
}

impl From<SortArg> for TaskSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Priority => TaskSort::Priority,
            SortArg::DueTime => TaskSort::DueTime,
        }
    }
}

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    #[default]
    Markdown,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// StoreFlow task-management CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task file (YAML or JSON)
    #[arg(short, long, global = true, default_value = "tasks.yaml")]
    pub tasks: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tasks, filtered, sorted, and grouped by status
    List {
        /// Filter by status
        #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Sort order
        #[arg(short, long, value_enum, default_value_t = SortArg::Priority)]
        sort: SortArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Markdown)]
        format: FormatArg,
    },

    /// Show a single task by id
    Show {
        /// Task id (UUID)
        id: Uuid,
    },

    /// Show task counts per status
    Counts,
}

/// Run a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    let tasks = loader::load_tasks(&cli.tasks)?;
    let store = TaskStore::with_tasks(tasks);
    let now = Utc::now();

    match cli.command {
        Command::List {
            filter,
            sort,
            format,
        } => {
            let view = query::build_view(&store.tasks(), filter.into(), sort.into());
            let grouped = query::group_by_status(&view);
            match format.into() {
                OutputFormat::Markdown => {
                    print!("{}", format::format_grouped_markdown(&grouped, now));
                }
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&format::grouped_to_json(&grouped))?
                    );
                }
            }
        }
        Command::Show { id } => {
            let task = store
                .get(id)
                .ok_or_else(|| anyhow!("task not found: {}", id))?;
            print!("{}", format::format_task_markdown(task, now));
        }
        Command::Counts => {
            for status in STATUS_DISPLAY_ORDER {
                println!("{}: {}", status.display_name(), store.count(status));
            }
        }
    }

    Ok(())
}
