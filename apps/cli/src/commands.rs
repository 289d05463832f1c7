//! User actions dispatched to the API.

use anyhow::Result;
use entities::{NewTask, TaskPatch};
use task_client::TaskClient;
use tracing::info;

use crate::view::{render_task, render_tasks};

/// A single user action.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// List all tasks
    List,
    /// Show one task
    Show {
        /// Task ID
        id: String,
    },
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Flip a task between done and not done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Change a task's title or description
    Edit {
        /// Task ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description (pass "" to clear it)
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

/// Runs `command` and returns the text to show the user.
///
/// Every mutation is followed by a fresh list so the output always reflects
/// the server's state.
pub async fn run(client: &TaskClient, command: Command) -> Result<String> {
    match command {
        Command::List => {}
        Command::Show { id } => {
            let task = client.get_task_by_id(&id).await?;
            return Ok(render_task(&task));
        }
        Command::Add { title, description } => {
            if title.trim().is_empty() {
                return Ok("Nothing to add: title is empty.".to_string());
            }
            let new_task = NewTask {
                title: Some(title),
                description,
                completed: Some(false),
            };
            let task = client.create_task(&new_task).await?;
            info!(task_id = %task.id, "Task added");
        }
        Command::Toggle { id } => {
            let task = client.get_task_by_id(&id).await?;
            let task = client
                .update_task(&id, &TaskPatch::completed(!task.completed))
                .await?;
            info!(task_id = %task.id, completed = task.completed, "Task toggled");
        }
        Command::Edit {
            id,
            title,
            description,
        } => {
            let patch = TaskPatch {
                title,
                description,
                completed: None,
            };
            if patch.is_empty() {
                anyhow::bail!("Nothing to edit: pass --title and/or --description");
            }
            client.update_task(&id, &patch).await?;
            info!(task_id = %id, "Task edited");
        }
        Command::Delete { id } => {
            client.delete_task(&id).await?;
            info!(task_id = %id, "Task deleted");
        }
    }

    let tasks = client.get_all_tasks().await?;
    Ok(render_tasks(&tasks))
}
