//! Plain-text rendering of the task list.

use std::fmt::Write;

use entities::Task;

/// Renders one task as a checkbox line, with the description indented below.
pub fn render_task(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    let mut out = format!("[{mark}] {}  ({})", task.title, task.id);
    if !task.description.is_empty() {
        let _ = write!(out, "\n      {}", task.description);
    }
    out
}

/// Renders the whole list followed by a summary line.
pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet.".to_string();
    }

    let done = tasks.iter().filter(|t| t.completed).count();
    let mut out = String::new();
    for task in tasks {
        out.push_str(&render_task(task));
        out.push('\n');
    }
    let _ = write!(out, "{done}/{} completed", tasks.len());
    out
}
