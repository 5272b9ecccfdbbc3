use crate::model::task::Task;
use crate::model::task_list::TaskList;

/// Error type for task operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task description is empty")]
    EmptyDescription,
    #[error("task index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Append a new open task. Returns its index.
pub fn add_task(list: &mut TaskList, description: &str) -> Result<usize, TaskError> {
    check_description(description)?;
    list.tasks.push(Task::new(description));
    Ok(list.tasks.len() - 1)
}

/// Replace the description of the task at `index`, leaving `complete` alone
pub fn edit_task(list: &mut TaskList, index: usize, description: &str) -> Result<(), TaskError> {
    check_description(description)?;
    let task = task_mut(list, index)?;
    task.description = description.to_string();
    Ok(())
}

/// Flip the completion flag. Returns the new value.
pub fn toggle_complete(list: &mut TaskList, index: usize) -> Result<bool, TaskError> {
    let task = task_mut(list, index)?;
    task.complete = !task.complete;
    Ok(task.complete)
}

/// Remove the task at `index`; later tasks shift down by one
pub fn delete_task(list: &mut TaskList, index: usize) -> Result<Task, TaskError> {
    check_index(list, index)?;
    Ok(list.tasks.remove(index))
}

/// Display strings for every task, in list order
pub fn display_lines(list: &TaskList) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn check_description(description: &str) -> Result<(), TaskError> {
    // Only the exact empty string is rejected; whitespace is kept verbatim
    if description.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    Ok(())
}

fn check_index(list: &TaskList, index: usize) -> Result<(), TaskError> {
    if index >= list.len() {
        return Err(TaskError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }
    Ok(())
}

fn task_mut(list: &mut TaskList, index: usize) -> Result<&mut Task, TaskError> {
    let len = list.len();
    list.tasks
        .get_mut(index)
        .ok_or(TaskError::IndexOutOfRange { index, len })
}
