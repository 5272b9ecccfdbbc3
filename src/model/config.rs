use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Shown in the window border
    #[serde(default = "default_title")]
    pub title: String,
    /// Label above the task list
    #[serde(default = "default_heading")]
    pub heading: String,
    /// Fixed window width in terminal cells
    #[serde(default = "default_width")]
    pub width: u16,
    /// Fixed window height in terminal cells
    #[serde(default = "default_height")]
    pub height: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: default_title(),
            heading: default_heading(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_title() -> String {
    "TODO Application".into()
}

fn default_heading() -> String {
    "To-Do Task List".into()
}

fn default_width() -> u16 {
    80
}

fn default_height() -> u16 {
    22
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Descriptions added at startup, in order. Empty strings are skipped.
    #[serde(default = "default_initial_tasks")]
    pub initial: Vec<String>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            initial: default_initial_tasks(),
        }
    }
}

fn default_initial_tasks() -> Vec<String> {
    vec![
        "Complete homework".into(),
        "Buy groceries".into(),
        "Exercise".into(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file; logging is off when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
