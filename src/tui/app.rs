use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, TaskList, WindowConfig};
use crate::ops::task_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// A modal text prompt owns all input until it resolves
    Prompt,
}

/// The four command buttons, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit,
    Delete,
    Complete,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Add,
        Command::Edit,
        Command::Delete,
        Command::Complete,
    ];

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Command::Add => "Add New Task",
            Command::Edit => "Edit Task",
            Command::Delete => "Delete Task",
            Command::Complete => "Complete Task",
        }
    }
}

/// What a prompt's answer will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Add,
    /// Index captured when the prompt opened
    Edit { index: usize },
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Add => "Add New Task",
            PromptKind::Edit { .. } => "Edit Task",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Add => "Enter task description:",
            PromptKind::Edit { .. } => "Enter new task description:",
        }
    }
}

/// State of the open text prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary
    pub cursor: usize,
}

impl PromptState {
    pub fn new(kind: PromptKind, initial: &str) -> Self {
        PromptState {
            kind,
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }
}

/// Screen regions from the last render, used for mouse hit-testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Rows of the task list (inside its border)
    pub list: Rect,
    pub buttons: Vec<(Command, Rect)>,
}

/// Main application state: owns the task list and all view state
pub struct App {
    pub tasks: TaskList,
    pub window: WindowConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Selected row, an index into `tasks`
    pub selected: Option<usize>,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Index into `Command::ALL` of the button with keyboard focus
    pub focused_button: usize,
    pub prompt: Option<PromptState>,
    pub hit_areas: HitAreas,
}

impl App {
    pub fn new(tasks: TaskList, config: &AppConfig) -> Self {
        App {
            tasks,
            window: config.window.clone(),
            theme: Theme::from_config(&config.ui),
            mode: Mode::Navigate,
            should_quit: false,
            selected: None,
            scroll_offset: 0,
            focused_button: 0,
            prompt: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// Display strings for the list view, in order
    pub fn rows(&self) -> Vec<String> {
        task_ops::display_lines(&self.tasks)
    }

    /// The selection, if it still points at a task
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.filter(|&i| i < self.tasks.len())
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Run a button's command
    pub fn press(&mut self, command: Command) {
        if self.mode == Mode::Prompt {
            return;
        }
        match command {
            Command::Add => self.open_prompt(PromptKind::Add, ""),
            Command::Edit => {
                let Some(index) = self.selected_index() else {
                    tracing::debug!("edit ignored: nothing selected");
                    return;
                };
                let current = self.tasks[index].description.clone();
                self.open_prompt(PromptKind::Edit { index }, &current);
            }
            Command::Delete => {
                let Some(index) = self.selected_index() else {
                    tracing::debug!("delete ignored: nothing selected");
                    return;
                };
                match task_ops::delete_task(&mut self.tasks, index) {
                    Ok(task) => {
                        tracing::info!(index, description = %task.description, "deleted task");
                        self.selected = None;
                    }
                    Err(e) => tracing::debug!(error = %e, "delete ignored"),
                }
            }
            Command::Complete => {
                let Some(index) = self.selected_index() else {
                    tracing::debug!("complete ignored: nothing selected");
                    return;
                };
                match task_ops::toggle_complete(&mut self.tasks, index) {
                    Ok(complete) => tracing::info!(index, complete, "toggled task"),
                    Err(e) => tracing::debug!(error = %e, "complete ignored"),
                }
            }
        }
    }

    fn open_prompt(&mut self, kind: PromptKind, initial: &str) {
        self.prompt = Some(PromptState::new(kind, initial));
        self.mode = Mode::Prompt;
    }

    /// Close the prompt with the user's answer (`None` when cancelled) and
    /// apply it to the command that opened the prompt.
    pub fn resolve_prompt(&mut self, answer: Option<String>) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        self.mode = Mode::Navigate;

        let Some(text) = answer else {
            tracing::debug!(kind = ?prompt.kind, "prompt cancelled");
            return;
        };

        let result = match prompt.kind {
            PromptKind::Add => task_ops::add_task(&mut self.tasks, &text).map(|index| {
                tracing::info!(index, description = %text, "added task");
            }),
            PromptKind::Edit { index } => {
                task_ops::edit_task(&mut self.tasks, index, &text).map(|()| {
                    tracing::info!(index, description = %text, "edited task");
                })
            }
        };
        if let Err(e) = result {
            tracing::debug!(kind = ?prompt.kind, error = %e, "prompt answer ignored");
        }
    }

    // -----------------------------------------------------------------------
    // Selection and focus
    // -----------------------------------------------------------------------

    /// Select a row; out-of-range indices leave the selection alone
    pub fn select(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.selected = Some(index);
        }
    }

    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let last = self.tasks.len() - 1;
        self.selected = Some(match self.selected_index() {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        self.selected = Some(match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => self.tasks.len() - 1,
        });
    }

    pub fn select_first(&mut self) {
        if !self.tasks.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.tasks.is_empty() {
            self.selected = Some(self.tasks.len() - 1);
        }
    }

    /// Move button focus by `delta`, wrapping around
    pub fn cycle_focus(&mut self, delta: isize) {
        let n = Command::ALL.len() as isize;
        self.focused_button = (self.focused_button as isize + delta).rem_euclid(n) as usize;
    }

    pub fn focused_command(&self) -> Command {
        Command::ALL[self.focused_button % Command::ALL.len()]
    }

    /// Adjust `scroll_offset` so the selection is inside a `height`-row viewport
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            self.scroll_offset = 0;
            return;
        }
        if let Some(sel) = self.selected_index() {
            if sel < self.scroll_offset {
                self.scroll_offset = sel;
            } else if sel >= self.scroll_offset + height {
                self.scroll_offset = sel + 1 - height;
            }
        }
        let max_offset = self.tasks.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

/// Build the startup task list, skipping entries the store rejects
pub fn seed_tasks(descriptions: &[String]) -> TaskList {
    let mut tasks = TaskList::new();
    for description in descriptions {
        if let Err(e) = task_ops::add_task(&mut tasks, description) {
            tracing::warn!(error = %e, "skipping initial task");
        }
    }
    tasks
}

/// Run the TUI application
pub fn run(config: &AppConfig, seed: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = if seed {
        seed_tasks(&config.tasks.initial)
    } else {
        TaskList::new()
    };
    let mut app = App::new(tasks, config);
    tracing::info!(tasks = app.tasks.len(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(tasks = app.tasks.len(), "window closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
