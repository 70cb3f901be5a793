//! Local mirror of the server's todo list.
//!
//! `TodoBoard` is a plain reducer: server events go in through
//! [`TodoBoard::apply`], the view reads the result. The elapsed-time cache
//! only feeds the display and is refreshed by [`TodoBoard::tick`]; the
//! persisted timer fields always come from the server.

use std::collections::HashMap;

use crate::shared::{elapsed_seconds, ServerEvent, TimerStarted, TimerStopped, Todo};

/// Which timer controls a row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControls {
    /// Completed todo, saved time shown only when non-zero
    Completed { saved: Option<u64> },
    /// Live total plus Stop
    Running { total: u64 },
    /// Saved time plus Resume and Start New
    Paused { saved: u64 },
    /// Start only
    Idle,
}

#[derive(Debug, Clone, Default)]
pub struct TodoBoard {
    todos: Vec<Todo>,
    elapsed: HashMap<String, u64>,
}

impl TodoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos in server order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Whether any timer is running, i.e. the view needs a redraw every second
    pub fn has_running(&self) -> bool {
        self.todos.iter().any(Todo::is_running)
    }

    /// Apply one server event to the mirror
    pub fn apply(&mut self, event: ServerEvent, now_ms: i64) {
        match event {
            ServerEvent::TodosList(todos) => {
                self.todos = todos;
                self.elapsed.clear();
                self.tick(now_ms);
            }
            ServerEvent::TodoAdded(todo) => {
                // A relayed add can arrive for a record we already hold
                self.refresh_elapsed(&todo, now_ms);
                match self.position(&todo.id) {
                    Some(index) => self.todos[index] = todo,
                    None => self.todos.push(todo),
                }
            }
            ServerEvent::TodoUpdated(todo) => {
                if let Some(index) = self.position(&todo.id) {
                    self.refresh_elapsed(&todo, now_ms);
                    self.todos[index] = todo;
                }
            }
            ServerEvent::TodoDeleted(id) => {
                self.todos.retain(|todo| todo.id != id);
                self.elapsed.remove(&id);
            }
            ServerEvent::TimerStarted(TimerStarted { id, start_time }) => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.timer_started = true;
                    todo.timer_start_time = Some(start_time);
                    self.elapsed.insert(id, elapsed_seconds(start_time, now_ms));
                }
            }
            ServerEvent::TimerStopped(TimerStopped { id, saved_time }) => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.timer_started = false;
                    todo.timer_start_time = None;
                    todo.saved_time = saved_time;
                }
                self.elapsed.remove(&id);
            }
        }
    }

    /// Show a fresh run immediately, ahead of the server's `timer-started`
    pub fn begin_start(&mut self, id: &str, now_ms: i64) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.start_timer(now_ms);
            self.elapsed.insert(id.to_string(), 0);
        }
    }

    /// Recompute the elapsed-time cache for every running todo
    pub fn tick(&mut self, now_ms: i64) {
        for todo in &self.todos {
            if let Some(start) = todo.timer_start_time.filter(|_| todo.timer_started) {
                self.elapsed.insert(todo.id.clone(), elapsed_seconds(start, now_ms));
            }
        }
    }

    /// Cached seconds of the current run
    pub fn elapsed(&self, id: &str) -> u64 {
        self.elapsed.get(id).copied().unwrap_or(0)
    }

    /// Saved time plus the cached current run while running
    pub fn total_seconds(&self, todo: &Todo) -> u64 {
        if todo.is_running() {
            todo.saved_time.saturating_add(self.elapsed(&todo.id))
        } else {
            todo.saved_time
        }
    }

    pub fn controls_for(&self, todo: &Todo) -> TimerControls {
        if todo.completed {
            TimerControls::Completed {
                saved: (todo.saved_time > 0).then_some(todo.saved_time),
            }
        } else if todo.is_running() {
            TimerControls::Running {
                total: self.total_seconds(todo),
            }
        } else if todo.saved_time > 0 {
            TimerControls::Paused { saved: todo.saved_time }
        } else {
            TimerControls::Idle
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    fn refresh_elapsed(&mut self, todo: &Todo, now_ms: i64) {
        match todo.timer_start_time.filter(|_| todo.timer_started) {
            Some(start) => {
                self.elapsed.insert(todo.id.clone(), elapsed_seconds(start, now_ms));
            }
            None => {
                self.elapsed.remove(&todo.id);
            }
        }
    }
}
