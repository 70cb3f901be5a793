/**
 * Socket Event Protocol
 *
 * This module defines the named events exchanged over the WebSocket channel.
 * Every text frame carries one JSON envelope:
 *
 * ```json
 * {"event": "toggle-todo", "data": "6f1c…"}
 * {"event": "load-todos"}
 * {"event": "timer-started", "data": {"id": "6f1c…", "startTime": 1700000000000}}
 * ```
 *
 * `ClientEvent` covers requests sent by clients, `ServerEvent` covers the
 * responses emitted by the server.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::todo::Todo;

/// Request sent from a client to the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Ask for every todo
    LoadTodos,
    /// Create a todo with the given text
    AddTodo(String),
    /// Flip the completed flag of a todo
    ToggleTodo(String),
    /// Remove a todo
    DeleteTodo(String),
    /// Start a fresh stopwatch run, discarding saved time
    StartTimer(String),
    /// Continue the stopwatch on top of saved time
    ResumeTimer(String),
    /// Stop the stopwatch and fold elapsed time into saved time
    StopTimer(String),
}

impl ClientEvent {
    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadTodos => "load-todos",
            Self::AddTodo(_) => "add-todo",
            Self::ToggleTodo(_) => "toggle-todo",
            Self::DeleteTodo(_) => "delete-todo",
            Self::StartTimer(_) => "start-timer",
            Self::ResumeTimer(_) => "resume-timer",
            Self::StopTimer(_) => "stop-timer",
        }
    }

    /// Parse a text frame
    pub fn from_json(text: &str) -> Result<Self, SharedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode as a text frame
    pub fn to_json(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Payload of `timer-started`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimerStarted {
    pub id: String,
    /// Epoch milliseconds
    pub start_time: i64,
}

/// Payload of `timer-stopped`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimerStopped {
    pub id: String,
    /// Accumulated whole seconds after the stop
    pub saved_time: u64,
}

/// Response sent from the server to a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Reply to `load-todos`
    TodosList(Vec<Todo>),
    /// Reply to `add-todo`
    TodoAdded(Todo),
    /// Reply to `toggle-todo`
    TodoUpdated(Todo),
    /// Reply to `delete-todo`
    TodoDeleted(String),
    /// Reply to `start-timer` and `resume-timer`
    TimerStarted(TimerStarted),
    /// Reply to `stop-timer`
    TimerStopped(TimerStopped),
}

impl ServerEvent {
    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::TodosList(_) => "todos-list",
            Self::TodoAdded(_) => "todo-added",
            Self::TodoUpdated(_) => "todo-updated",
            Self::TodoDeleted(_) => "todo-deleted",
            Self::TimerStarted(_) => "timer-started",
            Self::TimerStopped(_) => "timer-stopped",
        }
    }

    /// Whether this event reports a change to a single record.
    ///
    /// Only such events are relayed to other connections.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::TodosList(_))
    }

    /// Parse a text frame
    pub fn from_json(text: &str) -> Result<Self, SharedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode as a text frame
    pub fn to_json(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}
