/**
 * Todo Event Handlers
 *
 * This module implements one handler per client event. Each handler performs
 * a single read and at most one write against the `TodoStore` and returns the
 * event to send back to the requesting connection.
 *
 * # Not Found
 *
 * Toggle, start, resume and stop on an unknown id are no-ops and return
 * `Ok(None)`. Delete always answers with `todo-deleted`, which leaves a
 * client list unchanged when the id was unknown.
 *
 * # Time
 *
 * Handlers take `now` from the caller so transitions are deterministic in
 * tests. `dispatch` reads the wall clock once per event.
 */

use chrono::{DateTime, Utc};

use crate::backend::error::BackendError;
use crate::backend::store::TodoStore;
use crate::shared::{ClientEvent, ServerEvent, TimerStarted, TimerStopped, Todo};

/// Handle `load-todos`
pub async fn load_todos(store: &TodoStore) -> Result<ServerEvent, BackendError> {
    let todos = store.list().await?;
    tracing::debug!("[Todos] Loaded {} todos", todos.len());
    Ok(ServerEvent::TodosList(todos))
}

/// Handle `add-todo`
pub async fn add_todo(
    store: &TodoStore,
    text: String,
    now: DateTime<Utc>,
) -> Result<ServerEvent, BackendError> {
    let todo = Todo::create(text, now);
    store.insert(&todo).await?;
    tracing::info!("[Todos] Added todo {}", todo.id);
    Ok(ServerEvent::TodoAdded(todo))
}

/// Handle `toggle-todo`
pub async fn toggle_todo(
    store: &TodoStore,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Option<ServerEvent>, BackendError> {
    let Some(mut todo) = store.find(id).await? else {
        tracing::debug!("[Todos] toggle-todo for unknown id {}", id);
        return Ok(None);
    };

    todo.toggle(now.timestamp_millis());
    if !store.save(&todo).await? {
        tracing::debug!("[Todos] Todo {} vanished before toggle was saved", id);
        return Ok(None);
    }

    tracing::info!("[Todos] Todo {} completed={}", id, todo.completed);
    Ok(Some(ServerEvent::TodoUpdated(todo)))
}

/// Handle `delete-todo`
pub async fn delete_todo(store: &TodoStore, id: &str) -> Result<ServerEvent, BackendError> {
    if store.delete(id).await? {
        tracing::info!("[Todos] Deleted todo {}", id);
    } else {
        tracing::debug!("[Todos] delete-todo for unknown id {}", id);
    }
    Ok(ServerEvent::TodoDeleted(id.to_string()))
}

/// Handle `start-timer`: a fresh run, saved time reset to zero
pub async fn start_timer(
    store: &TodoStore,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Option<ServerEvent>, BackendError> {
    run_timer(store, id, now, Todo::start_timer).await
}

/// Handle `resume-timer`: a new run on top of saved time
pub async fn resume_timer(
    store: &TodoStore,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Option<ServerEvent>, BackendError> {
    run_timer(store, id, now, Todo::resume_timer).await
}

async fn run_timer(
    store: &TodoStore,
    id: &str,
    now: DateTime<Utc>,
    transition: fn(&mut Todo, i64),
) -> Result<Option<ServerEvent>, BackendError> {
    let Some(mut todo) = store.find(id).await? else {
        tracing::debug!("[Todos] Timer request for unknown id {}", id);
        return Ok(None);
    };

    let start_time = now.timestamp_millis();
    transition(&mut todo, start_time);
    if !store.save(&todo).await? {
        return Ok(None);
    }

    tracing::info!("[Todos] Timer running for {} (saved {}s)", id, todo.saved_time);
    Ok(Some(ServerEvent::TimerStarted(TimerStarted {
        id: id.to_string(),
        start_time,
    })))
}

/// Handle `stop-timer`
pub async fn stop_timer(
    store: &TodoStore,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Option<ServerEvent>, BackendError> {
    let Some(mut todo) = store.find(id).await? else {
        tracing::debug!("[Todos] stop-timer for unknown id {}", id);
        return Ok(None);
    };

    if !todo.stop_timer(now.timestamp_millis()) {
        tracing::debug!("[Todos] stop-timer for idle todo {}", id);
        return Ok(None);
    }

    if !store.save(&todo).await? {
        return Ok(None);
    }

    tracing::info!("[Todos] Timer stopped for {} at {}s", id, todo.saved_time);
    Ok(Some(ServerEvent::TimerStopped(TimerStopped {
        id: todo.id,
        saved_time: todo.saved_time,
    })))
}

/// Route a client event to its handler.
///
/// Returns the event to send back to the requesting connection, if any.
pub async fn dispatch(
    store: &TodoStore,
    event: ClientEvent,
    now: DateTime<Utc>,
) -> Result<Option<ServerEvent>, BackendError> {
    match event {
        ClientEvent::LoadTodos => load_todos(store).await.map(Some),
        ClientEvent::AddTodo(text) => add_todo(store, text, now).await.map(Some),
        ClientEvent::ToggleTodo(id) => toggle_todo(store, &id, now).await,
        ClientEvent::DeleteTodo(id) => delete_todo(store, &id).await.map(Some),
        ClientEvent::StartTimer(id) => start_timer(store, &id, now).await,
        ClientEvent::ResumeTimer(id) => resume_timer(store, &id, now).await,
        ClientEvent::StopTimer(id) => stop_timer(store, &id, now).await,
    }
}
