//! Todo Request Handler Module
//!
//! This module turns client events into store mutations and response events.
//! It is stateless: everything it knows lives in the `TodoStore`.
//!
//! # Event Handlers
//!
//! | client event   | store work                    | response        |
//! |----------------|-------------------------------|-----------------|
//! | `load-todos`   | list                          | `todos-list`    |
//! | `add-todo`     | insert                        | `todo-added`    |
//! | `toggle-todo`  | find + save                   | `todo-updated`  |
//! | `delete-todo`  | delete                        | `todo-deleted`  |
//! | `start-timer`  | find + save (saved time reset) | `timer-started` |
//! | `resume-timer` | find + save                   | `timer-started` |
//! | `stop-timer`   | find + save                   | `timer-stopped` |

/// Event handlers and dispatch
pub mod handlers;

pub use handlers::dispatch;
