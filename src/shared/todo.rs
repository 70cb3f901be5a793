/**
 * Todo Record and Stopwatch Transitions
 *
 * This module defines the `Todo` record shared by the server and the
 * desktop client, together with the stopwatch transitions the server applies
 * in response to client events.
 *
 * # Timer Model
 *
 * A todo carries two persisted timer fields:
 * - `saved_time` - whole seconds accumulated by previous runs
 * - `timer_start_time` - epoch milliseconds of the current run, if any
 *
 * `timer_start_time` is `Some` exactly when `timer_started` is true. All
 * transitions below keep that pairing intact.
 *
 * # Wire Format
 *
 * Records are serialized with camelCase keys and the id under `_id`:
 *
 * ```json
 * {"_id":"…","text":"Write report","completed":false,"timerStarted":true,
 *  "timerStartTime":1700000000000,"savedTime":42,"createdAt":"2024-…Z"}
 * ```
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whole seconds between `start_ms` and `now_ms`, truncated.
///
/// Returns 0 when `now_ms` is earlier than `start_ms`.
pub fn elapsed_seconds(start_ms: i64, now_ms: i64) -> u64 {
    let delta = now_ms.saturating_sub(start_ms);
    if delta <= 0 {
        0
    } else {
        (delta / 1000) as u64
    }
}

/// A single persisted todo item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned opaque identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Free-form todo text
    pub text: String,
    /// Whether the todo is done
    pub completed: bool,
    /// Whether the stopwatch is currently running
    pub timer_started: bool,
    /// Epoch milliseconds at which the current run started
    pub timer_start_time: Option<i64>,
    /// Accumulated whole seconds from finished runs
    #[serde(default)]
    pub saved_time: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a fresh todo: not completed, timer idle, no saved time
    pub fn new(id: impl Into<String>, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            timer_started: false,
            timer_start_time: None,
            saved_time: 0,
            created_at,
        }
    }

    /// Create a fresh todo with a new random id
    pub fn create(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), text, created_at)
    }

    /// Whether the stopwatch is running
    pub fn is_running(&self) -> bool {
        self.timer_started && self.timer_start_time.is_some()
    }

    /// Seconds elapsed in the current run, or 0 when idle
    pub fn current_run_seconds(&self, now_ms: i64) -> u64 {
        match self.timer_start_time {
            Some(start) if self.timer_started => elapsed_seconds(start, now_ms),
            _ => 0,
        }
    }

    /// Flip `completed`.
    ///
    /// When the todo is being completed while its timer runs, the elapsed
    /// time is folded into `saved_time` and the timer is cleared first.
    pub fn toggle(&mut self, now_ms: i64) {
        if !self.completed && self.is_running() {
            self.fold_running_time(now_ms);
        }
        self.completed = !self.completed;
    }

    /// Start a new run, discarding previously saved time
    pub fn start_timer(&mut self, now_ms: i64) {
        self.saved_time = 0;
        self.timer_started = true;
        self.timer_start_time = Some(now_ms);
    }

    /// Start a new run on top of previously saved time
    pub fn resume_timer(&mut self, now_ms: i64) {
        self.timer_started = true;
        self.timer_start_time = Some(now_ms);
    }

    /// Stop the current run.
    ///
    /// Returns `false` and leaves the record untouched when the timer is not
    /// running.
    pub fn stop_timer(&mut self, now_ms: i64) -> bool {
        if !self.is_running() {
            return false;
        }
        self.fold_running_time(now_ms);
        true
    }

    fn fold_running_time(&mut self, now_ms: i64) {
        self.saved_time = self.saved_time.saturating_add(self.current_run_seconds(now_ms));
        self.timer_started = false;
        self.timer_start_time = None;
    }
}
