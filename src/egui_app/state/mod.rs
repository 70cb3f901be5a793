use std::time::{Duration, Instant};

use crate::egui_app::socket_client::{SocketClient, SocketSignal, Waker};
use crate::egui_app::Config;
use crate::shared::{now_millis, ClientEvent, SharedError};

pub mod board;

pub use board::{TimerControls, TodoBoard};

/// How often the elapsed-time cache is refreshed
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Connection status shown in the top bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected(String),
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub board: TodoBoard,
    pub todo_input: String,
    pub connection: ConnectionStatus,
    client: Option<SocketClient>,
    last_tick: Option<Instant>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            board: TodoBoard::new(),
            todo_input: String::new(),
            connection: ConnectionStatus::Connecting,
            client: None,
            last_tick: None,
        }
    }

    /// Open the background connection. `waker` is called whenever a signal
    /// arrives so the UI can repaint.
    pub fn connect(&mut self, waker: Waker) {
        match self.config.socket_url() {
            Ok(url) => {
                tracing::info!("[Client] Using socket {}", url);
                self.connection = ConnectionStatus::Connecting;
                self.client = Some(SocketClient::spawn(url, waker));
            }
            Err(e) => {
                tracing::error!("[Client] {}", e);
                self.connection = ConnectionStatus::Disconnected(e.to_string());
            }
        }
    }

    /// Drain pending socket signals and refresh running timers.
    ///
    /// Called once per frame.
    pub fn poll(&mut self) {
        let now_ms = now_millis();

        let signals: Vec<SocketSignal> = match &self.client {
            Some(client) => std::iter::from_fn(|| client.try_recv()).collect(),
            None => Vec::new(),
        };
        for signal in signals {
            self.handle_signal(signal, now_ms);
        }

        let due = self.last_tick.is_none_or(|last| last.elapsed() >= TICK_INTERVAL);
        if due {
            self.board.tick(now_ms);
            self.last_tick = Some(Instant::now());
        }
    }

    pub fn handle_signal(&mut self, signal: SocketSignal, now_ms: i64) {
        match signal {
            SocketSignal::Connected => self.connection = ConnectionStatus::Connected,
            SocketSignal::Disconnected(reason) => self.connection = ConnectionStatus::Disconnected(reason),
            SocketSignal::Event(event) => {
                tracing::debug!("[Client] Received {}", event.name());
                self.board.apply(event, now_ms);
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionStatus::Connected
    }

    /// Send the input as a new todo and clear it. Blank input is rejected.
    pub fn add_todo(&mut self) -> Result<(), SharedError> {
        if self.todo_input.trim().is_empty() {
            return Err(SharedError::validation("text", "Todo text cannot be empty"));
        }
        let text = std::mem::take(&mut self.todo_input);
        self.send(ClientEvent::AddTodo(text))
    }

    pub fn toggle_todo(&mut self, id: &str) -> Result<(), SharedError> {
        self.send(ClientEvent::ToggleTodo(id.to_string()))
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<(), SharedError> {
        self.send(ClientEvent::DeleteTodo(id.to_string()))
    }

    /// Start a new run, shown immediately before the server confirms
    pub fn start_timer(&mut self, id: &str) -> Result<(), SharedError> {
        self.board.begin_start(id, now_millis());
        self.send(ClientEvent::StartTimer(id.to_string()))
    }

    pub fn resume_timer(&mut self, id: &str) -> Result<(), SharedError> {
        self.send(ClientEvent::ResumeTimer(id.to_string()))
    }

    pub fn stop_timer(&mut self, id: &str) -> Result<(), SharedError> {
        self.send(ClientEvent::StopTimer(id.to_string()))
    }

    fn send(&self, event: ClientEvent) -> Result<(), SharedError> {
        match &self.client {
            Some(client) => client.send(event),
            None => Err(SharedError::channel_closed(format!("not connected, dropped {}", event.name()))),
        }
    }
}
