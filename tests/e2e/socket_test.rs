//! `/ws` round trips against a server on an ephemeral port

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tokio::time::Duration;
use futures_util::SinkExt;
use tokio_tungstenite::tungstenite::Message;
use xftodo::egui_app::{SocketClient, SocketSignal, TodoBoard};
use xftodo::shared::{now_millis, ClientEvent, ServerEvent};

use crate::assert_in_range;
use crate::common::server::{expect_silence, recv, send, send_raw, TestServer};

#[tokio::test]
async fn test_add_toggle_delete_round_trip() {
    let server = TestServer::start(false).await;
    let mut socket = server.connect().await;

    send(&mut socket, &ClientEvent::LoadTodos).await;
    assert_eq!(recv(&mut socket).await, ServerEvent::TodosList(vec![]));

    send(&mut socket, &ClientEvent::AddTodo("Buy milk".to_string())).await;
    let todo = match recv(&mut socket).await {
        ServerEvent::TodoAdded(todo) => todo,
        other => panic!("Expected todo-added, got {:?}", other),
    };
    assert_eq!(todo.text, "Buy milk");
    assert!(!todo.completed);

    send(&mut socket, &ClientEvent::ToggleTodo(todo.id.clone())).await;
    assert_matches!(recv(&mut socket).await, ServerEvent::TodoUpdated(t) if t.completed && t.id == todo.id);

    send(&mut socket, &ClientEvent::DeleteTodo(todo.id.clone())).await;
    assert_eq!(recv(&mut socket).await, ServerEvent::TodoDeleted(todo.id.clone()));

    send(&mut socket, &ClientEvent::LoadTodos).await;
    assert_eq!(recv(&mut socket).await, ServerEvent::TodosList(vec![]));
}

#[tokio::test]
async fn test_timer_round_trip() {
    let server = TestServer::start(false).await;
    let mut socket = server.connect().await;

    send(&mut socket, &ClientEvent::AddTodo("Focus".to_string())).await;
    let ServerEvent::TodoAdded(todo) = recv(&mut socket).await else {
        panic!("Expected todo-added");
    };

    send(&mut socket, &ClientEvent::StartTimer(todo.id.clone())).await;
    let started = match recv(&mut socket).await {
        ServerEvent::TimerStarted(started) => started,
        other => panic!("Expected timer-started, got {:?}", other),
    };
    assert_eq!(started.id, todo.id);

    tokio::time::sleep(Duration::from_millis(1_100)).await;

    send(&mut socket, &ClientEvent::StopTimer(todo.id.clone())).await;
    let stopped = match recv(&mut socket).await {
        ServerEvent::TimerStopped(stopped) => stopped,
        other => panic!("Expected timer-stopped, got {:?}", other),
    };
    assert_eq!(stopped.id, todo.id);
    assert_in_range!(stopped.saved_time, 1, 5);

    // Stopping again has nothing to report
    send(&mut socket, &ClientEvent::StopTimer(todo.id.clone())).await;
    expect_silence(&mut socket, Duration::from_millis(300)).await;
}

#[tokio::test]
async fn test_wire_format_uses_kebab_case_envelope() {
    let server = TestServer::start(false).await;
    let mut socket = server.connect().await;

    send_raw(&mut socket, r#"{"event":"add-todo","data":"raw frame"}"#).await;

    let ServerEvent::TodoAdded(todo) = recv(&mut socket).await else {
        panic!("Expected todo-added");
    };
    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["_id"], serde_json::json!(todo.id));
    assert_eq!(json["timerStarted"], serde_json::json!(false));
    assert_eq!(json["savedTime"], serde_json::json!(0));
}

#[tokio::test]
async fn test_malformed_frames_keep_connection_open() {
    let server = TestServer::start(false).await;
    let mut socket = server.connect().await;

    send_raw(&mut socket, "definitely not json").await;
    send_raw(&mut socket, r#"{"event":"rename-todo","data":"x"}"#).await;
    expect_silence(&mut socket, Duration::from_millis(300)).await;

    send(&mut socket, &ClientEvent::LoadTodos).await;
    assert_eq!(recv(&mut socket).await, ServerEvent::TodosList(vec![]));
}

#[tokio::test]
async fn test_binary_and_ping_frames_are_ignored() {
    let server = TestServer::start(false).await;
    let mut socket = server.connect().await;

    socket
        .send(Message::Binary(vec![0x7b, 0x7d].into()))
        .await
        .expect("Failed to send binary frame");
    socket
        .send(Message::Ping(b"still there".to_vec().into()))
        .await
        .expect("Failed to send ping");

    send(&mut socket, &ClientEvent::LoadTodos).await;
    assert_eq!(recv(&mut socket).await, ServerEvent::TodosList(vec![]));
}

#[tokio::test]
async fn test_replies_go_to_sender_only_by_default() {
    let server = TestServer::start(false).await;
    let mut alice = server.connect().await;
    let mut bob = server.connect().await;

    send(&mut alice, &ClientEvent::AddTodo("private".to_string())).await;
    assert_matches!(recv(&mut alice).await, ServerEvent::TodoAdded(_));

    expect_silence(&mut bob, Duration::from_millis(300)).await;

    // The record is still shared state
    send(&mut bob, &ClientEvent::LoadTodos).await;
    assert_matches!(recv(&mut bob).await, ServerEvent::TodosList(list) if list.len() == 1);
}

#[tokio::test]
async fn test_relay_reaches_other_connections_when_enabled() {
    let server = TestServer::start(true).await;
    let mut alice = server.connect().await;
    let mut bob = server.connect().await;

    // Make sure both connections are fully set up before mutating
    send(&mut bob, &ClientEvent::LoadTodos).await;
    assert_matches!(recv(&mut bob).await, ServerEvent::TodosList(_));
    send(&mut alice, &ClientEvent::LoadTodos).await;
    assert_matches!(recv(&mut alice).await, ServerEvent::TodosList(_));

    send(&mut alice, &ClientEvent::AddTodo("shared".to_string())).await;
    let ServerEvent::TodoAdded(added) = recv(&mut alice).await else {
        panic!("Expected todo-added");
    };

    assert_eq!(recv(&mut bob).await, ServerEvent::TodoAdded(added.clone()));

    // Alice does not get her own event twice
    expect_silence(&mut alice, Duration::from_millis(300)).await;

    // Loads are never relayed
    send(&mut bob, &ClientEvent::LoadTodos).await;
    assert_matches!(recv(&mut bob).await, ServerEvent::TodosList(_));
    expect_silence(&mut alice, Duration::from_millis(300)).await;
}

#[tokio::test]
async fn test_relayed_timer_events_keep_other_mirrors_in_step() {
    let server = TestServer::start(true).await;
    let mut alice = server.connect().await;
    let mut bob = server.connect().await;

    send(&mut bob, &ClientEvent::LoadTodos).await;
    let mut board = TodoBoard::new();
    board.apply(recv(&mut bob).await, now_millis());
    send(&mut alice, &ClientEvent::LoadTodos).await;
    assert_matches!(recv(&mut alice).await, ServerEvent::TodosList(_));

    send(&mut alice, &ClientEvent::AddTodo("Focus".to_string())).await;
    let ServerEvent::TodoAdded(todo) = recv(&mut alice).await else {
        panic!("Expected todo-added");
    };
    board.apply(recv(&mut bob).await, now_millis());

    // First run, then stop, so the record holds saved time
    send(&mut alice, &ClientEvent::ResumeTimer(todo.id.clone())).await;
    assert_matches!(recv(&mut alice).await, ServerEvent::TimerStarted(_));
    board.apply(recv(&mut bob).await, now_millis());
    assert!(board.get(&todo.id).unwrap().is_running());

    tokio::time::sleep(Duration::from_millis(1_100)).await;

    send(&mut alice, &ClientEvent::StopTimer(todo.id.clone())).await;
    let ServerEvent::TimerStopped(stopped) = recv(&mut alice).await else {
        panic!("Expected timer-stopped");
    };
    assert!(stopped.saved_time >= 1);
    board.apply(recv(&mut bob).await, now_millis());
    let mirrored = board.get(&todo.id).unwrap();
    assert!(!mirrored.is_running());
    assert_eq!(mirrored.saved_time, stopped.saved_time);

    // A fresh start discards the saved time on every client
    send(&mut alice, &ClientEvent::StartTimer(todo.id.clone())).await;
    assert_matches!(recv(&mut alice).await, ServerEvent::TimerStarted(_));
    let relayed = recv(&mut bob).await;
    assert_matches!(&relayed, ServerEvent::TodoUpdated(t) if t.saved_time == 0 && t.timer_started);
    board.apply(relayed, now_millis());

    let mirrored = board.get(&todo.id).unwrap();
    assert_eq!(mirrored.saved_time, 0);
    assert_in_range!(board.total_seconds(mirrored), 0, 1);
}

#[tokio::test]
async fn test_desktop_client_loads_on_connect() {
    let server = TestServer::start(false).await;
    let mut seed = server.connect().await;
    send(&mut seed, &ClientEvent::AddTodo("already there".to_string())).await;
    assert_matches!(recv(&mut seed).await, ServerEvent::TodoAdded(_));

    let url = server.ws_url();
    let signals = tokio::task::spawn_blocking(move || {
        let client = SocketClient::spawn(url, Box::new(|| {}));
        let mut signals = Vec::new();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while signals.len() < 2 && std::time::Instant::now() < deadline {
            match client.try_recv() {
                Some(signal) => signals.push(signal),
                None => std::thread::sleep(Duration::from_millis(20)),
            }
        }
        signals
    })
    .await
    .unwrap();

    assert_eq!(signals.len(), 2, "signals: {:?}", signals);
    assert_eq!(signals[0], SocketSignal::Connected);
    assert_matches!(
        &signals[1],
        SocketSignal::Event(ServerEvent::TodosList(list)) if list.len() == 1 && list[0].text == "already there"
    );
}
