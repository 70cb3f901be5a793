//! Property-based tests for the client-side todo mirror

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use xftodo::egui_app::TodoBoard;
use xftodo::shared::{ServerEvent, Todo};

const NOW: i64 = 1_700_000_000_000;

fn todo(n: usize) -> Todo {
    Todo::new(format!("todo-{}", n), format!("task {}", n), Utc.timestamp_millis_opt(NOW).unwrap())
}

proptest! {
    #[test]
    fn test_repeated_adds_never_duplicate(ids in prop::collection::vec(0usize..8, 0..40)) {
        let mut board = TodoBoard::new();
        for n in &ids {
            board.apply(ServerEvent::TodoAdded(todo(*n)), NOW);
        }

        let mut seen: Vec<&str> = board.todos().iter().map(|t| t.id.as_str()).collect();
        let len = seen.len();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), len);
    }

    #[test]
    fn test_deleting_unknown_ids_keeps_list(count in 0usize..10, ghost in 100usize..200) {
        let mut board = TodoBoard::new();
        board.apply(ServerEvent::TodosList((0..count).map(todo).collect()), NOW);
        let before = board.todos().to_vec();

        board.apply(ServerEvent::TodoDeleted(format!("todo-{}", ghost)), NOW);

        prop_assert_eq!(board.todos(), before.as_slice());
    }

    #[test]
    fn test_running_total_is_saved_plus_whole_seconds(saved in 0u64..100_000, run_ms in 0i64..10_000_000) {
        let mut running = todo(0);
        running.saved_time = saved;
        running.resume_timer(NOW);

        let mut board = TodoBoard::new();
        board.apply(ServerEvent::TodosList(vec![running]), NOW);
        board.tick(NOW + run_ms);

        let shown = board.total_seconds(&board.todos()[0]);
        prop_assert_eq!(shown, saved + (run_ms / 1000) as u64);
    }
}
