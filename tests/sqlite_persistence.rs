use std::{sync::Arc, thread};

use tempfile::TempDir;

use swisspair::{Tournament, persist::StoreConfig};

#[test]
fn standings_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let config = StoreConfig::new(tmp.path().join("tournament.db").to_string_lossy());

    let (a, b) = {
        let t = Tournament::open(&config).expect("open");
        let a = t.register_player("Ann").unwrap();
        let b = t.register_player("Bob").unwrap();
        t.report_match(b, a).unwrap();
        (a, b)
    };

    let reopened = Tournament::open(&config).expect("reopen");
    reopened.store().health_check().unwrap();
    assert!(!reopened.store().is_in_memory());
    let order: Vec<(i64, u32, u32)> = reopened
        .player_standings()
        .unwrap()
        .iter()
        .map(|s| (s.id, s.wins, s.matches))
        .collect();
    assert_eq!(order, vec![(b, 1, 1), (a, 0, 1)]);
}

#[test]
fn in_memory_stores_are_isolated() {
    let one = Tournament::open_in_memory().unwrap();
    let two = Tournament::open_in_memory().unwrap();
    one.register_player("Ann").unwrap();

    assert!(one.store().is_in_memory());
    assert_eq!(one.count_players().unwrap(), 1);
    assert_eq!(two.count_players().unwrap(), 0);
}

#[test]
fn concurrent_reports_on_disjoint_players_keep_counts() {
    let tmp = TempDir::new().expect("tmp");
    let config = StoreConfig::new(tmp.path().join("busy.db").to_string_lossy());
    let t = Arc::new(Tournament::open(&config).expect("open"));

    let ids: Vec<i64> = (0..8)
        .map(|i| t.register_player(&format!("Player {i}")).unwrap())
        .collect();

    let workers: Vec<_> = ids
        .chunks_exact(2)
        .map(|pair| {
            let t = Arc::clone(&t);
            let (winner, loser) = (pair[0], pair[1]);
            thread::spawn(move || {
                for _ in 0..25 {
                    t.report_match(winner, loser).expect("report");
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker");
    }

    let standings = t.player_standings().unwrap();
    let total_matches: u32 = standings.iter().map(|s| s.matches).sum();
    assert_eq!(total_matches, 8 * 25);
    for pair in ids.chunks_exact(2) {
        let winner = standings.iter().find(|s| s.id == pair[0]).unwrap();
        let loser = standings.iter().find(|s| s.id == pair[1]).unwrap();
        assert_eq!((winner.wins, winner.matches), (25, 25));
        assert_eq!((loser.wins, loser.matches), (0, 25));
    }
}

#[test]
fn concurrent_reports_and_reads_in_memory_never_fail() {
    let t = Arc::new(Tournament::open_in_memory().expect("open"));

    let ids: Vec<i64> = (0..8)
        .map(|i| t.register_player(&format!("Player {i}")).unwrap())
        .collect();

    let workers: Vec<_> = ids
        .chunks_exact(2)
        .map(|pair| {
            let t = Arc::clone(&t);
            let (winner, loser) = (pair[0], pair[1]);
            thread::spawn(move || {
                for _ in 0..50 {
                    t.report_match(winner, loser).expect("report");
                    let standings = t.player_standings().expect("standings");
                    let total: u32 = standings.iter().map(|s| s.matches).sum();
                    assert_eq!(total % 2, 0);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker");
    }

    let standings = t.player_standings().unwrap();
    for pair in ids.chunks_exact(2) {
        let winner = standings.iter().find(|s| s.id == pair[0]).unwrap();
        let loser = standings.iter().find(|s| s.id == pair[1]).unwrap();
        assert_eq!((winner.wins, winner.matches), (50, 50));
        assert_eq!((loser.wins, loser.matches), (0, 50));
    }
}

#[test]
fn config_defaults() {
    let config = StoreConfig::default();
    assert!(config.is_in_memory());
    assert_eq!(config.busy_timeout_ms, 5_000);
    assert_eq!(config.max_idle_connections, 4);
    assert!(!StoreConfig::new("event.db").is_in_memory());
}
