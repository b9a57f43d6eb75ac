use strhunt::search::sequential;
use strhunt::{Game, ParallelConfig, SearchCoordinator, partition};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

fn config(workers: usize) -> ParallelConfig {
    ParallelConfig::default().with_workers(workers)
}

/// Buffer of `len` copies of `fill` with `pattern` written at `pos`
fn buffer_with(len: usize, fill: u8, pattern: &[u8], pos: usize) -> Vec<u8> {
    let mut buffer = vec![fill; len];
    buffer[pos..pos + pattern.len()].copy_from_slice(pattern);
    buffer
}

#[test]
fn test_planted_pattern_found_with_one_and_eight_workers() {
    let pattern = b"needle";
    for pos in [0, 1, 499, 500, 997, 1994] {
        let buffer = buffer_with(2000, b'a', pattern, pos);
        for workers in [1, 8] {
            let game = Game::from_buffer(buffer.clone(), &config(workers)).unwrap();
            assert!(game.run("needle"), "pos={} workers={}", pos, workers);
        }
    }
}

#[test]
fn test_absent_pattern_not_found() {
    let game = Game::from_buffer(vec![b'a'; 4096], &config(8)).unwrap();
    assert!(!game.run("zz"));
    assert!(!game.run("ab"));
    assert!(game.run("aaaa"));
}

#[test]
fn test_last_index_single_symbol() {
    let buffer = buffer_with(1000, b'a', b"q", 999);
    for workers in [1, 3, 8] {
        let game = Game::from_buffer(buffer.clone(), &config(workers)).unwrap();
        assert!(game.run("q"));
        assert!(!game.run("qa"), "overrun must be a non-match");
    }
}

#[test]
fn test_alphabet_scenario() {
    for workers in [1, 8] {
        let game = Game::from_buffer(LETTERS, &config(workers)).unwrap();
        assert!(game.run("xyz"));
        assert!(!game.run("xyzz"));
        assert!(game.run(""));
    }
}

#[test]
fn test_pattern_on_every_partition_boundary() {
    let len = 1003;
    let workers = 7;
    for part in partition(len, workers).unwrap().iter().skip(1) {
        // Pattern starts two symbols before the boundary
        let buffer = buffer_with(len, b'a', b"xyzw", part.start - 2);
        let game = Game::from_buffer(buffer, &config(workers)).unwrap();
        let outcome = game.run_with_stats("xyzw");
        assert!(outcome.found, "boundary at {}", part.start);
        assert!(outcome.finder().is_some());
    }
}

#[test]
fn test_more_workers_than_symbols() {
    let game = Game::from_buffer("abc", &config(16)).unwrap();
    assert!(game.run("abc"));
    assert!(game.run("c"));
    assert!(!game.run("abcd"));
}

#[test]
fn test_empty_buffer() {
    let game = Game::from_buffer(Vec::new(), &config(4)).unwrap();
    assert!(!game.run("a"));
    assert!(game.run(""));
}

#[test]
fn test_repeated_search_is_idempotent() {
    let game = Game::new(10_000, &config(8).with_seed(2024)).unwrap();
    let sample = game.to_string()[5_000..5_006].to_string();
    for _ in 0..10 {
        assert!(game.run(&sample));
        assert!(!game.run("0"));
    }
}

#[test]
fn test_generated_buffer_shape() {
    let alphabet = "ACGT".parse().unwrap();
    let game = Game::new(12_345, &config(6).with_alphabet(alphabet)).unwrap();
    assert_eq!(game.len(), 12_345);
    assert!(game.as_bytes().iter().all(|c| b"ACGT".contains(c)));
}

#[test]
fn test_parallel_agrees_with_sequential_on_random_buffer() {
    let game = Game::new(5_000, &config(8).with_seed(77)).unwrap();
    let buffer = game.as_bytes();
    let coordinator = SearchCoordinator::new(8).unwrap();
    for pattern in ["a", "ab", "abc", "zzz", "qwer", "xyzzy", "e", "kk"] {
        assert_eq!(
            coordinator.run(buffer, pattern.as_bytes()),
            sequential::contains(buffer, pattern.as_bytes()),
            "pattern {}",
            pattern
        );
    }
}

#[test]
fn test_statistics_cover_buffer_when_absent() {
    let game = Game::from_buffer(vec![b'b'; 999], &config(4)).unwrap();
    let outcome = game.run_with_stats("a");
    assert!(!outcome.found);
    assert_eq!(outcome.workers.len(), 4);
    assert_eq!(outcome.positions_scanned(), 999);
    assert_eq!(outcome.early_exits(), 0);
}
