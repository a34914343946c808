//! Integration tests for dependency injection.
//!
//! The app container lets whole play sessions run against an in-memory
//! repository with no file I/O.

use std::path::Path;

use geocache::{
    Direction, Error, Point,
    adapters::InMemoryRepository,
    app::{App, GameConfig},
    grid::BoardConfig,
};

fn dense_config() -> GameConfig {
    GameConfig::new()
        .with_start(Point::new(0.00005, 0.00005))
        .with_board(
            BoardConfig::default()
                .with_visibility_radius(1)
                .with_spawn_probability(1.0),
        )
}

#[test]
fn test_app_with_in_memory_repository() {
    let repo = InMemoryRepository::new();
    let app = App::for_testing().with_repository(repo.clone()).build();
    let path = Path::new("player-one");

    let mut session = app.new_session(dense_config()).unwrap();
    let coin = session.collect_from(0, 0).unwrap().expect("fresh cache has coins");
    app.save_session(&session, path).unwrap();
    assert_eq!(repo.count(), 1);

    let mut loaded = app.load_session(path).unwrap();
    assert_eq!(loaded.holdings(), &[coin]);
    assert_eq!(loaded.deposit_into(1, 1).unwrap(), Some(coin));
}

#[test]
fn test_independent_sessions_mint_identically() {
    let app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();

    let mut first = app.new_session(dense_config()).unwrap();
    let mut second = app.new_session(dense_config()).unwrap();

    let a = first.visible_caches().unwrap();
    let b = second.visible_caches().unwrap();
    let caches_a: Vec<_> = a.iter().map(|v| v.cache.clone()).collect();
    let caches_b: Vec<_> = b.iter().map(|v| v.cache.clone()).collect();
    assert_eq!(caches_a, caches_b);
}

#[test]
fn test_coins_are_conserved_across_save_and_load() {
    let app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();
    let path = Path::new("conservation");

    let mut session = app.new_session(dense_config()).unwrap();
    let total_before: usize = session
        .visible_caches()
        .unwrap()
        .iter()
        .map(|v| v.cache.len())
        .sum();

    for _ in 0..3 {
        session.collect_from(-1, -1).unwrap();
        session.collect_from(0, 1).unwrap();
    }
    session.deposit_into(1, 0).unwrap();
    app.save_session(&session, path).unwrap();

    let mut loaded = app.load_session(path).unwrap();
    let in_caches: usize = loaded
        .visible_caches()
        .unwrap()
        .iter()
        .map(|v| v.cache.len())
        .sum();
    assert_eq!(in_caches + loaded.coin_count(), total_before);
}

#[test]
fn test_walking_back_shows_same_caches() {
    let app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();
    let mut session = app.new_session(GameConfig::default()).unwrap();

    let before = session.visible_caches().unwrap();
    for direction in [Direction::East; 20] {
        session.step(direction).unwrap();
    }
    session.visible_caches().unwrap();
    for direction in [Direction::West; 20] {
        session.step(direction).unwrap();
    }
    let after = session.visible_caches().unwrap();

    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(a.cell.id(), b.cell.id());
        assert_eq!(a.cache, b.cache);
    }
}

#[test]
fn test_load_missing_session_fails() {
    let app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();
    assert!(matches!(
        app.load_session(Path::new("nobody")),
        Err(Error::Io { .. })
    ));
}
