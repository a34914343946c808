//! Grid indexing, canonical cells and cache spawning.

use std::collections::HashSet;

use geocache::{
    Board, BoardConfig, Cell, Error, Point,
    luck::{luck, spawn_key},
};

mod common;

use common::{SCENARIO_POINT, default_board, dense_board, sample_points};

#[test]
fn test_spawn_decision_is_deterministic_across_boards() {
    let a = default_board();
    let b = default_board();
    for i in -30..30 {
        for j in -30..30 {
            assert_eq!(a.is_spawn_cell(i, j), b.is_spawn_cell(i, j));
            assert_eq!(a.is_spawn_cell(i, j), luck(&spawn_key(i, j)) < 0.1);
        }
    }
}

#[test]
fn test_cell_for_point_returns_canonical_instance() {
    let mut board = default_board();
    for point in sample_points(7, 200, 1.0) {
        let first = board.cell_for_point(point).unwrap();
        let center = board.cell_bounds(&first).center();
        let second = board.cell_for_point(center).unwrap();
        assert_eq!(first.id(), second.id(), "point {point}");
        assert_eq!(first.coords(), second.coords());
    }
}

#[test]
fn test_every_point_lies_in_its_cell_bounds() {
    let mut board = default_board();
    for point in sample_points(11, 500, 0.5) {
        let cell = board.cell_for_point(point).unwrap();
        let bounds = board.cell_bounds(&cell);
        assert!(
            point.lat >= bounds.south_west.lat - 1e-12 && point.lat <= bounds.north_east.lat + 1e-12,
            "lat of {point} outside {bounds:?}"
        );
        assert!(
            point.lng >= bounds.south_west.lng - 1e-12 && point.lng <= bounds.north_east.lng + 1e-12,
            "lng of {point} outside {bounds:?}"
        );
    }
}

#[test]
fn test_adjacent_bounds_share_edges() {
    let mut board = default_board();
    for (i, j) in [(0, 0), (-1, -1), (369894, -1220628), (-5, 12)] {
        let cell = board.canonical_cell(i, j);
        let north = board.canonical_cell(i + 1, j);
        let east = board.canonical_cell(i, j + 1);

        let here = board.cell_bounds(&cell);
        assert_eq!(here.north_east.lat, board.cell_bounds(&north).south_west.lat);
        assert_eq!(here.south_west.lng, board.cell_bounds(&north).south_west.lng);
        assert_eq!(here.north_east.lng, board.cell_bounds(&east).south_west.lng);
        assert_eq!(here.south_west.lat, board.cell_bounds(&east).south_west.lat);
    }
}

#[test]
fn test_tiling_example_cells() {
    let mut board = default_board();
    let origin = board.canonical_cell(0, 0);
    let above = board.canonical_cell(1, 0);

    let b0 = board.cell_bounds(&origin);
    assert_eq!(b0.south_west, Point::new(0.0, 0.0));
    assert_eq!(b0.north_east, Point::new(1e-4, 1e-4));

    let b1 = board.cell_bounds(&above);
    assert_eq!(b1.south_west, Point::new(1e-4, 0.0));
    assert_eq!(b1.north_east, Point::new(2e-4, 1e-4));

    assert!(b0.contains(Point::new(0.00005, 0.00005)));
    assert!(!b0.contains(Point::new(1e-4, 0.00005)));
    assert!(b1.contains(Point::new(1e-4, 0.00005)));
}

#[test]
fn test_negative_coordinates_floor() {
    let mut board = default_board();
    assert_eq!(board.cell_for_point(Point::new(-1e-9, -1e-9)).unwrap().coords(), (-1, -1));
    assert_eq!(board.cell_for_point(Point::new(0.0, 0.0)).unwrap().coords(), (0, 0));
    assert_eq!(board.cell_for_point(Point::new(-0.00025, 0.00025)).unwrap().coords(), (-3, 2));
}

#[test]
fn test_scenario_is_reproducible() {
    let mut first = default_board();
    let mut second = default_board();

    let a: Vec<(i64, i64)> = first.cells_near(SCENARIO_POINT).unwrap().iter().map(Cell::coords).collect();
    let b: Vec<(i64, i64)> = second.cells_near(SCENARIO_POINT).unwrap().iter().map(Cell::coords).collect();
    let again: Vec<(i64, i64)> = first.cells_near(SCENARIO_POINT).unwrap().iter().map(Cell::coords).collect();

    assert_eq!(a, b);
    assert_eq!(a, again);
    assert!(a.len() <= 17 * 17);

    assert_eq!(first.coords_for_point(SCENARIO_POINT).unwrap(), (369895, -1220628));
    let expected: Vec<(i64, i64)> = vec![
        (369887, -1220631),
        (369887, -1220629),
        (369887, -1220624),
        (369887, -1220621),
        (369888, -1220623),
        (369888, -1220621),
        (369889, -1220628),
        (369889, -1220625),
        (369890, -1220622),
        (369891, -1220632),
        (369891, -1220627),
        (369891, -1220626),
        (369892, -1220636),
        (369892, -1220631),
        (369892, -1220620),
        (369893, -1220629),
        (369893, -1220626),
        (369895, -1220635),
        (369896, -1220632),
        (369896, -1220628),
        (369896, -1220624),
        (369897, -1220624),
        (369898, -1220635),
        (369898, -1220631),
        (369898, -1220624),
        (369902, -1220635),
        (369902, -1220625),
        (369903, -1220634),
        (369903, -1220632),
        (369903, -1220625),
    ];
    assert_eq!(a, expected);

    let (oi, oj) = first.coords_for_point(SCENARIO_POINT).unwrap();
    assert!(a.iter().all(|&(i, j)| i.abs_diff(oi) <= 8 && j.abs_diff(oj) <= 8));
}

#[test]
fn test_repeated_cells_near_keeps_identity() {
    let mut board = default_board();
    let first = board.cells_near(SCENARIO_POINT).unwrap();
    let registered = board.known_cell_count();
    let second = board.cells_near(SCENARIO_POINT).unwrap();

    assert_eq!(board.known_cell_count(), registered);
    let ids_a: Vec<_> = first.iter().map(Cell::id).collect();
    let ids_b: Vec<_> = second.iter().map(Cell::id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn test_visibility_is_independent_of_query_origin() {
    let mut board = default_board();
    let tile = board.tile_width();
    let here: HashSet<(i64, i64)> = board
        .cells_near(SCENARIO_POINT)
        .unwrap()
        .iter()
        .map(Cell::coords)
        .collect();
    let shifted_point = Point::new(SCENARIO_POINT.lat + 3.0 * tile, SCENARIO_POINT.lng - 2.0 * tile);
    let there: HashSet<(i64, i64)> = board
        .cells_near(shifted_point)
        .unwrap()
        .iter()
        .map(Cell::coords)
        .collect();

    let (oi, oj) = board.coords_for_point(SCENARIO_POINT).unwrap();
    let (si, sj) = board.coords_for_point(shifted_point).unwrap();
    let in_both = |&(i, j): &(i64, i64)| {
        i.abs_diff(oi) <= 8 && j.abs_diff(oj) <= 8 && i.abs_diff(si) <= 8 && j.abs_diff(sj) <= 8
    };

    let overlap_here: HashSet<_> = here.iter().copied().filter(in_both).collect();
    let overlap_there: HashSet<_> = there.iter().copied().filter(in_both).collect();
    assert_eq!(overlap_here, overlap_there);
}

#[test]
fn test_dense_window_size() {
    for radius in [0, 1, 4] {
        let mut board = dense_board(radius);
        let side = (2 * radius + 1) as usize;
        assert_eq!(board.cells_near(SCENARIO_POINT).unwrap().len(), side * side);
    }
}

#[test]
fn test_spawn_rate_is_near_probability() {
    let board = Board::new(BoardConfig::default().with_spawn_probability(0.25)).unwrap();
    let total = 100 * 100;
    let spawned = (0..100)
        .flat_map(|i| (0..100).map(move |j| (i, j)))
        .filter(|&(i, j)| board.is_spawn_cell(i, j))
        .count();
    let rate = spawned as f64 / total as f64;
    assert!((0.2..0.3).contains(&rate), "rate {rate}");
}

#[test]
fn test_invalid_config_fails_fast() {
    let result = Board::new(BoardConfig::default().with_tile_width(-1e-4));
    assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
}
