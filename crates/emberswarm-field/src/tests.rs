//! Tests for the fire automaton and the section intensity map.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use emberswarm_core::constants::*;
use emberswarm_core::enums::CellState;
use emberswarm_core::types::WorldBounds;

use crate::grid::{adaptive_spread_probability, Cell, FireGrid};
use crate::section::SectionMap;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// 120x120 world at cell size 6 — a 20x20 grid, large enough for the
/// spontaneous-ignition margin.
fn grid_20x20() -> FireGrid {
    FireGrid::new(WorldBounds::new(120.0, 120.0), 6.0)
}

/// 60x60 world at cell size 6 — a 10x10 grid, too small for the
/// spontaneous-ignition margin, so `advance` is fully deterministic.
fn grid_10x10() -> FireGrid {
    FireGrid::new(WorldBounds::new(60.0, 60.0), 6.0)
}

// ---- Geometry ----

#[test]
fn test_dimensions_derived_from_world() {
    let grid = FireGrid::new(WorldBounds::new(1800.0, 1020.0), 6.0);
    assert_eq!(grid.width(), 300);
    assert_eq!(grid.height(), 170);
    assert_eq!(grid.cells().len(), 300 * 170);
}

#[test]
fn test_cell_center_and_lookup_roundtrip() {
    let grid = grid_20x20();
    let center = grid.cell_center(3, 7);
    assert_eq!(center, Vec2::new(45.0, 21.0));
    assert_eq!(grid.cell_at(center), Some((3, 7)));
}

#[test]
fn test_cell_at_out_of_bounds() {
    let grid = grid_20x20();
    assert_eq!(grid.cell_at(Vec2::new(-1.0, 5.0)), None);
    assert_eq!(grid.cell_at(Vec2::new(5.0, 10_000.0)), None);
}

// ---- Ignition and extinguishing ----

#[test]
fn test_ignite_at_sets_fresh_timer() {
    let mut grid = grid_20x20();
    let ignited = grid.ignite_at(Vec2::new(45.0, 21.0));
    assert_eq!(ignited, Some((3, 7)));
    let cell = grid.cell(3, 7);
    assert_eq!(cell.state, CellState::Burning);
    assert_eq!(cell.timer, BURNING_DURATION);
}

#[test]
fn test_ignite_at_out_of_bounds_is_ignored() {
    let mut grid = grid_20x20();
    assert_eq!(grid.ignite_at(Vec2::new(-5.0, -5.0)), None);
    assert_eq!(grid.burning_count(), 0);
}

#[test]
fn test_extinguish_only_burning_cells() {
    let mut grid = grid_20x20();
    assert!(!grid.extinguish(4, 4));
    grid.ignite(4, 4);
    assert!(grid.extinguish(4, 4));
    assert_eq!(grid.cell(4, 4).state, CellState::Extinguished);
    // Second claimant loses.
    assert!(!grid.extinguish(4, 4));
}

// ---- Spread semantics ----

#[test]
fn test_certain_spread_reaches_only_von_neumann_neighbors() {
    let mut grid = grid_20x20();
    grid.ignite(10, 10);

    let report = grid.advance(&mut rng(7), 1.0);

    for (row, col) in [(9, 10), (11, 10), (10, 9), (10, 11)] {
        assert_eq!(
            grid.cell(row, col).state,
            CellState::Burning,
            "4-connected neighbor ({row},{col}) must ignite at p=1"
        );
        assert_eq!(grid.cell(row, col).timer, BURNING_DURATION);
    }
    // Diagonals and two-step cells read the pre-tick snapshot and stay
    // unburnt — no chain ignition within one tick.
    for (row, col) in [(9, 9), (9, 11), (11, 9), (11, 11), (8, 10), (12, 10)] {
        assert_eq!(grid.cell(row, col).state, CellState::Unburnt);
    }
    assert!(report.burning >= 5);
}

#[test]
fn test_timer_one_burns_out_after_exactly_one_advance() {
    let mut grid = grid_10x10();
    grid.set_cell(
        5,
        5,
        Cell {
            state: CellState::Burning,
            timer: 1,
        },
    );

    let report = grid.advance(&mut rng(1), 0.0);

    assert_eq!(grid.cell(5, 5).state, CellState::Burnt);
    assert_eq!(report.burned_out, 1);
    assert_eq!(report.burning, 0);
}

#[test]
fn test_burning_cell_spreads_even_while_burning_out() {
    let mut grid = grid_10x10();
    grid.set_cell(
        5,
        5,
        Cell {
            state: CellState::Burning,
            timer: 1,
        },
    );

    grid.advance(&mut rng(1), 1.0);

    assert_eq!(grid.cell(5, 5).state, CellState::Burnt);
    assert_eq!(grid.cell(4, 5).state, CellState::Burning);
}

#[test]
fn test_extinguished_and_burnt_never_reignite_by_spread() {
    let mut grid = grid_10x10();
    grid.ignite(5, 5);
    grid.set_cell(
        5,
        6,
        Cell {
            state: CellState::Extinguished,
            timer: 0,
        },
    );
    grid.set_cell(
        5,
        4,
        Cell {
            state: CellState::Burnt,
            timer: 0,
        },
    );

    grid.advance(&mut rng(3), 1.0);

    assert_eq!(grid.cell(5, 6).state, CellState::Extinguished);
    assert_eq!(grid.cell(5, 4).state, CellState::Burnt);
}

#[test]
fn test_zero_spread_is_fully_deterministic() {
    // 10x10 grid skips the spontaneous-ignition trial, so with p=0 the
    // only transitions are timer countdowns.
    let mut grid = grid_10x10();
    grid.set_cell(
        2,
        2,
        Cell {
            state: CellState::Burning,
            timer: 3,
        },
    );

    for expected_timer in [2u32, 1] {
        grid.advance(&mut rng(9), 0.0);
        let cell = grid.cell(2, 2);
        assert_eq!(cell.state, CellState::Burning);
        assert_eq!(cell.timer, expected_timer);
    }
    grid.advance(&mut rng(9), 0.0);
    assert_eq!(grid.cell(2, 2).state, CellState::Burnt);
    assert_eq!(grid.burning_count(), 0);
}

#[test]
fn test_same_seed_same_evolution() {
    let mut grid_a = grid_20x20();
    let mut grid_b = grid_20x20();
    grid_a.ignite(10, 10);
    grid_b.ignite(10, 10);

    let mut rng_a = rng(42);
    let mut rng_b = rng(42);
    for _ in 0..30 {
        grid_a.advance(&mut rng_a, 0.07);
        grid_b.advance(&mut rng_b, 0.07);
    }
    assert_eq!(grid_a.cells(), grid_b.cells());
}

#[test]
fn test_nearest_burning_within_radius() {
    let mut grid = grid_20x20();
    grid.ignite(2, 2);
    grid.ignite(10, 10);

    let from = grid.cell_center(9, 9);
    let target = grid.nearest_burning_within(from, 200.0).unwrap();
    assert_eq!((target.row, target.col), (10, 10));
    assert!(target.distance < 10.0);

    // Radius excludes everything.
    assert!(grid.nearest_burning_within(from, 1.0).is_none());
}

// ---- Adaptive spread probability ----

#[test]
fn test_adaptive_spread_probability_band() {
    assert_eq!(adaptive_spread_probability(0), MAX_SPREAD_PROBABILITY);
    assert_eq!(
        adaptive_spread_probability(MIN_SPREAD_FREQ_COUNT),
        MAX_SPREAD_PROBABILITY
    );
    assert_eq!(
        adaptive_spread_probability(MAX_SPREAD_FREQ_COUNT),
        MIN_SPREAD_PROBABILITY
    );
    assert_eq!(
        adaptive_spread_probability(MAX_SPREAD_FREQ_COUNT * 10),
        MIN_SPREAD_PROBABILITY
    );

    let mid = (MIN_SPREAD_FREQ_COUNT + MAX_SPREAD_FREQ_COUNT) / 2;
    let p = adaptive_spread_probability(mid);
    assert!(p > MIN_SPREAD_PROBABILITY && p < MAX_SPREAD_PROBABILITY);
}

// ---- Section intensity ----

#[test]
fn test_sections_score_fire_density() {
    let bounds = WorldBounds::new(120.0, 120.0);
    let grid = {
        let mut g = FireGrid::new(bounds, 6.0);
        // Two burning cells in the top-left quadrant.
        g.ignite(1, 1);
        g.ignite(1, 2);
        g
    };
    let mut sections = SectionMap::new(bounds, 2, 2);
    sections.recompute(&grid, &[], 0.0);

    let scores = sections.scores();
    assert!(scores[0] > 0.0, "fire section must score positive");
    assert_eq!(scores[1], 0.0);
    assert_eq!(scores[2], 0.0);
    assert_eq!(scores[3], 0.0);
}

#[test]
fn test_sections_reward_undercoverage() {
    let bounds = WorldBounds::new(120.0, 120.0);
    let grid = FireGrid::new(bounds, 6.0);
    let mut sections = SectionMap::new(bounds, 2, 2);

    // Three actives in the top-left section, none elsewhere; ideal is 2.
    let actives = [
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 20.0),
        Vec2::new(30.0, 30.0),
    ];
    sections.recompute(&grid, &actives, 2.0);

    let scores = sections.scores();
    // Overcrowded section floors at zero, never negative.
    assert_eq!(scores[0], 0.0);
    // Empty sections score their full coverage deficit.
    assert_eq!(scores[1], 2.0);
    assert_eq!(scores[2], 2.0);
    assert_eq!(scores[3], 2.0);
}

#[test]
fn test_best_target_prefers_near_sections() {
    let bounds = WorldBounds::new(120.0, 120.0);
    let grid = FireGrid::new(bounds, 6.0);
    let mut sections = SectionMap::new(bounds, 2, 2);
    // Equal deficits everywhere: inverse distance decides.
    sections.recompute(&grid, &[], 1.0);

    let from = Vec2::new(10.0, 10.0);
    let target = sections.best_target(from).unwrap();
    assert_eq!(target, sections.center(0, 0));
}

#[test]
fn test_best_target_none_when_all_scores_zero() {
    let bounds = WorldBounds::new(120.0, 120.0);
    let grid = FireGrid::new(bounds, 6.0);
    let mut sections = SectionMap::new(bounds, 2, 2);
    sections.recompute(&grid, &[], 0.0);
    assert!(sections.best_target(Vec2::new(10.0, 10.0)).is_none());
}

#[test]
fn test_distant_high_score_can_outrank_near_low_score() {
    let bounds = WorldBounds::new(1200.0, 1200.0);
    let mut grid = FireGrid::new(bounds, 6.0);
    // Heavy fire in the far bottom-right section.
    for row in 150..170 {
        for col in 150..170 {
            grid.ignite(row, col);
        }
    }
    let mut sections = SectionMap::new(bounds, 2, 2);
    // Small uniform deficit plus a big fire term far away.
    sections.recompute(&grid, &[], 0.1);

    let from = Vec2::new(100.0, 100.0);
    let target = sections.best_target(from).unwrap();
    assert_eq!(target, sections.center(1, 1));
}
