//! Section intensity map — the task-allocation heuristic.
//!
//! The world is partitioned into a coarse grid of equal sections. Each tick
//! every section gets a score combining normalized fire density with how far
//! the section is below its ideal share of active boids. Scores are
//! comparison-only scalars, deliberately not normalized to probabilities.

use glam::Vec2;

use emberswarm_core::constants::{FIRE_INTENSITY_BIAS_FACTOR, MIN_SECTION_DISTANCE};
use emberswarm_core::enums::CellState;
use emberswarm_core::types::WorldBounds;

use crate::grid::FireGrid;

/// Derived per-section scores, fully recomputed each tick. Row-major.
#[derive(Debug, Clone)]
pub struct SectionMap {
    columns: usize,
    rows: usize,
    section_width: f32,
    section_height: f32,
    scores: Vec<f32>,
}

impl SectionMap {
    pub fn new(bounds: WorldBounds, columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            section_width: bounds.width / columns as f32,
            section_height: bounds.height / rows as f32,
            scores: vec![0.0; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row-major score slice, for snapshot building.
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Section containing a world point, clamped into range so positions
    /// transiently outside the world still land in an edge section.
    pub fn section_of(&self, p: Vec2) -> (usize, usize) {
        let col = ((p.x / self.section_width) as i64).clamp(0, self.columns as i64 - 1) as usize;
        let row = ((p.y / self.section_height) as i64).clamp(0, self.rows as i64 - 1) as usize;
        (row, col)
    }

    /// World-space center of a section.
    pub fn center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.section_width,
            (row as f32 + 0.5) * self.section_height,
        )
    }

    /// Recompute all scores from the grid plus the positions of boids that
    /// are actively seeking (not returning, not retiring).
    ///
    /// score = burning / section_cell_area * FIRE_INTENSITY_BIAS_FACTOR
    ///       + max(0, ideal_per_section - active_count)
    pub fn recompute(&mut self, grid: &FireGrid, active_positions: &[Vec2], ideal_per_section: f32) {
        let mut burning = vec![0usize; self.scores.len()];
        let mut active = vec![0usize; self.scores.len()];

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.cell(row, col).state == CellState::Burning {
                    let (srow, scol) = self.section_of(grid.cell_center(row, col));
                    burning[srow * self.columns + scol] += 1;
                }
            }
        }

        for &pos in active_positions {
            let (srow, scol) = self.section_of(pos);
            active[srow * self.columns + scol] += 1;
        }

        let section_cell_area =
            (grid.width() * grid.height()) as f32 / (self.columns * self.rows) as f32;

        for i in 0..self.scores.len() {
            let fire_term =
                burning[i] as f32 / section_cell_area * FIRE_INTENSITY_BIAS_FACTOR;
            let coverage_term = (ideal_per_section - active[i] as f32).max(0.0);
            self.scores[i] = (fire_term + coverage_term).max(0.0);
        }
    }

    /// The section center a boid at `from` should bias toward: argmax of
    /// score weighted by inverse distance, floored so a section underfoot
    /// cannot blow the weight up. `None` when no section has a positive
    /// weighted score.
    pub fn best_target(&self, from: Vec2) -> Option<Vec2> {
        let mut best: Option<Vec2> = None;
        let mut best_weighted = 0.0f32;
        for row in 0..self.rows {
            for col in 0..self.columns {
                let score = self.scores[row * self.columns + col];
                if score <= 0.0 {
                    continue;
                }
                let center = self.center(row, col);
                let distance = from.distance(center).max(MIN_SECTION_DISTANCE);
                let weighted = score / distance;
                if weighted > best_weighted {
                    best_weighted = weighted;
                    best = Some(center);
                }
            }
        }
        best
    }
}
