//! Wildfire spread automaton.
//!
//! The grid advances copy-then-mutate: every transition and spread roll in a
//! tick reads the same pre-tick snapshot, so an ignition can never cascade
//! through freshly ignited cells within one tick.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emberswarm_core::constants::*;
use emberswarm_core::enums::CellState;
use emberswarm_core::types::WorldBounds;

/// One fire-grid cell. `timer` is meaningful only while `Burning`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub timer: u32,
}

/// What one `advance` call did, for event emission and the population
/// controller.
#[derive(Debug, Clone, Default)]
pub struct AdvanceReport {
    /// Burning cells after the tick committed.
    pub burning: usize,
    /// Cells that transitioned Burning -> Burnt this tick.
    pub burned_out: usize,
    /// Cells ignited this tick (spread plus spontaneous).
    pub ignited: Vec<(usize, usize)>,
}

/// A burning cell picked as a steering target.
#[derive(Debug, Clone, Copy)]
pub struct FireTarget {
    pub row: usize,
    pub col: usize,
    pub center: Vec2,
    pub distance: f32,
}

/// Fixed-size raster of cells, row-major, owned by the engine for the
/// lifetime of the simulation. Never resized.
#[derive(Debug, Clone)]
pub struct FireGrid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl FireGrid {
    /// Build an all-unburnt grid covering the world. Dimensions are the
    /// world extent divided by the cell size, truncated.
    pub fn new(bounds: WorldBounds, cell_size: f32) -> Self {
        let width = (bounds.width / cell_size) as usize;
        let height = (bounds.height / cell_size) as usize;
        Self {
            width,
            height,
            cell_size,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Row-major cell slice, for read-only consumers (snapshot, sections).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Overwrite a cell directly. Scenario setup only; the automaton itself
    /// goes through `advance`/`ignite`/`extinguish`.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.idx(row, col);
        self.cells[i] = cell;
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_size + self.cell_size / 2.0,
            row as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }

    /// Map a world coordinate to (row, col); `None` if outside the grid.
    pub fn cell_at(&self, p: Vec2) -> Option<(usize, usize)> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let col = (p.x / self.cell_size) as usize;
        let row = (p.y / self.cell_size) as usize;
        if row < self.height && col < self.width {
            Some((row, col))
        } else {
            None
        }
    }

    /// Count of currently burning cells.
    pub fn burning_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state == CellState::Burning)
            .count()
    }

    /// Force a cell to start burning with a fresh timer, whatever its prior
    /// state. Used for external ignition requests.
    pub fn ignite(&mut self, row: usize, col: usize) {
        let i = self.idx(row, col);
        self.cells[i] = Cell {
            state: CellState::Burning,
            timer: BURNING_DURATION,
        };
    }

    /// External "ignite at world coordinate" request. Out-of-bounds requests
    /// are ignored; returns the ignited cell otherwise.
    pub fn ignite_at(&mut self, p: Vec2) -> Option<(usize, usize)> {
        let (row, col) = self.cell_at(p)?;
        self.ignite(row, col);
        Some((row, col))
    }

    /// Put out a burning cell. Returns false if the cell is not burning
    /// (e.g. another boid got there first this tick).
    pub fn extinguish(&mut self, row: usize, col: usize) -> bool {
        let i = self.idx(row, col);
        if self.cells[i].state == CellState::Burning {
            self.cells[i] = Cell {
                state: CellState::Extinguished,
                timer: 0,
            };
            true
        } else {
            false
        }
    }

    /// Nearest burning cell center within `radius` of `from`, by Euclidean
    /// distance to cell centers. Linear scan over the raster.
    pub fn nearest_burning_within(&self, from: Vec2, radius: f32) -> Option<FireTarget> {
        let mut best: Option<FireTarget> = None;
        let mut best_distance = radius;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[self.idx(row, col)].state != CellState::Burning {
                    continue;
                }
                let center = self.cell_center(row, col);
                let distance = from.distance(center);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(FireTarget {
                        row,
                        col,
                        center,
                        distance,
                    });
                }
            }
        }
        best
    }

    /// Advance the automaton by one tick.
    ///
    /// All reads go against a snapshot of the pre-tick grid; writes go to the
    /// next grid, which is committed at the end. For each snapshot-burning
    /// cell: the timer counts down (Burnt at zero), and each 4-connected
    /// snapshot-unburnt neighbor ignites with `spread_probability`. One
    /// independent spontaneous-ignition trial then picks a random cell away
    /// from the border.
    pub fn advance(&mut self, rng: &mut ChaCha8Rng, spread_probability: f32) -> AdvanceReport {
        let snapshot = self.cells.clone();
        let mut next = snapshot.clone();
        let mut report = AdvanceReport::default();

        for row in 0..self.height {
            for col in 0..self.width {
                let i = self.idx(row, col);
                if snapshot[i].state != CellState::Burning {
                    continue;
                }

                let cell = &mut next[i];
                cell.timer = cell.timer.saturating_sub(1);
                if cell.timer == 0 && cell.state == CellState::Burning {
                    cell.state = CellState::Burnt;
                    report.burned_out += 1;
                }

                // Spread decisions read the snapshot, never the next grid.
                for (dr, dc) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                    let nrow = row as i64 + dr;
                    let ncol = col as i64 + dc;
                    if nrow < 0 || nrow >= self.height as i64 || ncol < 0 || ncol >= self.width as i64
                    {
                        continue;
                    }
                    let ni = self.idx(nrow as usize, ncol as usize);
                    if snapshot[ni].state != CellState::Unburnt {
                        continue;
                    }
                    if rng.gen::<f32>() < spread_probability {
                        if next[ni].state != CellState::Burning {
                            report.ignited.push((nrow as usize, ncol as usize));
                        }
                        next[ni] = Cell {
                            state: CellState::Burning,
                            timer: BURNING_DURATION,
                        };
                    }
                }
            }
        }

        // One spontaneous-ignition trial per tick, away from the border.
        // Grids too small for the margin skip the trial.
        if self.height > 2 * IGNITION_BORDER_MARGIN
            && self.width > 2 * IGNITION_BORDER_MARGIN
            && rng.gen::<f32>() < RANDOM_IGNITION_PROB
        {
            let row = rng.gen_range(IGNITION_BORDER_MARGIN..self.height - IGNITION_BORDER_MARGIN);
            let col = rng.gen_range(IGNITION_BORDER_MARGIN..self.width - IGNITION_BORDER_MARGIN);
            let i = self.idx(row, col);
            if next[i].state == CellState::Unburnt {
                next[i] = Cell {
                    state: CellState::Burning,
                    timer: BURNING_DURATION,
                };
                report.ignited.push((row, col));
            }
        }

        self.cells = next;
        report.burning = self.burning_count();
        report
    }
}

/// Spread probability for the coming tick, derived from the previous tick's
/// fire load. Interpolates from MAX_SPREAD_PROBABILITY at light load down to
/// MIN_SPREAD_PROBABILITY at heavy load, keeping the burning-cell count
/// inside a stable band.
pub fn adaptive_spread_probability(burning: usize) -> f32 {
    // Saturate outside the band so both endpoints are hit exactly; the f32
    // interpolation below would otherwise land a rounding error away.
    if burning <= MIN_SPREAD_FREQ_COUNT {
        return MAX_SPREAD_PROBABILITY;
    }
    if burning >= MAX_SPREAD_FREQ_COUNT {
        return MIN_SPREAD_PROBABILITY;
    }
    let low = MIN_SPREAD_FREQ_COUNT as f32;
    let high = MAX_SPREAD_FREQ_COUNT as f32;
    let t = (burning as f32 - low) / (high - low);
    MAX_SPREAD_PROBABILITY - t * (MAX_SPREAD_PROBABILITY - MIN_SPREAD_PROBABILITY)
}
