//! Tile grid and collision queries
//!
//! The arena is a fixed-size grid of wall/open cells. Generation mixes a
//! deterministic wall lattice with random scatter, then forces three safe
//! zones open so both spawn points (and the map center) are always usable.
//! Connectivity between zones is not guaranteed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

/// The tile grid defining walkable space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Arena {
    /// Generate a fresh arena.
    ///
    /// Border cells are always walls. Interior cells become walls on a
    /// row/column lattice (every 3rd row crossing every 2nd column) plus an
    /// independent [`WALL_CHANCE`] roll per remaining cell. The two diagonal
    /// 3x3 spawn zones and the central 5x5 zone are then forced open.
    pub fn generate(rng: &mut Pcg32) -> Self {
        let mut arena = Self::open_box();
        for row in 1..ARENA_ROWS - 1 {
            for col in 1..ARENA_COLS - 1 {
                let lattice = row % 3 == 0 && col % 2 == 0;
                if lattice || rng.random::<f32>() < WALL_CHANCE {
                    arena.set(col, row, Cell::Wall);
                }
            }
        }

        // Spawn safe zones, kept off the border so the outer wall stays solid
        arena.clear_region(1..=3, 1..=3);
        arena.clear_region(ARENA_COLS - 4..=ARENA_COLS - 2, ARENA_ROWS - 4..=ARENA_ROWS - 2);

        // Central safe zone
        let (mid_c, mid_r) = (ARENA_COLS / 2, ARENA_ROWS / 2);
        arena.clear_region(mid_c - 2..=mid_c + 2, mid_r - 2..=mid_r + 2);

        arena
    }

    /// An arena with border walls only. Used by the demo binary and by tests
    /// that need predictable geometry.
    pub fn open_box() -> Self {
        let mut arena = Self {
            cols: ARENA_COLS,
            rows: ARENA_ROWS,
            cells: vec![Cell::Open; ARENA_COLS * ARENA_ROWS],
        };
        for col in 0..ARENA_COLS {
            arena.set(col, 0, Cell::Wall);
            arena.set(col, ARENA_ROWS - 1, Cell::Wall);
        }
        for row in 0..ARENA_ROWS {
            arena.set(0, row, Cell::Wall);
            arena.set(ARENA_COLS - 1, row, Cell::Wall);
        }
        arena
    }

    fn clear_region(
        &mut self,
        cols: std::ops::RangeInclusive<usize>,
        rows: std::ops::RangeInclusive<usize>,
    ) {
        for row in rows {
            for col in cols.clone() {
                self.set(col, row, Cell::Open);
            }
        }
    }

    pub(crate) fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Cell at a grid coordinate, or `None` outside the grid
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(self.cells[row as usize * self.cols + col as usize])
    }

    /// Whether the cell under a continuous coordinate is a wall.
    ///
    /// Out-of-grid coordinates report no wall. That leniency keeps edge
    /// overshoot (a projectile half a pixel past the border) from being an
    /// error case; it is not a boundary guarantee.
    pub fn is_wall(&self, point: Vec2) -> bool {
        let col = (point.x / TILE_SIZE).floor() as i32;
        let row = (point.y / TILE_SIZE).floor() as i32;
        self.cell(col, row) == Some(Cell::Wall)
    }

    /// Whether an axis-aligned box overlaps any wall cell.
    ///
    /// The overlapped cell range is the inclusive floored span of each edge.
    /// Cells outside the grid never collide (same leniency as [`is_wall`]).
    ///
    /// [`is_wall`]: Arena::is_wall
    pub fn rect_collides(&self, min: Vec2, size: Vec2) -> bool {
        let c0 = (min.x / TILE_SIZE).floor() as i32;
        let c1 = ((min.x + size.x) / TILE_SIZE).floor() as i32;
        let r0 = (min.y / TILE_SIZE).floor() as i32;
        let r1 = ((min.y + size.y) / TILE_SIZE).floor() as i32;
        for row in r0..=r1 {
            for col in c0..=c1 {
                if self.cell(col, row) == Some(Cell::Wall) {
                    return true;
                }
            }
        }
        false
    }

    /// Grid width in tiles
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in tiles
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Arena width in world units
    pub fn width(&self) -> f32 {
        self.cols as f32 * TILE_SIZE
    }

    /// Arena height in world units
    pub fn height(&self) -> f32 {
        self.rows as f32 * TILE_SIZE
    }
}
