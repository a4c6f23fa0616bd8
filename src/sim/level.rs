//! Procedural level generation
//!
//! A level is a grid of brick type codes (0 = empty). Each cell takes two
//! uniform draws from the injected RNG:
//!
//! 1. `roll < empty` leaves the cell empty (20%).
//! 2. Otherwise the second roll is matched against cumulative bands in the
//!    fixed order Hard, Item, Slow, Fast, Split; anything past the last
//!    band is a Normal brick.
//!
//! The Hard band widens by 0.01 every 5 levels up to 0.15. The other special
//! bands are 0.05 each. Rows grow by one every 2 levels from 5 up to 15.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::state::{Brick, BrickKind};
use crate::consts::*;

/// Immutable grid of type codes, always at least one row of `BRICK_COLS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    cells: Vec<[u8; BRICK_COLS]>,
}

impl LevelGrid {
    /// Build a grid from externally supplied rows.
    ///
    /// Rows are padded/truncated to `BRICK_COLS`, unknown codes become Normal
    /// bricks, and a grid with no bricks at all gets one Normal brick so a level
    /// can never start already cleared.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let mut cells: Vec<[u8; BRICK_COLS]> = rows
            .into_iter()
            .map(|row| {
                let mut out = [0u8; BRICK_COLS];
                for (cell, code) in out.iter_mut().zip(row) {
                    *cell = match code {
                        0 => 0,
                        c if BrickKind::from_code(c).is_some() => c,
                        c => {
                            log::warn!("Unknown brick code {}, using Normal", c);
                            BrickKind::Normal.code()
                        }
                    };
                }
                out
            })
            .collect();

        if cells.is_empty() {
            cells.push([0; BRICK_COLS]);
        }
        let mut grid = Self { cells };
        grid.ensure_playable();
        grid
    }

    fn ensure_playable(&mut self) {
        if self.brick_count() == 0 {
            self.cells[0][BRICK_COLS / 2] = BrickKind::Normal.code();
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        BRICK_COLS
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Occupied cells as `(row, col, kind)`
    pub fn bricks(&self) -> impl Iterator<Item = (usize, usize, BrickKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, &code)| BrickKind::from_code(code).map(|kind| (r, c, kind)))
        })
    }

    pub fn brick_count(&self) -> usize {
        self.bricks().count()
    }
}

/// Number of brick rows for a level
pub fn rows_for_level(level: u32) -> usize {
    (BRICK_BASE_ROWS + (level / 2) as usize).clamp(1, BRICK_MAX_ROWS)
}

/// Probability bands for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeBands {
    pub empty: f32,
    pub hard: f32,
    pub item: f32,
    pub slow: f32,
    pub fast: f32,
    pub split: f32,
}

impl TypeBands {
    pub fn for_level(level: u32) -> Self {
        Self {
            empty: 0.2,
            hard: (0.05 + 0.01 * (level / 5) as f32).min(0.15),
            item: 0.05,
            slow: 0.05,
            fast: 0.05,
            split: 0.05,
        }
    }

    /// Cell code for the two uniform rolls in `[0, 1)`
    pub fn classify(&self, empty_roll: f32, kind_roll: f32) -> u8 {
        if empty_roll < self.empty {
            return 0;
        }
        let bands = [
            (self.hard, BrickKind::Hard),
            (self.item, BrickKind::Item),
            (self.slow, BrickKind::Slow),
            (self.fast, BrickKind::Fast),
            (self.split, BrickKind::Split),
        ];
        let mut upper = 0.0;
        for (width, kind) in bands {
            upper += width;
            if kind_roll < upper {
                return kind.code();
            }
        }
        BrickKind::Normal.code()
    }
}

/// Generate the grid for `level` (1-based)
pub fn generate_level<R: Rng + ?Sized>(level: u32, rng: &mut R) -> LevelGrid {
    let bands = TypeBands::for_level(level);
    let rows: Vec<Vec<u8>> = (0..rows_for_level(level))
        .map(|_| {
            (0..BRICK_COLS)
                .map(|_| {
                    let empty_roll: f32 = rng.random();
                    let kind_roll: f32 = rng.random();
                    bands.classify(empty_roll, kind_roll)
                })
                .collect::<Vec<u8>>()
        })
        .collect();
    LevelGrid::from_rows(rows)
}

/// Position bricks for `grid` across a field of size `bounds`
pub fn layout_bricks(grid: &LevelGrid, bounds: Vec2) -> Vec<Brick> {
    let cols = grid.cols() as f32;
    let width = ((bounds.x - BRICK_PADDING * cols) / cols).max(1.0);
    let height = bounds.y * BRICK_HEIGHT_FRACTION;
    let left = BRICK_PADDING / 2.0;
    let top = bounds.y * BRICK_TOP_FRACTION;

    grid.bricks()
        .map(|(r, c, kind)| {
            let x = left + c as f32 * (width + BRICK_PADDING);
            let y = top + r as f32 * (height + BRICK_PADDING);
            Brick::new(Rect::new(x, y, width, height), kind)
        })
        .collect()
}
