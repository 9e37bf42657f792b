use core::fmt;

use log::debug;
use rand::prelude::SliceRandom;
use rand::RngCore;

use crate::board::Board;
use crate::error::{Error, Result};

pub mod board;
pub mod error;
pub mod sweep;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Tile {
  /// Non-mine tile whose neighbour count has not been computed yet.
  Empty,
  Mine,
  /// Non-mine tile holding its neighbour mine count, in 0..=8.
  Count(u8),
}

impl Tile {
  pub fn is_mine(self) -> bool {
    matches!(self, Tile::Mine)
  }
}

impl fmt::Display for Tile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Tile::Empty => write!(f, "-"),
      Tile::Mine => write!(f, "#"),
      Tile::Count(mines) => write!(f, "{}", mines),
    }
  }
}

pub type Minefield = Board<Tile>;

// Two empty tiles to one mine, the classic 2/3-1/3 bias.
static TILE_POOL: [Tile; 3] = [Tile::Empty, Tile::Empty, Tile::Mine];

pub struct Generator {
  rng: Box<dyn RngCore>,
}

impl Generator {
  pub fn new() -> Self {
    Self {
      rng: Box::new(rand::thread_rng()),
    }
  }

  /// Uses the given rng for tile sampling, so generation can be seeded.
  pub fn with_rng(rng: impl RngCore + 'static) -> Self {
    Self { rng: Box::new(rng) }
  }

  /// Generates a rows x cols minefield where each tile is independently a
  /// mine with probability 1/3.
  pub fn generate(&mut self, rows: u32, cols: u32) -> Result<Minefield> {
    if rows == 0 || cols == 0 {
      return Err(Error::InvalidDimension { rows, cols });
    }
    debug!("generating {}x{} minefield", rows, cols);
    let mut field = Minefield::new(rows, cols, Tile::Empty);
    for tile in field.iter_mut() {
      *tile = *TILE_POOL.choose(&mut self.rng).unwrap();
    }
    Ok(field)
  }
}

impl Default for Generator {
  fn default() -> Self {
    Self::new()
  }
}
