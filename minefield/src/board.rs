use core::fmt;
use std::ops::{Add, Index, IndexMut};

use crate::error::{Error, Result};

/// A position on a board. Offsets may momentarily step outside the board;
/// the checked accessors reject those.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
  pub row: i32,
  pub col: i32,
}

impl Pos {
  pub const fn new(row: i32, col: i32) -> Pos {
    Pos { row, col }
  }
}

impl fmt::Debug for Pos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}

impl Add<(i32, i32)> for Pos {
  type Output = Pos;

  fn add(self, (row_off, col_off): (i32, i32)) -> Self::Output {
    Pos::new(self.row + row_off, self.col + col_off)
  }
}

/// A rectangular board with fixed dimensions, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board<T> {
  rows: u32,
  cols: u32,
  cells: Vec<T>,
}

impl<T> Board<T> {
  pub fn new(rows: u32, cols: u32, default: T) -> Self
  where
    T: Clone,
  {
    Self {
      rows,
      cols,
      cells: vec![default; (rows * cols) as usize],
    }
  }

  /// Builds a board from row vectors. All rows must have equal length.
  pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
    let cols = rows.first().map_or(0, Vec::len);
    assert!(
      rows.iter().all(|row| row.len() == cols),
      "all rows must have length {}",
      cols
    );
    Self {
      rows: rows.len() as u32,
      cols: cols as u32,
      cells: rows.into_iter().flatten().collect(),
    }
  }

  pub fn rows(&self) -> u32 {
    self.rows
  }

  pub fn cols(&self) -> u32 {
    self.cols
  }

  fn pos_to_index(&self, pos: Pos) -> Option<usize> {
    match (usize::try_from(pos.row), usize::try_from(pos.col)) {
      (Ok(row), Ok(col)) if row < self.rows as usize && col < self.cols as usize => {
        Some(col + row * (self.cols as usize))
      }
      _ => None,
    }
  }

  pub fn get(&self, pos: Pos) -> Option<&T> {
    self.pos_to_index(pos).and_then(|i| self.cells.get(i))
  }

  pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self.pos_to_index(pos).and_then(|i| self.cells.get_mut(i))
  }

  pub fn cell(&self, pos: Pos) -> Result<&T> {
    self.get(pos).ok_or(Error::IndexOutOfRange {
      pos,
      rows: self.rows,
      cols: self.cols,
    })
  }

  pub fn positions(&self) -> BoardPositions {
    BoardPositions::new(self.rows, self.cols)
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.cells.iter()
  }

  pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
    self.cells.iter_mut()
  }
}

impl<T> Index<Pos> for Board<T> {
  type Output = T;

  fn index(&self, index: Pos) -> &Self::Output {
    self.get(index).unwrap_or_else(|| {
      panic!(
        "Cannot access position {:?} on board with size {}x{}",
        index, self.rows, self.cols
      )
    })
  }
}

impl<T> IndexMut<Pos> for Board<T> {
  fn index_mut(&mut self, index: Pos) -> &mut T {
    let (rows, cols) = (self.rows, self.cols);
    self.get_mut(index).unwrap_or_else(|| {
      panic!(
        "Cannot mut-access position {:?} on board with size {}x{}",
        index, rows, cols
      )
    })
  }
}

impl<T: fmt::Display> fmt::Display for Board<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.cols == 0 {
      return Ok(());
    }
    for row in self.cells.chunks(self.cols as usize) {
      for (i, cell) in row.iter().enumerate() {
        if i > 0 {
          write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

/// Row-major iterator over all positions of a board.
pub struct BoardPositions {
  next_pos: Pos,
  row_end: i32,
  col_end: i32,
}

impl BoardPositions {
  fn new(rows: u32, cols: u32) -> Self {
    let row_end = rows as i32;
    Self {
      next_pos: if cols == 0 { Pos::new(row_end, 0) } else { Pos::new(0, 0) },
      row_end,
      col_end: cols as i32,
    }
  }
}

impl Iterator for BoardPositions {
  type Item = Pos;

  fn next(&mut self) -> Option<Self::Item> {
    let pos = &mut self.next_pos;
    if pos.row >= self.row_end {
      None
    } else {
      let result = *pos;
      pos.col += 1;
      if pos.col >= self.col_end {
        pos.col = 0;
        pos.row += 1;
      }
      Some(result)
    }
  }
}
