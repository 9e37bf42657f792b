use std::ops::Range;

use log::debug;

use crate::board::Pos;
use crate::error::Result;
use crate::{Minefield, Tile};

/// Relative offsets {-1, 0, 1} along one axis, clipped at the edges so that
/// `index + offset` always stays within `0..axis_len`. Requires a non-empty
/// axis and `index < axis_len`.
pub fn offset_bounds(axis_len: u32, index: u32) -> Range<i32> {
  debug_assert!(axis_len > 0 && index < axis_len);
  let start = if index == 0 { 0 } else { -1 };
  let end = if index == axis_len - 1 { 1 } else { 2 };
  start..end
}

/// Counts the mines among the up-to-8 neighbours of `pos`. The candidate set
/// includes `pos` itself, which never contributes because the solver only
/// calls this on non-mine tiles.
pub fn count_mines(field: &Minefield, pos: Pos) -> Result<u8> {
  field.cell(pos)?;
  let mut mines = 0;
  for row_off in offset_bounds(field.rows(), pos.row as u32) {
    for col_off in offset_bounds(field.cols(), pos.col as u32) {
      if field.cell(pos + (row_off, col_off))?.is_mine() {
        mines += 1;
      }
    }
  }
  Ok(mines)
}

/// Replaces every non-mine tile with its neighbour mine count, in place.
/// Counts read only the mine predicate, which solving never alters, so the
/// row-major in-place writes cannot skew later counts and a second pass
/// yields the same board.
pub fn solve(field: &mut Minefield) -> Result<()> {
  debug!("solving {}x{} minefield", field.rows(), field.cols());
  for pos in field.positions() {
    if !field[pos].is_mine() {
      field[pos] = Tile::Count(count_mines(field, pos)?);
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::board::Board;
  use crate::error::Error;
  use crate::Tile::{Count, Empty, Mine};

  #[test]
  fn bounds_at_axis_start() {
    assert_eq!(offset_bounds(5, 0), 0..2);
  }

  #[test]
  fn bounds_at_axis_end() {
    assert_eq!(offset_bounds(5, 4), -1..1);
  }

  #[test]
  fn bounds_in_axis_interior() {
    assert_eq!(offset_bounds(5, 2), -1..2);
  }

  #[test]
  fn bounds_on_single_cell_axis() {
    assert_eq!(offset_bounds(1, 0), 0..1);
  }

  #[should_panic]
  #[test]
  fn bounds_reject_an_empty_axis() {
    offset_bounds(0, 0);
  }

  #[test]
  fn counts_clip_at_corners_edges_and_interior() {
    // A corner sees 3 neighbours, a non-corner edge 5, the interior all 8.
    let all_mines = Board::from_rows(vec![vec![Mine; 3]; 3]);
    let cases = [(Pos::new(0, 0), 3), (Pos::new(0, 1), 5), (Pos::new(1, 1), 8)];
    for (pos, expected) in cases {
      let mut field = all_mines.clone();
      field[pos] = Empty;
      assert_eq!(count_mines(&field, pos), Ok(expected));
    }
  }

  #[test]
  fn counting_outside_the_board_is_rejected() {
    let field = Board::from_rows(vec![vec![Empty]]);
    assert!(matches!(
      count_mines(&field, Pos::new(1, 0)),
      Err(Error::IndexOutOfRange { .. })
    ));
  }

  #[test]
  fn solves_two_by_two() {
    let mut field = Board::from_rows(vec![vec![Empty, Empty], vec![Mine, Empty]]);
    solve(&mut field).unwrap();
    let expected = Board::from_rows(vec![vec![Count(1), Count(1)], vec![Mine, Count(1)]]);
    assert_eq!(field, expected);
  }

  #[test]
  fn solves_three_by_three() {
    let mut field = Board::from_rows(vec![
      vec![Mine, Empty, Empty],
      vec![Empty, Mine, Empty],
      vec![Empty, Empty, Empty],
    ]);
    solve(&mut field).unwrap();
    let expected = Board::from_rows(vec![
      vec![Mine, Count(2), Count(1)],
      vec![Count(2), Mine, Count(1)],
      vec![Count(1), Count(1), Count(1)],
    ]);
    assert_eq!(field, expected);
  }

  #[test]
  fn solves_single_cell_board() {
    let mut field = Board::from_rows(vec![vec![Empty]]);
    solve(&mut field).unwrap();
    assert_eq!(field[Pos::new(0, 0)], Count(0));
  }

  #[test]
  fn leaves_mines_untouched() {
    let mut field = Board::from_rows(vec![vec![Mine, Mine], vec![Mine, Mine]]);
    solve(&mut field).unwrap();
    assert!(field.iter().all(|tile| tile.is_mine()));
  }

  #[test]
  fn solving_twice_yields_the_same_board() {
    let mut field = Board::from_rows(vec![
      vec![Empty, Mine, Empty],
      vec![Empty, Empty, Empty],
    ]);
    solve(&mut field).unwrap();
    let once = field.clone();
    solve(&mut field).unwrap();
    assert_eq!(field, once);
  }

  #[test]
  fn solved_board_renders_digits_and_mines() {
    let mut field = Board::from_rows(vec![vec![Empty, Empty], vec![Mine, Empty]]);
    assert_eq!(field.to_string(), "- -\n# -\n");
    solve(&mut field).unwrap();
    assert_eq!(field.to_string(), "1 1\n# 1\n");
  }
}
