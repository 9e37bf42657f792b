use crate::board::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("invalid dimensions {rows}x{cols}: rows and columns must be positive")]
  InvalidDimension { rows: u32, cols: u32 },
  #[error("position {pos:?} is outside the {rows}x{cols} board")]
  IndexOutOfRange { pos: Pos, rows: u32, cols: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
