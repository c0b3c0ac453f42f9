use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 2x2, got {width}x{height}")]
    InvalidDimension { width: u8, height: u8 },
}

pub type Result<T> = core::result::Result<T, MazeError>;
