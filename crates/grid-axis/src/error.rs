/// Coarse classification of [`AxisError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisErrorKind {
    /// The call was given nothing usable to work with.
    Input,
    /// More distinct positions were observed than there are slots.
    Overflow,
}

/// Errors returned by the axis solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    #[error("no coordinates supplied")]
    Empty,
    #[error("coordinate #{index} is not finite")]
    NonFiniteCoordinate { index: usize },
    #[error("board length must be finite and > 0 (got {length})")]
    InvalidBoardLength { length: f64 },
    #[error("too many unique positions ({clusters}) observed for {slots} slots")]
    TooManyPositions { clusters: usize, slots: usize },
}

impl AxisError {
    pub fn kind(&self) -> AxisErrorKind {
        match self {
            AxisError::Empty
            | AxisError::NonFiniteCoordinate { .. }
            | AxisError::InvalidBoardLength { .. } => AxisErrorKind::Input,
            AxisError::TooManyPositions { .. } => AxisErrorKind::Overflow,
        }
    }
}
