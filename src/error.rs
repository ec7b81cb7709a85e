use grid_util::point::Point;
use thiserror::Error;

/// Rejected grid accesses and path queries.
///
/// An unreachable goal is not an error: the solvers report it as an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The cell lies outside `[0, width) x [0, height)`.
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Point,
        width: usize,
        height: usize,
    },
    /// A start or goal cell is blocked.
    #[error("endpoint {cell} is blocked")]
    InvalidEndpoint { cell: Point },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = PathError::OutOfBounds {
            cell: Point::new(10, -1),
            width: 10,
            height: 10,
        };
        assert!(err.to_string().contains("10x10 grid"));
        let err = PathError::InvalidEndpoint {
            cell: Point::new(2, 3),
        };
        assert!(err.to_string().starts_with("endpoint"));
    }
}
