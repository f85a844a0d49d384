//! Errors reported by shape computations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The exact area does not fit in a 32-bit integer.
    #[error("Area of {width}x{height} rectangle does not fit in i32")]
    AreaOverflow { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, ShapeError>;

#[test]
fn test_overflow_message_names_dimensions() {
    let err = ShapeError::AreaOverflow { width: i32::MAX, height: 2 };
    assert_eq!(
        err.to_string(),
        format!("Area of {}x2 rectangle does not fit in i32", i32::MAX)
    );
}
