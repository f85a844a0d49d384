use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, ShapeError};
use crate::shape::Shape;

/// Width and height of a rectangle. Any pair of integers is accepted,
/// zero and negative values included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    width: i32,
    height: i32
}

impl Rectangle {
    pub fn new(width: i32, height: i32) -> Self {
        let mut rect = Self::default();
        rect.set_values(width, height);
        rect
    }

    /// Set width and height of the rectangle.
    pub fn set_values(&mut self, width: i32, height: i32) {
        trace!(
            old_width = self.width,
            old_height = self.height,
            width,
            height,
            "Setting rectangle dimensions"
        );
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Calculates the rectangle area.
    ///
    /// The result is `i64`, wider than the `i32` dimensions, so the product
    /// of any two `i32` values is exact. Use [`Rectangle::checked_area`] for
    /// an `i32` result.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Area narrowed back to `i32`.
    pub fn checked_area(&self) -> Result<i32> {
        i32::try_from(self.area()).map_err(|_| {
            debug!(width = self.width, height = self.height, "Rectangle area overflows i32");
            ShapeError::AreaOverflow {
                width: self.width,
                height: self.height,
            }
        })
    }
}

impl Shape for Rectangle {
    fn area(&self) -> i64 {
        Rectangle::area(self)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[test]
fn test_default_is_empty() {
    let rect = Rectangle::default();
    assert_eq!(rect.width(), 0);
    assert_eq!(rect.height(), 0);
    assert_eq!(rect.area(), 0);
}

#[test]
fn test_area_examples() {
    let mut rect = Rectangle::default();

    rect.set_values(3, 4);
    assert_eq!(rect.area(), 12);

    rect.set_values(0, 5);
    assert_eq!(rect.area(), 0);

    rect.set_values(-2, 3);
    assert_eq!(rect.area(), -6);
}

#[test]
fn test_set_values_supersedes() {
    let mut rect = Rectangle::new(7, 9);
    rect.set_values(2, 5);
    assert_eq!(rect, Rectangle::new(2, 5));
    assert_eq!(rect.area(), 10);
}

#[test]
fn test_area_is_idempotent() {
    let rect = Rectangle::new(6, 7);
    let first = rect.area();
    assert_eq!(rect.area(), first);
    assert_eq!(rect.area(), first);
}

#[test]
fn test_area_at_extremes() {
    let rect = Rectangle::new(i32::MIN, i32::MIN);
    assert_eq!(rect.area(), 1i64 << 62);

    let rect = Rectangle::new(i32::MAX, i32::MIN);
    assert_eq!(rect.area(), i64::from(i32::MAX) * i64::from(i32::MIN));
}

#[test]
fn test_checked_area() {
    assert_eq!(Rectangle::new(-2, 3).checked_area(), Ok(-6));
    assert_eq!(Rectangle::new(i32::MAX, 1).checked_area(), Ok(i32::MAX));
    assert_eq!(Rectangle::new(i32::MIN, 1).checked_area(), Ok(i32::MIN));
    assert_eq!(
        Rectangle::new(i32::MAX, 2).checked_area(),
        Err(ShapeError::AreaOverflow { width: i32::MAX, height: 2 })
    );
    assert!(Rectangle::new(i32::MIN, -1).checked_area().is_err());
}

#[test]
fn test_display() {
    assert_eq!(Rectangle::new(3, -4).to_string(), "3x-4");
}
