//! A rectangle with two integer dimensions and an area computed on demand.

pub mod error;
pub mod rectangle;
pub mod shape;

pub use error::{Result, ShapeError};
pub use rectangle::Rectangle;
pub use shape::{total_area_dynamic, total_area_static, Shape};
