use downcast_rs::{impl_downcast, Downcast};

pub trait Shape : Downcast {
    fn area(&self) -> i64;
}

impl_downcast!(Shape);

// Totals are i128: each area is at most 2^62 in magnitude and a slice holds
// fewer than 2^64 shapes, so the sum cannot overflow.
pub fn total_area_static<S: Shape>(shapes: &[S]) -> i128 {
    shapes.iter().map(|x| i128::from(x.area())).sum()
}

pub fn total_area_dynamic(shapes: &[&dyn Shape]) -> i128 {
    shapes.iter().map(|x| i128::from(x.area())).sum()
}

#[cfg(test)]
use crate::Rectangle;

#[cfg(test)]
#[derive(Clone, Copy)]
struct Square {
    side: i32
}

#[cfg(test)]
impl Shape for Square {
    fn area(&self) -> i64 {
        i64::from(self.side) * i64::from(self.side)
    }
}

#[test]
fn test_total_area_static() {
    let v1 = Rectangle::new(3, 4);
    let v2 = Rectangle::new(-2, 3);
    assert_eq!(total_area_static(&[v1, v1, v2]), 18);
    assert_eq!(total_area_static::<Rectangle>(&[]), 0);
}

#[test]
fn test_total_area_dynamic() {
    let v1 = Rectangle::new(3, 4);
    let v2 = Square { side: 5 };
    assert_eq!(total_area_dynamic(&[&v1, &v2]), 37);
    assert_eq!(total_area_dynamic(&[]), 0);
}

#[test]
fn test_total_area_at_extremes() {
    let big = Rectangle::new(i32::MIN, i32::MIN);
    let square = Square { side: i32::MIN };
    let expected = 2 * (1i128 << 62);

    assert_eq!(total_area_static(&[big, big]), expected);
    assert_eq!(total_area_dynamic(&[&big, &square]), expected);

    let widest = Rectangle::new(i32::MAX, i32::MIN);
    let many = vec![widest; 1_000];
    assert_eq!(
        total_area_static(&many),
        1_000 * i128::from(i32::MAX) * i128::from(i32::MIN)
    );
    assert_eq!(total_area_static(&[big, widest, big]), expected + i128::from(widest.area()));
}

#[test]
fn test_downcast_recovers_rectangle() {
    let rect = Rectangle::new(10, 20);
    let square = Square { side: 5 };
    let shapes: [&dyn Shape; 2] = [&rect, &square];

    let first = shapes[0].downcast_ref::<Rectangle>();
    assert_eq!(first, Some(&rect));
    assert!(shapes[1].downcast_ref::<Rectangle>().is_none());
    assert!(shapes[1].downcast_ref::<Square>().is_some());
}
