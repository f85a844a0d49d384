use rand::Rng;
use rectangle::{total_area_dynamic, total_area_static, Rectangle, Shape};

const SAMPLES: usize = 1_000;

#[test]
fn area_matches_product_for_random_dimensions() {
    let mut rng = rand::rng();
    let mut rect = Rectangle::default();

    for _ in 0..SAMPLES {
        let width: i32 = rng.random();
        let height: i32 = rng.random();
        rect.set_values(width, height);

        let expected = i64::from(width) * i64::from(height);
        assert_eq!(rect.area(), expected, "{width}x{height}");
        assert_eq!(Shape::area(&rect), expected);

        match i32::try_from(expected) {
            Ok(narrow) => assert_eq!(rect.checked_area(), Ok(narrow)),
            Err(_) => assert!(rect.checked_area().is_err()),
        }
    }
}

#[test]
fn small_dimensions_never_overflow() {
    let mut rng = rand::rng();

    for _ in 0..SAMPLES {
        let width = rng.random_range(-46_340..=46_340);
        let height = rng.random_range(-46_340..=46_340);
        let rect = Rectangle::new(width, height);
        assert_eq!(rect.checked_area(), Ok(width * height));
    }
}

#[test]
fn deserializes_from_toml() {
    let rect: Rectangle = toml::from_str("width = 3\nheight = 4\n").unwrap();
    assert_eq!(rect, Rectangle::new(3, 4));
    assert_eq!(rect.area(), 12);

    let text = toml::to_string(&Rectangle::new(-2, 3)).unwrap();
    let back: Rectangle = toml::from_str(&text).unwrap();
    assert_eq!(back.area(), -6);
}

#[test]
fn rejects_non_integer_dimensions() {
    let result: Result<Rectangle, _> = toml::from_str("width = \"wide\"\nheight = 4\n");
    assert!(result.is_err());
}

#[test]
fn total_area_matches_sum_for_random_rectangles() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let len = rng.random_range(0..50);
        let rects: Vec<Rectangle> = (0..len)
            .map(|_| Rectangle::new(rng.random(), rng.random()))
            .collect();
        let expected: i128 = rects
            .iter()
            .map(|r| i128::from(r.width()) * i128::from(r.height()))
            .sum();

        assert_eq!(total_area_static(&rects), expected);

        let shapes: Vec<&dyn Shape> = rects.iter().map(|r| r as &dyn Shape).collect();
        assert_eq!(total_area_dynamic(&shapes), expected);
    }
}

#[test]
fn total_area_of_extreme_rectangles_is_exact() {
    let mut rng = rand::rng();
    let extremes = [i32::MIN, i32::MAX, -1, 0, 1];

    for _ in 0..SAMPLES {
        let rects: Vec<Rectangle> = (0..8)
            .map(|_| {
                let width = extremes[rng.random_range(0..extremes.len())];
                let height = extremes[rng.random_range(0..extremes.len())];
                Rectangle::new(width, height)
            })
            .collect();
        let expected: i128 = rects.iter().map(|r| i128::from(r.area())).sum();

        assert_eq!(total_area_static(&rects), expected);
    }
}
