use super::*;

fn rect(x: i32, y: i32, width: i32, height: i32) -> RectangleState {
    RectangleState {
        x,
        y,
        width,
        height,
        delay: 0,
    }
}

#[test]
fn identical_endpoints_round_trip() {
    let a = rect(3, -2, 5, 7);
    for t in [0.0, 0.1, 0.33, 0.5, 0.99, 1.0] {
        assert_eq!(interpolate_rectangles(&a, &a, t), a);
    }
}

#[test]
fn endpoints_are_exact() {
    let a = rect(0, 0, 4, 4);
    let b = rect(10, 6, 2, 8);
    assert_eq!(interpolate_rectangles(&a, &b, 0.0), a);
    assert_eq!(interpolate_rectangles(&a, &b, 1.0), b);
}

#[test]
fn grows_around_center() {
    // Center stays at (5, 5) while the square grows from 2 to 6.
    let a = rect(4, 4, 2, 2);
    let b = rect(2, 2, 6, 6);
    let mid = interpolate_rectangles(&a, &b, 0.5);
    assert_eq!(mid, rect(3, 3, 4, 4));
}

#[test]
fn size_is_floored_at_one() {
    let a = rect(0, 0, 0, 0);
    let r = interpolate_rectangles(&a, &a, 0.5);
    assert_eq!((r.width, r.height), (1, 1));
}
