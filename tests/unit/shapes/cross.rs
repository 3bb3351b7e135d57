use super::*;
use crate::composition::model::AnimationKind;
use crate::foundation::core::GridPoint;

fn x_anim(n: usize, params: &XParams) -> AnimationObject {
    AnimationObject::new(
        "x",
        "#00ffff",
        (0..n).map(|i| format!("f{i}")).collect(),
        AnimationKind::X(params.clone()),
    )
}

#[test]
fn bresenham_covers_endpoints() {
    assert_eq!(bresenham((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(bresenham((2, 2), (0, 0)), vec![(2, 2), (1, 1), (0, 0)]);
    assert_eq!(bresenham((1, 1), (1, 1)), vec![(1, 1)]);
    assert_eq!(bresenham((0, 0), (4, 2)).len(), 5);
}

#[test]
fn unrotated_cross_is_two_diagonals() {
    let cells = cross_cells((5, 5), 5.0, 0.0, 1, Bounds::new(0, 0, 11, 11));
    assert_eq!(cells.len(), 17);
    assert!(cells.contains(&(1, 1)));
    assert!(cells.contains(&(9, 9)));
    assert!(cells.contains(&(9, 1)));
    assert!(cells.contains(&(1, 9)));
    assert_eq!(cells.iter().filter(|&&c| c == (5, 5)).count(), 1);
}

#[test]
fn thickness_widens_and_clips() {
    let clip = Bounds::new(0, 0, 11, 11);
    let thin = cross_cells((5, 5), 5.0, 0.0, 1, clip);
    let thick = cross_cells((5, 5), 5.0, 0.0, 3, clip);
    assert!(thick.len() > thin.len());
    assert!(thick.iter().all(|&(x, y)| clip.contains(x, y)));
}

#[test]
fn frames_rotate_and_stay_on_canvas() {
    let params = XParams {
        position: Some(GridPoint::new(3, 4)),
        stretch_to_edges: true,
        ..XParams::default()
    };
    let canvas = CanvasSize::new(12, 9);
    let out = generate_x(&x_anim(10, &params), &params, &canvas);
    assert_eq!(out.len(), 10);
    assert_ne!(out["f0"], out["f9"]);
    for pixels in out.values() {
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|p| canvas.full().contains(p.x, p.y)));
    }
}

#[test]
fn full_turn_repeats() {
    let params = XParams {
        rotation_speed: 90.0,
        ..XParams::default()
    };
    let out = generate_x(&x_anim(5, &params), &params, &CanvasSize::new(9, 9));
    let mut a: Vec<_> = out["f0"].iter().map(PixelData::coord).collect();
    let mut b: Vec<_> = out["f4"].iter().map(PixelData::coord).collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}
