use super::*;
use crate::composition::model::AnimationKind;

fn frames(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("f{i}")).collect()
}

fn line(n: usize, params: LineParams) -> (AnimationObject, LineParams) {
    let anim = AnimationObject::new(
        "line",
        "#ff0000",
        frames(n),
        AnimationKind::Line(params.clone()),
    );
    (anim, params)
}

fn column_of(out: &OverlayMap, id: &str) -> i32 {
    let px = &out[id];
    let x = px[0].x;
    assert!(px.iter().all(|p| p.x == x));
    x
}

#[test]
fn horizontal_wrap_scenario() {
    let (anim, params) = line(11, LineParams::default());
    let canvas = CanvasSize::new(10, 6);
    let out = generate_line(&anim, &params, &canvas);

    assert_eq!(out.len(), 11);
    assert_eq!(column_of(&out, "f0"), 0);
    assert_eq!(column_of(&out, "f5"), 5);
    assert_eq!(column_of(&out, "f10"), 0);
    assert_eq!(out["f0"].len(), 6);
    assert!(out["f3"].iter().all(|p| p.animation_id.as_deref() == Some("line")));
}

#[test]
fn viewport_offset_is_applied() {
    let (anim, params) = line(10, LineParams::default());
    let canvas = CanvasSize::new(20, 10).with_viewport(5, 2, 10, 4);
    let out = generate_line(&anim, &params, &canvas);
    assert_eq!(column_of(&out, "f3"), 8);
    let ys: Vec<i32> = out["f3"].iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![2, 3, 4, 5]);
}

#[test]
fn leftward_travel_mirrors() {
    let (anim, params) = line(
        10,
        LineParams {
            direction: Direction::Left,
            ..LineParams::default()
        },
    );
    let out = generate_line(&anim, &params, &CanvasSize::new(10, 2));
    assert_eq!(column_of(&out, "f0"), 9);
    assert_eq!(column_of(&out, "f4"), 5);
}

#[test]
fn vertical_moves_rows() {
    let (anim, params) = line(
        4,
        LineParams {
            orientation: Orientation::Vertical,
            direction: Direction::Down,
            ..LineParams::default()
        },
    );
    let out = generate_line(&anim, &params, &CanvasSize::new(3, 8));
    // step = ceil(8 / 4) = 2
    let rows: Vec<i32> = ["f0", "f1", "f2", "f3"]
        .iter()
        .map(|id| out[*id][0].y)
        .collect();
    assert_eq!(rows, vec![0, 2, 4, 6]);
    assert_eq!(out["f1"].len(), 3);
}

#[test]
fn bounce_reflects() {
    for (i, expected) in [(0, 0), (3, 3), (4, 2), (6, 0), (7, 1)] {
        assert_eq!(
            line_position(i, 1.0, 4, BorderBehavior::Bounce, false),
            expected,
            "frame {i}"
        );
    }
}

#[test]
fn empty_frames_produce_nothing() {
    let (anim, params) = line(0, LineParams::default());
    assert!(generate_line(&anim, &params, &CanvasSize::new(10, 10)).is_empty());
}
