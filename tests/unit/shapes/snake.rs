use super::*;
use crate::composition::model::AnimationKind;

fn snake_anim(id: &str, n: usize, params: &SnakeParams) -> AnimationObject {
    AnimationObject::new(
        id,
        "#ffffff",
        (0..n).map(|i| format!("f{i}")).collect(),
        AnimationKind::Snake(params.clone()),
    )
}

#[test]
fn equal_seeds_reproduce_paths() {
    let params = SnakeParams {
        count: 3,
        random_seed: Some(42),
        ..SnakeParams::default()
    };
    let canvas = CanvasSize::new(20, 20);
    let a = generate_snake(&snake_anim("a", 40, &params), &params, &canvas);
    let b = generate_snake(&snake_anim("b", 40, &params), &params, &canvas);
    assert_eq!(a, b);
}

#[test]
fn unseeded_snakes_are_still_deterministic() {
    let params = SnakeParams::default();
    let canvas = CanvasSize::new(16, 16);
    let anim = snake_anim("s", 25, &params);
    assert_eq!(
        generate_snake(&anim, &params, &canvas),
        generate_snake(&anim, &params, &canvas)
    );
}

#[test]
fn heads_stay_inside_margin() {
    let params = SnakeParams {
        count: 4,
        length: 6,
        speed: 2,
        random_seed: Some(7),
        ..SnakeParams::default()
    };
    let canvas = CanvasSize::new(30, 20).with_viewport(5, 5, 12, 10);
    let area = movement_area(canvas.viewport());
    assert_eq!(area, Bounds::new(7, 7, 8, 6));

    let out = generate_snake(&snake_anim("s", 60, &params), &params, &canvas);
    for pixels in out.values() {
        let heads: Vec<_> = pixels.iter().filter(|p| p.is_head).collect();
        assert_eq!(heads.len(), 4);
        assert!(heads.iter().all(|p| area.contains(p.x, p.y)));
        assert!(pixels.iter().all(|p| canvas.viewport().contains(p.x, p.y)));
    }
}

#[test]
fn body_fades_toward_tail() {
    let params = SnakeParams {
        length: 4,
        random_seed: Some(1),
        ..SnakeParams::default()
    };
    let out = generate_snake(&snake_anim("s", 10, &params), &params, &CanvasSize::new(20, 20));

    let first = &out["f0"];
    assert_eq!(first.len(), 1);
    assert!(first[0].is_head);
    assert_eq!(first[0].color, "#ffffff");

    let last = &out["f9"];
    assert_eq!(last.len(), 4);
    assert_eq!(last[0].color, "#ffffff");
    assert_eq!(last[3].color, "#4d4d4d");
    assert!(!last[3].is_head);
}

#[test]
fn colors_cycle_per_snake() {
    let params = SnakeParams {
        count: 3,
        length: 1,
        random_seed: Some(3),
        colors: vec!["#ff0000".to_owned(), "#00ff00".to_owned()],
        ..SnakeParams::default()
    };
    let out = generate_snake(&snake_anim("s", 1, &params), &params, &CanvasSize::new(20, 20));
    let colors: Vec<&str> = out["f0"].iter().map(|p| p.color.as_str()).collect();
    assert_eq!(colors, vec!["#ff0000", "#00ff00", "#ff0000"]);
}

#[test]
fn zero_snakes_or_frames_are_empty() {
    let none = SnakeParams {
        count: 0,
        ..SnakeParams::default()
    };
    let canvas = CanvasSize::new(10, 10);
    assert!(generate_snake(&snake_anim("s", 5, &none), &none, &canvas).is_empty());
    let params = SnakeParams::default();
    assert!(generate_snake(&snake_anim("s", 0, &params), &params, &canvas).is_empty());
}

#[test]
fn heads_never_enter_a_body_when_a_free_heading_exists() {
    let area = movement_area(CanvasSize::new(14, 14).viewport());
    let mut snakes: Vec<Snake> = (0..6u64).map(|k| Snake::spawn(7 + k, area, 5)).collect();

    for _ in 0..300 {
        for k in 0..snakes.len() {
            let occupied: HashSet<(i32, i32)> = snakes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != k)
                .flat_map(|(_, s)| s.body.iter().copied())
                .collect();
            let head = snakes[k].head();
            let reverse = snakes[k].heading.reverse();
            let free_exists = Heading::ALL.into_iter().any(|h| {
                let (x, y) = h.step(head);
                h != reverse && area.contains(x, y) && !occupied.contains(&(x, y))
            });

            snakes[k].advance(area, Some(&occupied));

            let moved_to = snakes[k].head();
            if moved_to != head && occupied.contains(&moved_to) {
                assert!(!free_exists, "snake {k} ran from {head:?} into {moved_to:?}");
            }
        }
    }
}

