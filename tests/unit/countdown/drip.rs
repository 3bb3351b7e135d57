use super::*;
use crate::composition::model::CountdownParams;
use crate::countdown::digits::place;
use crate::foundation::core::CanvasSize;

fn one() -> Glyph {
    // bounds (3, 2, 3, 5) inside a 9x9 viewport
    place("1", &CountdownParams::default(), &CanvasSize::new(9, 9))
}

fn frame(glyph: &Glyph, f: usize) -> DripFrame<'_> {
    DripFrame {
        glyph,
        viewport: Bounds::new(0, 0, 9, 9),
        timing: DripTiming::new(10, glyph.bounds.width),
        frame: f,
        highlight: "#ffffff",
        animation_id: "cd",
    }
}

fn coords(pixels: &[PixelData]) -> Vec<(i32, i32)> {
    pixels.iter().map(PixelData::coord).collect()
}

#[test]
fn timing_splits_drip_and_stagger() {
    assert_eq!(
        DripTiming::new(10, 3),
        DripTiming {
            drip: 8,
            stagger: 1.0
        }
    );
    assert_eq!(
        DripTiming::new(1, 3),
        DripTiming {
            drip: 1,
            stagger: 0.0
        }
    );
}

#[test]
fn row_fades_reveal_from_named_edge() {
    let g = place("8", &CountdownParams::default(), &CanvasSize::new(3, 5));
    let bottom = fade_in_rows(&g, true, 0.5);
    assert_eq!(bottom.len(), 8);
    assert!(bottom.iter().all(|&(_, y)| y >= 2));
    let top = fade_in_rows(&g, false, 0.5);
    assert!(top.iter().all(|&(_, y)| y <= 2));
    assert_eq!(fade_in_rows(&g, true, 1.0), g.cells);
    assert!(fade_in_rows(&g, false, 0.0).is_empty());
}

#[test]
fn column_fades_keep_named_side() {
    let g = one();
    assert_eq!(fade_out_columns(&g, true, 0.5).len(), 7);
    assert_eq!(fade_out_columns(&g, false, 0.5).len(), 6);
    assert_eq!(fade_out_columns(&g, true, 0.0), g.cells);
    assert!(fade_out_columns(&g, false, 1.0).is_empty());
}

#[test]
fn drip_in_starts_above_and_lands() {
    let g = one();
    let first = frame(&g, 0).drip_in(|_| "#ff0000".to_owned());
    assert_eq!(coords(&first), vec![(3, 0)]);
    assert_ne!(first[0].color, "#ff0000");

    let last = frame(&g, 9).drip_in(|_| "#ff0000".to_owned());
    assert_eq!(coords(&last), g.cells);
    assert!(last.iter().all(|p| p.color == "#ff0000"));
}

#[test]
fn drip_out_flashes_then_leaves() {
    let g = one();
    let start = frame(&g, 0).drip_out("#202020", |_| "#ff0000".to_owned());
    assert_eq!(coords(&start), g.cells);

    let second = frame(&g, 1).drip_out("#202020", |_| "#ff0000".to_owned());
    let falling: Vec<_> = second.iter().filter(|p| p.x == 3).collect();
    assert_eq!(
        falling.iter().map(|p| p.y).collect::<Vec<_>>(),
        vec![4, 7]
    );
    assert!(falling.iter().all(|p| p.color == "#ffffff"));

    assert!(frame(&g, 9).drip_out("#202020", |_| "#ff0000".to_owned()).is_empty());
}
