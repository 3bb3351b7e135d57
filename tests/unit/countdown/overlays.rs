use super::*;

#[test]
fn bar_defaults_to_bottom_row() {
    let vp = Bounds::new(2, 3, 10, 6);
    assert_eq!(
        loading_bar_area(&CountdownParams::default(), vp),
        Bounds::new(2, 8, 10, 1)
    );
}

#[test]
fn segment_fill_is_clamped_and_degenerate_is_full() {
    assert_eq!(segment_fill(0, 11, 1.0), 0.0);
    assert_eq!(segment_fill(5, 11, 1.0), 0.5);
    assert_eq!(segment_fill(20, 11, 1.0), 1.0);
    // 2 / 4 - 1 < 0
    assert_eq!(segment_fill(0, 2, 4.0), 1.0);
    assert_eq!(segment_fill(0, 1, 1.0), 1.0);
}

#[test]
fn past_segments_are_full() {
    let params = CountdownParams::default();
    let area = Bounds::new(0, 9, 9, 1);
    let bar = loading_bar(&params, area, 1, 0.0, "#ffffff", "cd");
    assert_eq!(bar.len(), 3);
    assert!(bar.iter().all(|p| p.color == "#ff0000"));

    let bar = loading_bar(&params, area, 2, 1.0, "#ffffff", "cd");
    assert_eq!(bar.len(), 9);
    assert_eq!(bar[8].color, "#00ff00");
    assert_eq!(bar[4].color, "#ffff00");
}

#[test]
fn sparkles_fall_and_expire() {
    let params = CountdownParams {
        max_sparkles_per_frame: 3,
        sparkle_lifetime: 2,
        ..CountdownParams::default()
    };
    let vp = Bounds::new(0, 0, 10, 10);
    let row = [(4, 4), (5, 4), (6, 4)];
    let mut field = SparkleField::new(9);
    let mut seen = 0;
    for _ in 0..20 {
        let px = field.tick(&params, vp, &row, "cd");
        seen += px.len();
        assert!(px.iter().all(|p| p.y == 5 || p.y == 6));
        assert!(px.iter().all(|p| (3..=7).contains(&p.x)));
    }
    assert!(seen > 0);

    // Nothing spawns without a digit; live ones age out.
    field.tick(&params, vp, &[], "cd");
    field.tick(&params, vp, &[], "cd");
    assert_eq!(field.live(), 0);
}

#[test]
fn pulse_breathes_between_bounds() {
    assert!((safe_zone_pulse(0) - 0.4).abs() < 1e-12);
    assert!((safe_zone_pulse(10) - 1.0).abs() < 1e-12);
    assert_eq!(safe_zone_pulse(3), safe_zone_pulse(23));
}

#[test]
fn safe_zone_dims_with_intensity() {
    let params = CountdownParams {
        safe_zone_pixels: vec![GridPoint::new(1, 1), GridPoint::new(2, 1)],
        safe_zone_color: "#00ff00".to_owned(),
        ..CountdownParams::default()
    };
    let full = safe_zone(&params, None, "cd");
    assert_eq!(full.len(), 2);
    assert_eq!(full[0].color, "#00ff00");
    let dim = safe_zone(&params, Some(0.5), "cd");
    assert_eq!(dim[1].color, "#008000");
}

#[test]
fn center_out_reveals_outward() {
    let pixels = vec![
        GridPoint::new(5, 5),
        GridPoint::new(4, 5),
        GridPoint::new(6, 5),
        GridPoint::new(5, 1),
        GridPoint::new(5, 9),
    ];
    let intro = CenterOutIntro::new(&pixels);
    assert_eq!(intro.revealed(0, 4), vec![GridPoint::new(5, 5), GridPoint::new(4, 5), GridPoint::new(6, 5)]);
    assert_eq!(intro.revealed(3, 4).len(), 5);
    let counts: Vec<usize> = (0..4).map(|i| intro.revealed(i, 4).len()).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}
