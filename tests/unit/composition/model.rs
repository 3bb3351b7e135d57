use super::*;
use serde_json::json;

#[test]
fn line_record_parses_with_defaults() {
    let a: AnimationObject = serde_json::from_value(json!({
        "id": "line-1",
        "type": "LINE",
        "color": "#ff0000",
        "frames": ["f1", "f2"],
        "direction": "LEFT"
    }))
    .unwrap();
    assert_eq!(a.frames, vec!["f1", "f2"]);
    assert_eq!(a.render_position, RenderPosition::Foreground);
    assert_eq!(a.render_on_section, RenderSection::Both);
    let AnimationKind::Line(p) = &a.kind else {
        panic!("expected LINE, got {}", a.kind.type_name());
    };
    assert_eq!(p.direction, Direction::Left);
    assert_eq!(p.orientation, Orientation::Horizontal);
    assert_eq!(p.speed, 1.0);
}

#[test]
fn countdown_record_uses_editor_keys() {
    let a: AnimationObject = serde_json::from_value(json!({
        "id": "cd",
        "type": "COUNTDOWN",
        "frames": [],
        "renderPosition": "ON_LAYER",
        "countdownSize": 2,
        "countdownFadeOption": "digitalDripCycle",
        "countdownEnableSafeZone": true,
        "countdownSafeZonePixels": [[1, 2], {"x": 3, "y": 4}],
        "countdownSafeZoneIntroAnimation": "centerOut",
        "countdownTransitionEffect": "matrix"
    }))
    .unwrap();
    assert_eq!(a.color, "#ffffff");
    assert_eq!(a.render_position, RenderPosition::OnLayer);
    let AnimationKind::Countdown(p) = &a.kind else {
        panic!("expected COUNTDOWN");
    };
    assert_eq!(p.size, 2);
    assert_eq!(p.fade_option, FadeOption::DigitalDripCycle);
    assert_eq!(p.safe_zone_pixels, vec![GridPoint::new(1, 2), GridPoint::new(3, 4)]);
    assert_eq!(p.safe_zone_intro, SafeZoneIntro::CenterOut);
    assert_eq!(p.transition_effect, TransitionEffect::Matrix);
    assert_eq!(p.digits, vec!["3", "2", "1"]);
    assert!(!p.is_simple());
}

#[test]
fn unknown_enum_names_fall_back() {
    let a: AnimationObject = serde_json::from_value(json!({
        "id": "r",
        "type": "RECTANGLE",
        "rectangleCycleMode": "SHUFFLE",
        "rectangleEasing": "springy"
    }))
    .unwrap();
    let AnimationKind::Rectangle(p) = &a.kind else {
        panic!("expected RECTANGLE");
    };
    assert_eq!(p.cycle_mode, RectangleCycleMode::Loop);
    assert_eq!(p.easing, Ease::Linear);

    assert_eq!(FadeOption::from_name("sparkleRain"), FadeOption::None);
    assert_eq!(RectangleCycleMode::from_name("ping-pong"), RectangleCycleMode::PingPong);
}

#[test]
fn kind_round_trips_through_json() {
    let a = AnimationObject::new(
        "snake",
        "#00ff00",
        vec!["a".to_owned()],
        AnimationKind::Snake(SnakeParams {
            count: 3,
            random_seed: Some(7),
            ..SnakeParams::default()
        }),
    );
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["type"], json!("SNAKE"));
    assert_eq!(v["snakeCount"], json!(3));
    assert_eq!(v["snakeRandomSeed"], json!(7));
    let back: AnimationObject = serde_json::from_value(v).unwrap();
    assert_eq!(back, a);
}

#[test]
fn default_countdown_is_simple() {
    assert!(CountdownParams::default().is_simple());
}
