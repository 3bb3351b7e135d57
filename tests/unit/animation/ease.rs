use super::*;

#[test]
fn endpoints_are_fixed() {
    for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn quadratic_shapes() {
    assert_eq!(Ease::EaseIn.apply(0.5), 0.25);
    assert_eq!(Ease::EaseOut.apply(0.5), 0.75);
    assert_eq!(Ease::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Ease::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::EaseIn.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(3.0), 1.0);
}

#[test]
fn unknown_names_fall_back_to_linear() {
    assert_eq!(Ease::from_name("easeInOut"), Ease::EaseInOut);
    assert_eq!(Ease::from_name("ease-out"), Ease::EaseOut);
    assert_eq!(Ease::from_name("bouncy"), Ease::Linear);

    let e: Ease = serde_json::from_value(serde_json::json!("elastic")).unwrap();
    assert_eq!(e, Ease::Linear);
    assert_eq!(
        serde_json::to_value(Ease::EaseIn).unwrap(),
        serde_json::json!("easeIn")
    );
}
