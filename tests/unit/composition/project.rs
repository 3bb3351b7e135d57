use super::*;

fn project_json(extra_anim_frame: &str) -> String {
    format!(
        r##"{{
  "canvas": {{ "width": 8, "height": 8, "originalWidth": 16, "originalHeight": 8, "viewportX": 4 }},
  "frames": [ {{ "id": "a" }}, {{ "id": "b", "section": "startup" }} ],
  "animations": [
    {{ "id": "bar", "type": "LINE", "color": "#ff0000", "frames": ["a", "{extra_anim_frame}"] }}
  ],
  "blockedPixels": [[4, 0], {{ "x": 5, "y": 1 }}]
}}"##
    )
}

#[test]
fn parses_and_validates() {
    let p = Project::from_reader(project_json("b").as_bytes()).unwrap();
    p.validate().unwrap();
    assert_eq!(p.canvas.viewport_x, 4);
    assert_eq!(p.canvas.viewport_y, 0);
    assert_eq!(p.frames.len(), 2);
    assert!(p.blocked_set().contains(&(5, 1)));
}

#[test]
fn unknown_frame_reference_is_rejected() {
    let p = Project::from_reader(project_json("zzz").as_bytes()).unwrap();
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("unknown frame 'zzz'"));
}

#[test]
fn viewport_outside_canvas_is_rejected() {
    let mut p = Project::from_reader(project_json("b").as_bytes()).unwrap();
    p.canvas.viewport_x = 10;
    assert!(p.validate().is_err());
}

#[test]
fn duplicate_frames_are_rejected() {
    let mut p = Project::from_reader(project_json("b").as_bytes()).unwrap();
    p.frames.push(Frame::new("a"));
    assert!(p.validate().unwrap_err().to_string().contains("duplicate frame id"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Project::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, PixelseqError::Serde(_)));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = Project::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open project JSON"));
}
