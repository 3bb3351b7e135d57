use super::*;
use crate::composition::model::{AnimationKind, CountdownParams, SnakeParams, XParams};

fn fixture() -> (Vec<Frame>, Vec<AnimationObject>, CanvasSize) {
    let frames: Vec<Frame> = (0..24).map(|i| Frame::new(format!("f{i:02}"))).collect();
    let ids: Vec<String> = frames.iter().map(|f| f.id.clone()).collect();
    let animations = vec![
        AnimationObject::new(
            "snake",
            "#00ff00",
            ids.clone(),
            AnimationKind::Snake(SnakeParams {
                count: 2,
                ..SnakeParams::default()
            }),
        ),
        AnimationObject::new("x", "#0000ff", ids[..12].to_vec(), AnimationKind::X(XParams::default())),
        AnimationObject::new(
            "cd",
            "#ffffff",
            ids[4..].to_vec(),
            AnimationKind::Countdown(Box::new(CountdownParams {
                speed: 500,
                enable_black_background: true,
                ..CountdownParams::default()
            })),
        ),
    ];
    (frames, animations, CanvasSize::new(16, 12))
}

#[test]
fn parallel_matches_sequential() {
    let (frames, animations, canvas) = fixture();
    let blocked = HashSet::new();

    let mut seq = Engine::new(EngineOpts::default()).unwrap();
    let mut par = Engine::new(EngineOpts {
        strategy: ExecutionStrategy::Parallel { threads: Some(2) },
        ..EngineOpts::default()
    })
    .unwrap();

    let a = seq.generate(&frames, &animations, &canvas, &blocked).unwrap();
    let b = par.generate(&frames, &animations, &canvas, &blocked).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, apply_animations_to_frames(&frames, &animations, &canvas, &blocked));
}

#[test]
fn cache_hits_return_same_overlay() {
    let (frames, animations, canvas) = fixture();
    let blocked = HashSet::new();
    let mut engine = Engine::new(EngineOpts {
        cache_capacity: 4,
        ..EngineOpts::default()
    })
    .unwrap();

    let first = engine.generate(&frames, &animations, &canvas, &blocked).unwrap();
    let second = engine.generate(&frames, &animations, &canvas, &blocked).unwrap();
    assert_eq!(first, second);

    let cache = engine.cache().unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cache.stats().misses, 1);
}

#[test]
fn zero_threads_is_rejected() {
    let err = Engine::new(EngineOpts {
        strategy: ExecutionStrategy::Parallel { threads: Some(0) },
        ..EngineOpts::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn cache_is_off_by_default() {
    assert!(Engine::new(EngineOpts::default()).unwrap().cache().is_none());
}
