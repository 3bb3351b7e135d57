use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    animation::rect::RectangleState,
    effects::transitions::TransitionEffect,
    foundation::core::{Bounds, GridPoint},
    foundation::lenient_name_enum,
};

fn default_color() -> String {
    "#ffffff".to_owned()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A declarative animation placed on a list of timeline frames.
///
/// The common fields live here; everything type-specific lives in [`AnimationKind`], which is
/// flattened into the same JSON object and tagged by `"type"`.
pub struct AnimationObject {
    /// Animation identifier (stable within a project).
    pub id: String,
    /// Base color (hex preferred; CSS names pass through untouched).
    #[serde(default = "default_color")]
    pub color: String,
    /// Frame ids this animation spans, in playback order.
    #[serde(default)]
    pub frames: Vec<String>,
    /// Where the renderer stacks these pixels.
    #[serde(default)]
    pub render_position: RenderPosition,
    /// Which sequence section the animation is shown in.
    #[serde(default)]
    pub render_on_section: RenderSection,
    /// Type tag and parameters.
    #[serde(flatten)]
    pub kind: AnimationKind,
}

impl AnimationObject {
    /// Animation with default placement.
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        frames: Vec<String>,
        kind: AnimationKind,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            frames,
            render_position: RenderPosition::default(),
            render_on_section: RenderSection::default(),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
/// Animation type with its parameter bag.
pub enum AnimationKind {
    /// Scanning bar.
    #[serde(rename = "LINE")]
    Line(LineParams),
    /// Rotating diagonal cross.
    #[serde(rename = "X")]
    X(XParams),
    /// Wandering snakes.
    #[serde(rename = "SNAKE")]
    Snake(SnakeParams),
    /// Keyframed rectangle morph.
    #[serde(rename = "RECTANGLE")]
    Rectangle(RectangleParams),
    /// Free-form path; drawn by the editor, not generated here.
    #[serde(rename = "PATH")]
    Path(PathParams),
    /// 3-2-1 countdown sequence.
    #[serde(rename = "COUNTDOWN")]
    Countdown(Box<CountdownParams>),
}

impl AnimationKind {
    /// The editor's type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "LINE",
            Self::X(_) => "X",
            Self::Snake(_) => "SNAKE",
            Self::Rectangle(_) => "RECTANGLE",
            Self::Path(_) => "PATH",
            Self::Countdown(_) => "COUNTDOWN",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Stacking of generated pixels relative to painted layers.
pub enum RenderPosition {
    /// Above every layer.
    #[default]
    Foreground,
    /// Below every layer.
    Background,
    /// Merged into the active layer.
    OnLayer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sequence section(s) an animation is shown in.
pub enum RenderSection {
    /// Startup frames only.
    Startup,
    /// Main frames only.
    Main,
    /// Both sections.
    #[default]
    Both,
}

lenient_name_enum! {
    /// Axis a LINE travels along.
    pub enum Orientation (default Horizontal) {
        /// Full-height column moving along x.
        Horizontal => "HORIZONTAL",
        /// Full-width row moving along y.
        Vertical => "VERTICAL",
    }
}

lenient_name_enum! {
    /// Travel direction of a LINE.
    pub enum Direction (default Right) {
        /// Toward smaller x.
        Left => "LEFT",
        /// Toward larger x.
        Right => "RIGHT",
        /// Toward smaller y.
        Up => "UP",
        /// Toward larger y.
        Down => "DOWN",
    }
}

lenient_name_enum! {
    /// What a LINE does at the viewport edge.
    pub enum BorderBehavior (default Wrap) {
        /// Re-enter from the opposite edge.
        Wrap => "WRAP",
        /// Reflect.
        Bounce => "BOUNCE",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// LINE parameters.
pub struct LineParams {
    /// Axis of travel.
    pub orientation: Orientation,
    /// Travel direction along the axis.
    pub direction: Direction,
    /// Edge handling.
    pub border_behavior: BorderBehavior,
    /// Step multiplier.
    pub speed: f64,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            direction: Direction::Right,
            border_behavior: BorderBehavior::Wrap,
            speed: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// X (rotating cross) parameters.
pub struct XParams {
    /// Degrees per frame.
    pub rotation_speed: f64,
    /// Center in full-canvas coordinates; canvas center when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<GridPoint>,
    /// Extend arms to the farthest corner instead of the nearest edge.
    pub stretch_to_edges: bool,
    /// Line thickness in cells.
    pub thickness: u32,
}

impl Default for XParams {
    fn default() -> Self {
        Self {
            rotation_speed: 5.0,
            position: None,
            stretch_to_edges: false,
            thickness: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// SNAKE parameters.
pub struct SnakeParams {
    /// Number of snakes.
    #[serde(rename = "snakeCount")]
    pub count: u32,
    /// Body length in cells.
    #[serde(rename = "snakeLength")]
    pub length: u32,
    /// Unit steps per frame.
    #[serde(rename = "snakeSpeed")]
    pub speed: u32,
    /// Steer around other snakes.
    #[serde(rename = "avoidCollisions")]
    pub avoid_collisions: bool,
    /// Added to each snake's index to seed its path.
    #[serde(rename = "snakeRandomSeed", skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Per-snake colors, cycled; the animation color when empty.
    #[serde(rename = "snakeColors", skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl Default for SnakeParams {
    fn default() -> Self {
        Self {
            count: 1,
            length: 5,
            speed: 1,
            avoid_collisions: true,
            random_seed: None,
            colors: Vec::new(),
        }
    }
}

lenient_name_enum! {
    /// How a RECTANGLE walks its keyframes.
    pub enum RectangleCycleMode (default Loop) {
        /// Forward then backward, endpoints not repeated.
        PingPong => "PING_PONG",
        /// Forward, then straight back to the first state.
        DirectToStart => "DIRECT_TO_START",
        /// Same as `DirectToStart`.
        Loop => "LOOP",
        /// Forward once, then hold the last state.
        NoCycle => "NO_CYCLE",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// RECTANGLE parameters.
pub struct RectangleParams {
    /// Keyframes in order.
    #[serde(rename = "rectangleStates")]
    pub states: Vec<RectangleState>,
    /// Keyframe walk order.
    #[serde(rename = "rectangleCycleMode")]
    pub cycle_mode: RectangleCycleMode,
    /// Transition speed; clamped to `[0.1, 10]`.
    #[serde(rename = "rectangleSpeed")]
    pub speed: f64,
    /// Easing applied to transitions.
    #[serde(rename = "rectangleEasing")]
    pub easing: Ease,
    /// Filled or one-cell outline.
    #[serde(rename = "rectangleFilled")]
    pub filled: bool,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            cycle_mode: RectangleCycleMode::Loop,
            speed: 1.0,
            easing: Ease::Linear,
            filled: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// PATH parameters (editor-drawn).
pub struct PathParams {
    /// Path vertices.
    #[serde(rename = "pathPoints")]
    pub points: Vec<GridPoint>,
}

lenient_name_enum! {
    /// How each countdown digit enters and leaves.
    pub enum FadeOption (default None) {
        /// Static digit.
        None => "none",
        /// Rows revealed from the bottom.
        FadeInFromBottom => "fadeInFromBottom",
        /// Rows revealed from the top.
        FadeInFromTop => "fadeInFromTop",
        /// Columns removed from the right, leaving toward the left.
        FadeOutToLeft => "fadeOutToLeft",
        /// Columns removed from the left, leaving toward the right.
        FadeOutToRight => "fadeOutToRight",
        /// Columns fall into place.
        DigitalDripIn => "digitalDripIn",
        /// Columns fall away.
        DigitalDripOut => "digitalDripOut",
        /// Drip in, hold, drip out.
        DigitalDripCycle => "digitalDripCycle",
    }
}

lenient_name_enum! {
    /// Safe-zone reveal before the countdown.
    pub enum SafeZoneIntro (default None) {
        /// No intro.
        None => "none",
        /// Radial reveal from the safe zone's centroid.
        CenterOut => "centerOut",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// COUNTDOWN parameters.
///
/// Durations are milliseconds and become frames at 100 ms per frame.
pub struct CountdownParams {
    /// Per-digit display time.
    #[serde(rename = "countdownSpeed")]
    pub speed: u32,
    /// Digit scale factor.
    #[serde(rename = "countdownSize")]
    pub size: u32,
    /// Area to auto-fit and center digits in (absolute).
    #[serde(rename = "countdownBounds", skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    /// Shift applied after centering.
    #[serde(rename = "countdownOffset")]
    pub offset: GridPoint,
    /// Digits shown in order.
    #[serde(rename = "countdownDigits")]
    pub digits: Vec<String>,
    /// Enter/leave style.
    #[serde(rename = "countdownFadeOption")]
    pub fade_option: FadeOption,

    /// Oscillate between the digit color and `gradient_pulse_color`.
    #[serde(rename = "countdownEnableGradientPulse")]
    pub enable_gradient_pulse: bool,
    /// Second pulse color.
    #[serde(rename = "countdownGradientPulseColor")]
    pub gradient_pulse_color: String,
    /// Pulse period.
    #[serde(rename = "countdownGradientPulseSpeed")]
    pub gradient_pulse_speed: u32,

    /// Top-to-bottom gradient over the digit.
    #[serde(rename = "countdownEnableStaticGradient")]
    pub enable_static_gradient: bool,
    /// Gradient top color; the animation color when absent.
    #[serde(
        rename = "countdownStaticGradientStart",
        skip_serializing_if = "Option::is_none"
    )]
    pub static_gradient_start: Option<String>,
    /// Gradient bottom color.
    #[serde(rename = "countdownStaticGradientEnd")]
    pub static_gradient_end: String,
    /// Scroll the gradient with wraparound.
    #[serde(rename = "countdownStaticGradientCycle")]
    pub static_gradient_cycle: bool,
    /// Rows scrolled per frame.
    #[serde(rename = "countdownStaticGradientCycleSpeed")]
    pub static_gradient_cycle_speed: f64,

    /// Color of falling drip pixels.
    #[serde(rename = "countdownDripHighlightColor")]
    pub drip_highlight_color: String,
    /// Color drip-out pixels fade toward.
    #[serde(rename = "countdownDripTrailColor")]
    pub drip_trail_color: String,
    /// Drip-in and drip-out time in cycle mode.
    #[serde(rename = "countdownDripPhaseDuration")]
    pub drip_phase_duration: u32,
    /// Hold time in cycle mode.
    #[serde(rename = "countdownDripHoldDuration")]
    pub drip_hold_duration: u32,

    /// Segmented progress bar.
    #[serde(rename = "countdownEnableLoadingBar")]
    pub enable_loading_bar: bool,
    /// Segment colors, one per digit.
    #[serde(rename = "countdownLoadingBarColors")]
    pub loading_bar_colors: Vec<String>,
    /// Bar area; the viewport's bottom row when absent.
    #[serde(
        rename = "countdownLoadingBarBounds",
        skip_serializing_if = "Option::is_none"
    )]
    pub loading_bar_bounds: Option<Bounds>,
    /// Fill speed factor.
    #[serde(rename = "countdownLoadingBarSpeed")]
    pub loading_bar_speed: f64,

    /// Sparkles dropping from the digit.
    #[serde(rename = "countdownEnableSparkleEffect")]
    pub enable_sparkle: bool,
    /// Spawn cap per frame.
    #[serde(rename = "countdownMaxSparklesPerFrame")]
    pub max_sparkles_per_frame: u32,
    /// Sparkle lifetime in frames.
    #[serde(rename = "countdownSparkleLifetime")]
    pub sparkle_lifetime: u32,
    /// Sparkle color.
    #[serde(rename = "countdownSparkleColor")]
    pub sparkle_color: String,

    /// Draw the safe zone.
    #[serde(rename = "countdownEnableSafeZone")]
    pub enable_safe_zone: bool,
    /// Safe-zone cells (absolute).
    #[serde(rename = "countdownSafeZonePixels")]
    pub safe_zone_pixels: Vec<GridPoint>,
    /// Safe-zone color.
    #[serde(rename = "countdownSafeZoneColor")]
    pub safe_zone_color: String,
    /// Intro animation.
    #[serde(rename = "countdownSafeZoneIntroAnimation")]
    pub safe_zone_intro: SafeZoneIntro,
    /// Intro speed factor.
    #[serde(rename = "countdownSafeZoneSpeed")]
    pub safe_zone_speed: f64,
    /// Hold after the intro.
    #[serde(rename = "countdownSafeZonePauseDuration")]
    pub safe_zone_pause_duration: u32,
    /// Breathe the safe zone during digits.
    #[serde(rename = "countdownSafeZonePulse")]
    pub safe_zone_pulse: bool,

    /// Fill the rest of the viewport.
    #[serde(rename = "countdownEnableBlackBackground")]
    pub enable_black_background: bool,
    /// Background fill color.
    #[serde(rename = "countdownBackgroundColor")]
    pub background_color: String,
    /// Effect eroding the background after the last digit.
    #[serde(rename = "countdownTransitionEffect")]
    pub transition_effect: TransitionEffect,
    /// Matrix glyph color.
    #[serde(rename = "countdownMatrixColor", skip_serializing_if = "Option::is_none")]
    pub matrix_color: Option<String>,
    /// Erosion time.
    #[serde(rename = "countdownDisintegrationDuration")]
    pub disintegration_duration: u32,
    /// Disintegration particle size.
    #[serde(rename = "countdownParticleSize")]
    pub particle_size: f64,
}

impl Default for CountdownParams {
    fn default() -> Self {
        Self {
            speed: 1000,
            size: 1,
            bounds: None,
            offset: GridPoint::default(),
            digits: vec!["3".to_owned(), "2".to_owned(), "1".to_owned()],
            fade_option: FadeOption::None,
            enable_gradient_pulse: false,
            gradient_pulse_color: "#ffffff".to_owned(),
            gradient_pulse_speed: 1000,
            enable_static_gradient: false,
            static_gradient_start: None,
            static_gradient_end: "#ffffff".to_owned(),
            static_gradient_cycle: false,
            static_gradient_cycle_speed: 1.0,
            drip_highlight_color: "#ffffff".to_owned(),
            drip_trail_color: "#202020".to_owned(),
            drip_phase_duration: 500,
            drip_hold_duration: 1000,
            enable_loading_bar: false,
            loading_bar_colors: vec![
                "#ff0000".to_owned(),
                "#ffff00".to_owned(),
                "#00ff00".to_owned(),
            ],
            loading_bar_bounds: None,
            loading_bar_speed: 1.0,
            enable_sparkle: false,
            max_sparkles_per_frame: 3,
            sparkle_lifetime: 5,
            sparkle_color: "#ffffff".to_owned(),
            enable_safe_zone: false,
            safe_zone_pixels: Vec::new(),
            safe_zone_color: "#00ff00".to_owned(),
            safe_zone_intro: SafeZoneIntro::None,
            safe_zone_speed: 1.0,
            safe_zone_pause_duration: 500,
            safe_zone_pulse: true,
            enable_black_background: false,
            background_color: "#000000".to_owned(),
            transition_effect: TransitionEffect::Thanos,
            matrix_color: None,
            disintegration_duration: 1000,
            particle_size: 2.0,
        }
    }
}

impl CountdownParams {
    /// `true` when no effect flag is set and digits are static, so the fast path applies.
    pub fn is_simple(&self) -> bool {
        self.fade_option == FadeOption::None
            && !self.enable_gradient_pulse
            && !self.enable_static_gradient
            && !self.enable_loading_bar
            && !self.enable_sparkle
            && !self.enable_safe_zone
            && !self.enable_black_background
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
