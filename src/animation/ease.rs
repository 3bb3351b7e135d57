/// Easing functions used to map normalized animation progress.
///
/// Parsed from the editor's names; anything unrecognized becomes [`Ease::Linear`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    EaseOut,
    /// Quadratic ease-in/out.
    EaseInOut,
}

impl Ease {
    /// Resolve an easing name, falling back to [`Ease::Linear`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "easein" | "inquad" => Self::EaseIn,
            "easeout" | "outquad" => Self::EaseOut,
            "easeinout" | "inoutquad" => Self::EaseInOut,
            _ => Self::Linear,
        }
    }

    /// Editor name of this easing.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

impl From<String> for Ease {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.name().to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
