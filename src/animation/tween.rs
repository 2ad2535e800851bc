use std::{f64::consts::PI, fmt, sync::Arc};

use crate::foundation::error::{SegueError, SegueResult};

/// Signature of an injected easing function: `(elapsed, base, change, total) -> value`.
pub type TweenFn = dyn Fn(f64, f64, f64, f64) -> f64 + Send + Sync;

/// Easing curve sampled in the classic `(t, b, c, d)` form.
///
/// Named curves clamp `t` into `[0, d]`, so they return exactly `b` at the start and
/// exactly `b + c` at the end. `Custom` is called as-is.
#[derive(Clone, Default)]
pub enum Tween {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    Custom(Arc<TweenFn>),
}

impl Tween {
    /// Wrap an arbitrary easing function.
    pub fn custom(f: impl Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Parse a curve name. Case, `_`, `-` and spaces are ignored, and the `ease`
    /// prefix is optional (`"ease_in_out_sine"`, `"EaseInOutSine"`, `"inoutsine"`).
    pub fn parse(name: &str) -> SegueResult<Self> {
        let norm: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        if norm.is_empty() {
            return Err(SegueError::validation("tween name must be non-empty"));
        }
        let key = if norm == "linear" || norm.starts_with("ease") {
            norm
        } else {
            format!("ease{norm}")
        };
        let tween = match key.as_str() {
            "linear" => Self::Linear,
            "easeinquad" => Self::InQuad,
            "easeoutquad" => Self::OutQuad,
            "easeinoutquad" => Self::InOutQuad,
            "easeincubic" => Self::InCubic,
            "easeoutcubic" => Self::OutCubic,
            "easeinoutcubic" => Self::InOutCubic,
            "easeinquart" => Self::InQuart,
            "easeoutquart" => Self::OutQuart,
            "easeinoutquart" => Self::InOutQuart,
            "easeinquint" => Self::InQuint,
            "easeoutquint" => Self::OutQuint,
            "easeinoutquint" => Self::InOutQuint,
            "easeinsine" => Self::InSine,
            "easeoutsine" => Self::OutSine,
            "easeinoutsine" => Self::InOutSine,
            "easeinexpo" => Self::InExpo,
            "easeoutexpo" => Self::OutExpo,
            "easeinoutexpo" => Self::InOutExpo,
            "easeincirc" => Self::InCirc,
            "easeoutcirc" => Self::OutCirc,
            "easeinoutcirc" => Self::InOutCirc,
            _ => return Err(SegueError::validation(format!("unknown tween '{name}'"))),
        };
        Ok(tween)
    }

    /// Canonical name, `None` for custom functions.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Self::Linear => "linear",
            Self::InQuad => "easeinquad",
            Self::OutQuad => "easeoutquad",
            Self::InOutQuad => "easeinoutquad",
            Self::InCubic => "easeincubic",
            Self::OutCubic => "easeoutcubic",
            Self::InOutCubic => "easeinoutcubic",
            Self::InQuart => "easeinquart",
            Self::OutQuart => "easeoutquart",
            Self::InOutQuart => "easeinoutquart",
            Self::InQuint => "easeinquint",
            Self::OutQuint => "easeoutquint",
            Self::InOutQuint => "easeinoutquint",
            Self::InSine => "easeinsine",
            Self::OutSine => "easeoutsine",
            Self::InOutSine => "easeinoutsine",
            Self::InExpo => "easeinexpo",
            Self::OutExpo => "easeoutexpo",
            Self::InOutExpo => "easeinoutexpo",
            Self::InCirc => "easeincirc",
            Self::OutCirc => "easeoutcirc",
            Self::InOutCirc => "easeinoutcirc",
            Self::Custom(_) => return None,
        };
        Some(name)
    }

    pub fn sample(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self {
            Self::Custom(f) => f(t, b, c, d),
            _ if d <= 0.0 || t >= d => b + c,
            _ if t <= 0.0 => b,
            Self::Linear => c * t / d + b,
            Self::InQuad => {
                let t = t / d;
                c * t * t + b
            }
            Self::OutQuad => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            Self::InOutQuad => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t * t + b
                } else {
                    let t = t - 1.0;
                    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
                }
            }
            Self::InCubic => c * (t / d).powi(3) + b,
            Self::OutCubic => c * ((t / d - 1.0).powi(3) + 1.0) + b,
            Self::InOutCubic => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t.powi(3) + b
                } else {
                    c / 2.0 * ((t - 2.0).powi(3) + 2.0) + b
                }
            }
            Self::InQuart => c * (t / d).powi(4) + b,
            Self::OutQuart => -c * ((t / d - 1.0).powi(4) - 1.0) + b,
            Self::InOutQuart => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t.powi(4) + b
                } else {
                    -c / 2.0 * ((t - 2.0).powi(4) - 2.0) + b
                }
            }
            Self::InQuint => c * (t / d).powi(5) + b,
            Self::OutQuint => c * ((t / d - 1.0).powi(5) + 1.0) + b,
            Self::InOutQuint => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t.powi(5) + b
                } else {
                    c / 2.0 * ((t - 2.0).powi(5) + 2.0) + b
                }
            }
            Self::InSine => -c * (t / d * (PI / 2.0)).cos() + c + b,
            Self::OutSine => c * (t / d * (PI / 2.0)).sin() + b,
            Self::InOutSine => -c / 2.0 * ((PI * t / d).cos() - 1.0) + b,
            Self::InExpo => c * 2f64.powf(10.0 * (t / d - 1.0)) + b,
            Self::OutExpo => c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b,
            Self::InOutExpo => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b
                } else {
                    c / 2.0 * (-(2f64.powf(-10.0 * (t - 1.0))) + 2.0) + b
                }
            }
            Self::InCirc => -c * ((1.0 - (t / d).powi(2)).sqrt() - 1.0) + b,
            Self::OutCirc => c * (1.0 - (t / d - 1.0).powi(2)).sqrt() + b,
            Self::InOutCirc => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
                } else {
                    c / 2.0 * ((1.0 - (t - 2.0).powi(2)).sqrt() + 1.0) + b
                }
            }
        }
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Tween({name})"),
            None => f.write_str("Tween(custom)"),
        }
    }
}

impl serde::Serialize for Tween {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => Err(serde::ser::Error::custom(
                "custom tween functions cannot be serialized",
            )),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Tween {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
