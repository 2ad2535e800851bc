use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::tween::Tween,
    foundation::error::{SegueError, SegueResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionType {
    Cut,
    Mix,
    Slide,
    Push,
    Wipe,
}

impl TransitionType {
    pub fn parse(s: &str) -> SegueResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cut" => Ok(Self::Cut),
            "mix" | "dissolve" | "crossfade" => Ok(Self::Mix),
            "slide" => Ok(Self::Slide),
            "push" => Ok(Self::Push),
            "wipe" => Ok(Self::Wipe),
            "" => Err(SegueError::validation("transition type must be non-empty")),
            other => Err(SegueError::validation(format!(
                "unknown transition type '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Mix => "mix",
            Self::Slide => "slide",
            Self::Push => "push",
            Self::Wipe => "wipe",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDirection {
    #[default]
    FromLeft,
    FromRight,
}

impl TransitionDirection {
    pub fn parse(s: &str) -> SegueResult<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "from_left" | "fromleft" | "left" => Ok(Self::FromLeft),
            "from_right" | "fromright" | "right" => Ok(Self::FromRight),
            other => Err(SegueError::validation(format!(
                "unknown transition direction '{other}'"
            ))),
        }
    }

    /// Sign applied to horizontal offsets.
    pub fn sign(self) -> f64 {
        match self {
            Self::FromLeft => 1.0,
            Self::FromRight => -1.0,
        }
    }
}

/// Immutable parameters of one transition.
#[derive(Clone, Debug)]
pub struct TransitionSpec {
    pub kind: TransitionType,
    /// Length in output frames.
    pub duration: u32,
    pub direction: TransitionDirection,
    pub tween: Tween,
}

impl TransitionSpec {
    pub fn new(
        kind: TransitionType,
        duration: u32,
        direction: TransitionDirection,
        tween: Tween,
    ) -> SegueResult<Self> {
        if duration == 0 {
            return Err(SegueError::validation("transition duration must be > 0"));
        }
        Ok(Self {
            kind,
            duration,
            direction,
            tween,
        })
    }

    pub fn from_json(s: &str) -> SegueResult<Self> {
        let config: TransitionConfig = serde_json::from_str(s)?;
        config.validate()
    }

    /// Load a JSON transition description from a file.
    pub fn from_path(path: impl AsRef<Path>) -> SegueResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read transition config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_value(v: &serde_json::Value) -> SegueResult<Self> {
        let config = TransitionConfig::deserialize_value(v)?;
        config.validate()
    }
}

/// Serialized description of a transition, e.g.
/// `{"type": "push", "duration": 25, "direction": "from_right", "tween": "easeinoutsine"}`.
///
/// Names are kept as strings so lenient parsing and error messages stay in one place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tween: Option<String>,
}

impl TransitionConfig {
    fn deserialize_value(v: &serde_json::Value) -> SegueResult<Self> {
        Ok(<Self as serde::Deserialize>::deserialize(v)?)
    }

    pub fn validate(&self) -> SegueResult<TransitionSpec> {
        let kind =
            TransitionType::parse(&self.kind).map_err(|e| SegueError::in_field("type", e))?;
        let direction = match self.direction.as_deref() {
            None => TransitionDirection::default(),
            Some(s) => {
                TransitionDirection::parse(s).map_err(|e| SegueError::in_field("direction", e))?
            }
        };
        let tween = match self.tween.as_deref() {
            None => Tween::Linear,
            Some(s) => Tween::parse(s).map_err(|e| SegueError::in_field("tween", e))?,
        };
        TransitionSpec::new(kind, self.duration, direction, tween)
    }
}

impl From<&TransitionSpec> for TransitionConfig {
    fn from(spec: &TransitionSpec) -> Self {
        Self {
            kind: spec.kind.as_str().to_string(),
            duration: spec.duration,
            direction: Some(
                match spec.direction {
                    TransitionDirection::FromLeft => "from_left",
                    TransitionDirection::FromRight => "from_right",
                }
                .to_string(),
            ),
            tween: spec.tween.name().map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/spec.rs"]
mod tests;
