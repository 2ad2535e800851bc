use crate::foundation::error::{SegueError, SegueResult};

pub use kurbo::Vec2;

/// Scan mode of the output channel.
///
/// For interlaced modes this names the field that is displayed first.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VideoMode {
    #[default]
    Progressive,
    Upper,
    Lower,
}

impl VideoMode {
    pub fn parse(s: &str) -> SegueResult<Self> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match norm.as_str() {
            "progressive" | "p" => Ok(Self::Progressive),
            "upper" | "interlaced_upper" | "upper_field_first" | "tff" => Ok(Self::Upper),
            "lower" | "interlaced_lower" | "lower_field_first" | "bff" => Ok(Self::Lower),
            "" => Err(SegueError::validation("video mode must be non-empty")),
            other => Err(SegueError::validation(format!(
                "unknown video mode '{other}'"
            ))),
        }
    }

    pub fn is_interlaced(self) -> bool {
        !matches!(self, Self::Progressive)
    }

    /// The complementary field. Progressive has no complement and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Self::Progressive => Self::Progressive,
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
        }
    }
}

#[inline]
pub(crate) fn mul_components(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
