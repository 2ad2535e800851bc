use crate::foundation::core::{Vec2, VideoMode, mul_components};

/// Image-side parameters attached to a frame.
///
/// Translations and key values are in normalized output units: an x-offset of `1.0`
/// moves a frame one full screen width to the right.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageTransform {
    /// Multiplicative opacity in `[0, 1]`.
    pub opacity: f64,
    pub fill_translation: Vec2,
    pub fill_scale: Vec2,
    /// Position of the key (mask) rectangle.
    pub key_translation: Vec2,
    /// Size of the key (mask) rectangle. `(0.5, 1.0)` reveals the left half.
    pub key_scale: Vec2,
    /// Field this frame is restricted to; `Progressive` draws every line.
    pub field: VideoMode,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            fill_translation: Vec2::ZERO,
            fill_scale: Vec2::new(1.0, 1.0),
            key_translation: Vec2::ZERO,
            key_scale: Vec2::new(1.0, 1.0),
            field: VideoMode::Progressive,
        }
    }
}

impl ImageTransform {
    /// Apply `child` inside the space described by `self`.
    pub fn then(&self, child: &Self) -> Self {
        Self {
            opacity: self.opacity * child.opacity,
            fill_translation: self.fill_translation
                + mul_components(child.fill_translation, self.fill_scale),
            fill_scale: mul_components(self.fill_scale, child.fill_scale),
            key_translation: self.key_translation
                + mul_components(child.key_translation, self.key_scale),
            key_scale: mul_components(self.key_scale, child.key_scale),
            field: if child.field.is_interlaced() {
                child.field
            } else {
                self.field
            },
        }
    }
}

/// Audio-side parameters attached to a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioTransform {
    pub has_audio: bool,
    pub gain: f64,
}

impl Default for AudioTransform {
    fn default() -> Self {
        Self {
            has_audio: true,
            gain: 1.0,
        }
    }
}

impl AudioTransform {
    pub fn then(&self, child: &Self) -> Self {
        Self {
            has_audio: self.has_audio && child.has_audio,
            gain: self.gain * child.gain,
        }
    }

    /// Gain that actually reaches the mix: zero when audio is disabled.
    pub fn effective_gain(&self) -> f64 {
        if self.has_audio { self.gain } else { 0.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/transform.rs"]
mod tests;
