use std::sync::Arc;

use crate::{
    foundation::core::VideoMode,
    frame::transform::{AudioTransform, ImageTransform},
};

/// What a frame draws, independent of how it is transformed.
///
/// Content is immutable and shared between clones of a [`Frame`].
#[derive(Clone, Debug, PartialEq)]
pub enum FrameContent {
    /// Nothing to show.
    Empty,
    /// A leaf picture identified by its tag (clip name, frame number, ...).
    Picture(String),
    /// Two frames woven together field by field. `first` occupies the field named by
    /// `mode`, `second` the complementary one.
    Interlaced {
        first: Frame,
        second: Frame,
        mode: VideoMode,
    },
    /// Frames stacked in painter's order: later entries are drawn above earlier ones.
    Combined(Vec<Frame>),
}

/// One video frame plus its image and audio transforms.
///
/// Cloning is cheap and gives an independent variant: the content is shared, the
/// transforms are not.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    content: Arc<FrameContent>,
    image: ImageTransform,
    audio: AudioTransform,
}

/// A leaf picture with every enclosing transform applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLayer {
    pub tag: String,
    pub image: ImageTransform,
    pub audio: AudioTransform,
}

impl Frame {
    fn from_content(content: FrameContent) -> Self {
        Self {
            content: Arc::new(content),
            image: ImageTransform::default(),
            audio: AudioTransform::default(),
        }
    }

    pub fn empty() -> Self {
        Self::from_content(FrameContent::Empty)
    }

    pub fn picture(tag: impl Into<String>) -> Self {
        Self::from_content(FrameContent::Picture(tag.into()))
    }

    /// Weave two field variants into one frame.
    ///
    /// Progressive output, or two identical variants, collapse to `second`.
    pub fn interlace(first: Frame, second: Frame, mode: VideoMode) -> Self {
        if !mode.is_interlaced() || first == second {
            return second;
        }
        Self::from_content(FrameContent::Interlaced {
            first,
            second,
            mode,
        })
    }

    /// Stack `upper` above `lower`.
    pub fn combine(lower: Frame, upper: Frame) -> Self {
        Self::from_content(FrameContent::Combined(vec![lower, upper]))
    }

    pub fn content(&self) -> &FrameContent {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self.content, FrameContent::Empty)
    }

    pub fn image_transform(&self) -> &ImageTransform {
        &self.image
    }

    pub fn image_transform_mut(&mut self) -> &mut ImageTransform {
        &mut self.image
    }

    pub fn audio_transform(&self) -> &AudioTransform {
        &self.audio
    }

    pub fn audio_transform_mut(&mut self) -> &mut AudioTransform {
        &mut self.audio
    }

    /// Stacked children for combined frames, empty otherwise.
    pub fn layers(&self) -> &[Frame] {
        match &*self.content {
            FrameContent::Combined(children) => children.as_slice(),
            _ => &[],
        }
    }

    /// `(first, second, mode)` for interlaced frames.
    pub fn fields(&self) -> Option<(&Frame, &Frame, VideoMode)> {
        match &*self.content {
            FrameContent::Interlaced {
                first,
                second,
                mode,
            } => Some((first, second, *mode)),
            _ => None,
        }
    }

    /// Resolve the frame tree into leaf pictures in painter's order.
    ///
    /// Empty leaves are skipped. Each field of an interlaced frame is tagged with the
    /// field it is restricted to.
    pub fn flatten(&self) -> Vec<ResolvedLayer> {
        let mut out = Vec::new();
        self.flatten_into(&ImageTransform::default(), &AudioTransform::default(), &mut out);
        out
    }

    fn flatten_into(
        &self,
        parent_image: &ImageTransform,
        parent_audio: &AudioTransform,
        out: &mut Vec<ResolvedLayer>,
    ) {
        let image = parent_image.then(&self.image);
        let audio = parent_audio.then(&self.audio);
        match &*self.content {
            FrameContent::Empty => {}
            FrameContent::Picture(tag) => out.push(ResolvedLayer {
                tag: tag.clone(),
                image,
                audio,
            }),
            FrameContent::Interlaced {
                first,
                second,
                mode,
            } => {
                let first_field = ImageTransform {
                    field: *mode,
                    ..image
                };
                let second_field = ImageTransform {
                    field: mode.opposite(),
                    ..image
                };
                first.flatten_into(&first_field, &audio, out);
                second.flatten_into(&second_field, &audio, out);
            }
            FrameContent::Combined(children) => {
                for child in children {
                    child.flatten_into(&image, &audio, out);
                }
            }
        }
    }

    /// Sum of the gains of every audible leaf.
    pub fn audio_gain(&self) -> f64 {
        self.flatten()
            .iter()
            .map(|layer| layer.audio.effective_gain())
            .sum()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/content.rs"]
mod tests;
