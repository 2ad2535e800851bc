use std::collections::VecDeque;

use crate::{
    frame::content::Frame,
    producer::{FrameProducer, SharedProducer},
};

/// Sentinel for "nothing playing". Never ends and always yields the empty frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyProducer;

impl FrameProducer for EmptyProducer {
    fn receive(&mut self) -> Option<Frame> {
        Some(Frame::empty())
    }

    fn label(&self) -> String {
        "empty".to_string()
    }
}

/// Repeats one frame forever.
#[derive(Clone, Debug)]
pub struct StillProducer {
    frame: Frame,
}

impl StillProducer {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl FrameProducer for StillProducer {
    fn receive(&mut self) -> Option<Frame> {
        Some(self.frame.clone())
    }

    fn last_frame(&self) -> Option<Frame> {
        Some(self.frame.clone())
    }

    fn label(&self) -> String {
        "still".to_string()
    }
}

/// Plays a finite list of frames, then ends.
pub struct ClipProducer {
    name: String,
    frames: VecDeque<Frame>,
    last: Option<Frame>,
    following: Option<SharedProducer>,
}

impl ClipProducer {
    pub fn new(name: impl Into<String>, frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            name: name.into(),
            frames: frames.into_iter().collect(),
            last: None,
            following: None,
        }
    }

    /// Clip of `len` pictures tagged `"{name}#{index}"`.
    pub fn numbered(name: impl Into<String>, len: usize) -> Self {
        let name = name.into();
        let frames: Vec<Frame> = (0..len)
            .map(|i| Frame::picture(format!("{name}#{i}")))
            .collect();
        Self::new(name, frames)
    }

    /// Producer to continue with once the clip runs out.
    pub fn with_following(mut self, next: SharedProducer) -> Self {
        self.following = Some(next);
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameProducer for ClipProducer {
    fn receive(&mut self) -> Option<Frame> {
        let frame = self.frames.pop_front()?;
        self.last = Some(frame.clone());
        Some(frame)
    }

    fn last_frame(&self) -> Option<Frame> {
        self.last.clone()
    }

    fn following_producer(&self) -> Option<SharedProducer> {
        self.following.clone()
    }

    fn label(&self) -> String {
        format!("clip[{}]", self.name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/producer/basic.rs"]
mod tests;
