use std::sync::Arc;

use crate::{
    foundation::core::VideoMode,
    frame::content::Frame,
    producer::{
        FrameProducer, SharedProducer, basic::EmptyProducer, label_of, lock,
        receiver::FollowingReceiver, share,
    },
    transition::{engine::TransitionProducer, spec::TransitionSpec},
};

/// A single playout layer: one foreground producer pulled once per output tick.
///
/// Transitions are loaded as the foreground with the previous foreground bound as
/// their source; once a transition ends the layer follows into its destination.
pub struct Layer {
    receiver: FollowingReceiver,
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer {
    pub fn new() -> Self {
        Self {
            receiver: FollowingReceiver::new(share(EmptyProducer)),
        }
    }

    pub fn foreground(&self) -> &SharedProducer {
        self.receiver.producer()
    }

    pub fn foreground_label(&self) -> String {
        label_of(self.receiver.producer())
    }

    /// Replace the foreground immediately.
    pub fn play(&mut self, producer: SharedProducer) {
        tracing::debug!(producer = %label_of(&producer), "layer play");
        self.receiver.replace(producer);
    }

    /// Start a transition from the current foreground into `dest`.
    ///
    /// The frame currently on air becomes the transition's freeze frame for the source
    /// side. Returns the handle of the transition, which becomes the new foreground.
    #[tracing::instrument(skip(self, dest, spec), fields(kind = spec.kind.as_str()))]
    pub fn transition_to(
        &mut self,
        dest: SharedProducer,
        spec: TransitionSpec,
        mode: VideoMode,
    ) -> SharedProducer {
        let leader = Arc::clone(self.receiver.producer());
        let freeze = match self.receiver.last_frame() {
            Some(frame) => Some(frame.clone()),
            None => lock(&leader).last_frame(),
        };
        let mut transition = TransitionProducer::new(mode, dest, spec);
        transition.bind_source(leader, freeze);
        let handle = share(transition);
        self.receiver.replace(Arc::clone(&handle));
        handle
    }

    /// Next output frame. Never fails; repeats the last frame when nothing is left.
    pub fn receive(&mut self) -> Frame {
        self.receiver.receive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/producer/layer.rs"]
mod tests;
