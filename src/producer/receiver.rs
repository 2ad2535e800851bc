use std::sync::Arc;

use crate::{
    frame::content::Frame,
    producer::{SharedProducer, label_of, lock},
};

/// Upper bound on successors followed within a single receive.
pub const MAX_FOLLOW_HOPS: usize = 8;

/// Fetch-or-repeat-last wrapper around a producer.
///
/// When the wrapped producer ends, its following producer (if any) takes over and is
/// told who led into it. When there is nothing left to follow, the last frame that
/// was produced is repeated, or the empty frame if nothing was ever produced.
pub struct FollowingReceiver {
    producer: SharedProducer,
    last: Option<Frame>,
}

impl FollowingReceiver {
    pub fn new(producer: SharedProducer) -> Self {
        Self::with_last(producer, None)
    }

    /// Start with `last` as the freeze frame, e.g. the picture that was on air when
    /// `producer` was taken over.
    pub fn with_last(producer: SharedProducer, last: Option<Frame>) -> Self {
        Self { producer, last }
    }

    /// Producer currently being pulled. Changes as successors take over.
    pub fn producer(&self) -> &SharedProducer {
        &self.producer
    }

    /// Swap in a different producer. The last frame is kept as the freeze fallback.
    pub fn replace(&mut self, producer: SharedProducer) {
        self.producer = producer;
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    pub fn receive(&mut self) -> Frame {
        for _ in 0..=MAX_FOLLOW_HOPS {
            let received = lock(&self.producer).receive();
            if let Some(frame) = received {
                self.last = Some(frame.clone());
                return frame;
            }
            if !self.follow() {
                return self.repeat_last();
            }
        }
        tracing::warn!(
            producer = %label_of(&self.producer),
            hops = MAX_FOLLOW_HOPS,
            "producer chain kept ending; repeating last frame"
        );
        self.repeat_last()
    }

    fn follow(&mut self) -> bool {
        let next = lock(&self.producer).following_producer();
        let Some(next) = next else {
            return false;
        };
        if Arc::ptr_eq(&next, &self.producer) {
            return false;
        }
        tracing::debug!(
            from = %label_of(&self.producer),
            to = %label_of(&next),
            "following successor producer"
        );
        lock(&next).set_leading_producer(Arc::clone(&self.producer));
        self.producer = next;
        true
    }

    fn repeat_last(&self) -> Frame {
        self.last.clone().unwrap_or_else(Frame::empty)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/producer/receiver.rs"]
mod tests;
