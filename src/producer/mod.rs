use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::frame::content::Frame;

pub(crate) mod basic;
pub(crate) mod layer;
pub(crate) mod receiver;

/// Shared handle to a producer.
///
/// Handles are passed between an orchestrator and the producers that chain onto each
/// other, so they are reference counted. Each producer is only ever driven by one
/// thread at a time; the mutex is uncontended.
pub type SharedProducer = Arc<Mutex<dyn FrameProducer>>;

/// A sequence of frames pulled one per output tick.
pub trait FrameProducer: Send {
    /// Next frame, or `None` once the sequence has ended.
    fn receive(&mut self) -> Option<Frame>;

    /// Producer that should take over once this one ends.
    fn following_producer(&self) -> Option<SharedProducer> {
        None
    }

    /// Tell this producer what was playing before it.
    fn set_leading_producer(&mut self, _leader: SharedProducer) {}

    /// Frame most recently handed out. Whoever takes over from this producer freezes
    /// on it until its own source delivers.
    fn last_frame(&self) -> Option<Frame> {
        None
    }

    /// Short label for logs.
    fn label(&self) -> String;
}

/// Move a producer behind a [`SharedProducer`] handle.
pub fn share<P: FrameProducer + 'static>(producer: P) -> SharedProducer {
    Arc::new(Mutex::new(producer))
}

/// Lock a producer, recovering the guard if a previous holder panicked.
pub(crate) fn lock(producer: &SharedProducer) -> MutexGuard<'_, dyn FrameProducer + 'static> {
    producer.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn label_of(producer: &SharedProducer) -> String {
    lock(producer).label()
}
