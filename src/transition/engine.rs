use crate::{
    foundation::core::{Vec2, VideoMode},
    frame::content::Frame,
    producer::{
        FrameProducer, SharedProducer, basic::EmptyProducer, label_of, lock,
        receiver::FollowingReceiver, share,
    },
    transition::spec::{TransitionSpec, TransitionType},
};

/// How the two sides are fetched on each tick.
///
/// Both modes produce identical frames; `Parallel` overlaps the two producers' latency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    #[default]
    Parallel,
    Sequential,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running { tick: u32 },
    Exhausted,
}

/// Producer that moves from a leading (source) producer to a destination producer
/// over a fixed number of frames.
///
/// Lifecycle:
/// 1. [`TransitionProducer::new`] binds the destination.
/// 2. The orchestrator binds the source with [`FrameProducer::set_leading_producer`]
///    (or [`TransitionProducer::bind_source`] when it knows the frame on air) before
///    the first tick. Until then the source side shows the empty frame.
/// 3. [`TransitionProducer::advance`] yields exactly `duration` frames, then `None`
///    forever.
/// 4. The orchestrator switches to [`TransitionProducer::following_producer`].
///
/// A single instance must not be advanced from several threads at once; `&mut self`
/// enforces this.
pub struct TransitionProducer {
    mode: VideoMode,
    spec: TransitionSpec,
    fetch_mode: FetchMode,
    phase: Phase,
    dest: SharedProducer,
    dest_rx: FollowingReceiver,
    source_rx: FollowingReceiver,
    last: Option<Frame>,
}

impl TransitionProducer {
    #[tracing::instrument(skip(dest, spec), fields(kind = spec.kind.as_str(), duration = spec.duration))]
    pub fn new(mode: VideoMode, dest: SharedProducer, spec: TransitionSpec) -> Self {
        Self {
            mode,
            spec,
            fetch_mode: FetchMode::default(),
            phase: Phase::Running { tick: 0 },
            dest_rx: FollowingReceiver::new(dest.clone()),
            dest,
            source_rx: FollowingReceiver::new(share(EmptyProducer)),
            last: None,
        }
    }

    pub fn with_fetch(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    pub fn video_mode(&self) -> VideoMode {
        self.mode
    }

    /// Ticks consumed so far. Saturates at `duration + 1` once exhausted.
    pub fn tick(&self) -> u32 {
        match self.phase {
            Phase::Running { tick } => tick,
            Phase::Exhausted => self.spec.duration.saturating_add(1),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Bind the outgoing producer. `freeze` is shown on the source side if the leader
    /// has already ended, so a stopped clip fades out from its last picture.
    ///
    /// Expected exactly once, before the first tick.
    pub fn bind_source(&mut self, leader: SharedProducer, freeze: Option<Frame>) {
        tracing::debug!(
            source = %label_of(&leader),
            frozen = freeze.is_some(),
            "transition source bound"
        );
        self.source_rx = FollowingReceiver::with_last(leader, freeze);
    }

    /// Produce the next transition frame, or `None` once `duration` frames have been
    /// produced. No producer is touched after that point.
    pub fn advance(&mut self) -> Option<Frame> {
        let tick = match self.phase {
            Phase::Exhausted => return None,
            Phase::Running { tick } => tick.saturating_add(1),
        };
        if tick > self.spec.duration {
            tracing::debug!(duration = self.spec.duration, "transition exhausted");
            self.phase = Phase::Exhausted;
            return None;
        }
        self.phase = Phase::Running { tick };

        let (dest, source) = self.fetch();
        let frame = compose(&self.spec, self.mode, tick, &dest, &source);
        self.last = Some(frame.clone());
        Some(frame)
    }

    fn fetch(&mut self) -> (Frame, Frame) {
        let dest = &mut self.dest_rx;
        let source = &mut self.source_rx;
        match self.fetch_mode {
            FetchMode::Parallel => rayon::join(|| dest.receive(), || source.receive()),
            FetchMode::Sequential => (dest.receive(), source.receive()),
        }
    }
}

impl FrameProducer for TransitionProducer {
    fn receive(&mut self) -> Option<Frame> {
        self.advance()
    }

    fn following_producer(&self) -> Option<SharedProducer> {
        Some(self.dest.clone())
    }

    fn set_leading_producer(&mut self, leader: SharedProducer) {
        let freeze = lock(&leader).last_frame();
        self.bind_source(leader, freeze);
    }

    fn last_frame(&self) -> Option<Frame> {
        self.last.clone()
    }

    fn label(&self) -> String {
        "transition".to_string()
    }
}

/// Easing samples for the two fields of `tick`: `(delta1, delta2)`.
pub fn field_deltas(spec: &TransitionSpec, tick: u32) -> (f64, f64) {
    let total = f64::from(spec.duration) * 2.0;
    let t = f64::from(tick) * 2.0;
    (
        spec.tween.sample(t - 1.0, 0.0, 1.0, total),
        spec.tween.sample(t, 0.0, 1.0, total),
    )
}

/// Build the output frame for `tick` from the two fetched frames.
///
/// Each side is split into a first-field and a second-field variant driven by
/// [`field_deltas`]. Only the second-field variants carry audio, crossfading on
/// `delta2`. The destination side is stacked above the source side.
///
/// `Cut` returns `source` untouched.
pub fn compose(
    spec: &TransitionSpec,
    mode: VideoMode,
    tick: u32,
    dest: &Frame,
    source: &Frame,
) -> Frame {
    if spec.kind == TransitionType::Cut {
        return source.clone();
    }

    let (delta1, delta2) = field_deltas(spec, tick);
    let dir = spec.direction.sign();
    tracing::trace!(tick, delta1, delta2, "composing transition frame");

    let mut s1 = source.clone();
    let mut s2 = source.clone();
    s1.audio_transform_mut().has_audio = false;
    s2.audio_transform_mut().gain = 1.0 - delta2;

    let mut d1 = dest.clone();
    let mut d2 = dest.clone();
    d1.audio_transform_mut().has_audio = false;
    d2.audio_transform_mut().gain = delta2;

    match spec.kind {
        TransitionType::Cut => {}
        TransitionType::Mix => {
            d1.image_transform_mut().opacity = delta1;
            d2.image_transform_mut().opacity = delta2;
        }
        TransitionType::Slide => {
            d1.image_transform_mut().fill_translation = Vec2::new((delta1 - 1.0) * dir, 0.0);
            d2.image_transform_mut().fill_translation = Vec2::new((delta2 - 1.0) * dir, 0.0);
        }
        TransitionType::Push => {
            d1.image_transform_mut().fill_translation = Vec2::new((delta1 - 1.0) * dir, 0.0);
            d2.image_transform_mut().fill_translation = Vec2::new((delta2 - 1.0) * dir, 0.0);
            s1.image_transform_mut().fill_translation = Vec2::new(delta1 * dir, 0.0);
            s2.image_transform_mut().fill_translation = Vec2::new(delta2 * dir, 0.0);
        }
        TransitionType::Wipe => {
            d1.image_transform_mut().key_scale = Vec2::new(delta1, 1.0);
            d2.image_transform_mut().key_scale = Vec2::new(delta2, 1.0);
        }
    }

    let source = collapse_fields(s1, s2, mode);
    let dest = collapse_fields(d1, d2, mode);
    Frame::combine(source, dest)
}

// Fields only need weaving when their image transforms differ.
fn collapse_fields(first: Frame, second: Frame, mode: VideoMode) -> Frame {
    if first.image_transform() == second.image_transform() {
        second
    } else {
        Frame::interlace(first, second, mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/engine.rs"]
mod tests;
