use super::*;
use crate::producer::{
    FrameProducer, share,
    basic::{ClipProducer, EmptyProducer},
};

/// Records the leader it was bound to.
struct Recorder {
    inner: ClipProducer,
    leader: Option<String>,
}

impl FrameProducer for Recorder {
    fn receive(&mut self) -> Option<Frame> {
        self.inner.receive()
    }

    fn set_leading_producer(&mut self, leader: SharedProducer) {
        self.leader = Some(label_of(&leader));
    }

    fn label(&self) -> String {
        "recorder".to_string()
    }
}

/// Ends immediately and names itself as its own successor.
struct SelfLoop {
    me: Option<SharedProducer>,
}

impl FrameProducer for SelfLoop {
    fn receive(&mut self) -> Option<Frame> {
        None
    }

    fn following_producer(&self) -> Option<SharedProducer> {
        self.me.clone()
    }

    fn label(&self) -> String {
        "self-loop".to_string()
    }
}

/// Ends immediately and hands over to a fresh copy of itself, forever.
struct Endless;

impl FrameProducer for Endless {
    fn receive(&mut self) -> Option<Frame> {
        None
    }

    fn following_producer(&self) -> Option<SharedProducer> {
        Some(share(Endless))
    }

    fn label(&self) -> String {
        "endless".to_string()
    }
}

#[test]
fn repeats_last_frame_after_end() {
    let mut rx = FollowingReceiver::new(share(ClipProducer::numbered("a", 2)));
    assert_eq!(rx.receive(), Frame::picture("a#0"));
    assert_eq!(rx.receive(), Frame::picture("a#1"));
    assert_eq!(rx.receive(), Frame::picture("a#1"));
    assert_eq!(rx.receive(), Frame::picture("a#1"));
    assert_eq!(rx.last_frame(), Some(&Frame::picture("a#1")));
}

#[test]
fn yields_empty_when_nothing_was_produced() {
    let mut rx = FollowingReceiver::new(share(ClipProducer::numbered("a", 0)));
    assert!(rx.receive().is_empty());
    assert!(rx.last_frame().is_none());
}

#[test]
fn follows_successor_and_binds_leader() {
    let next = share(Recorder {
        inner: ClipProducer::numbered("b", 1),
        leader: None,
    });
    let first = share(ClipProducer::numbered("a", 1).with_following(next.clone()));
    let mut rx = FollowingReceiver::new(first);

    assert_eq!(rx.receive(), Frame::picture("a#0"));
    assert_eq!(rx.receive(), Frame::picture("b#0"));
    assert!(Arc::ptr_eq(rx.producer(), &next));
    assert_eq!(label_of(rx.producer()), "recorder");
    assert_eq!(rx.receive(), Frame::picture("b#0"));
}

#[test]
fn successor_learns_its_leader() {
    let next = Arc::new(std::sync::Mutex::new(Recorder {
        inner: ClipProducer::numbered("b", 1),
        leader: None,
    }));
    let next_dyn: SharedProducer = next.clone();
    let first = share(ClipProducer::numbered("a", 0).with_following(next_dyn));
    let mut rx = FollowingReceiver::new(first);
    rx.receive();
    assert_eq!(next.lock().unwrap().leader.as_deref(), Some("clip[a]"));
}

#[test]
fn self_successor_is_not_followed() {
    let p = Arc::new(std::sync::Mutex::new(SelfLoop { me: None }));
    let handle: SharedProducer = p.clone();
    p.lock().unwrap().me = Some(handle.clone());
    let mut rx = FollowingReceiver::new(handle);
    assert!(rx.receive().is_empty());
}

#[test]
fn endless_chain_stops_at_hop_limit() {
    let mut rx = FollowingReceiver::new(share(Endless));
    assert!(rx.receive().is_empty());
}

#[test]
fn replace_keeps_freeze_frame() {
    let mut rx = FollowingReceiver::new(share(ClipProducer::numbered("a", 1)));
    rx.receive();
    rx.replace(share(ClipProducer::numbered("b", 0)));
    assert_eq!(rx.receive(), Frame::picture("a#0"));
    rx.replace(share(EmptyProducer));
    assert!(rx.receive().is_empty());
}

#[test]
fn seeded_freeze_frame_covers_an_ended_producer() {
    let mut rx = FollowingReceiver::with_last(
        share(ClipProducer::numbered("a", 0)),
        Some(Frame::picture("held")),
    );
    assert_eq!(rx.receive(), Frame::picture("held"));

    let mut rx = FollowingReceiver::with_last(
        share(ClipProducer::numbered("a", 1)),
        Some(Frame::picture("held")),
    );
    assert_eq!(rx.receive(), Frame::picture("a#0"));
    assert_eq!(rx.receive(), Frame::picture("a#0"));
}
