use super::*;
use crate::producer::{lock, share};

#[test]
fn empty_never_ends() {
    let mut p = EmptyProducer;
    for _ in 0..3 {
        assert!(p.receive().unwrap().is_empty());
    }
    assert_eq!(p.label(), "empty");
}

#[test]
fn still_repeats_its_frame() {
    let mut p = StillProducer::new(Frame::picture("card"));
    assert_eq!(p.receive(), Some(Frame::picture("card")));
    assert_eq!(p.receive(), Some(Frame::picture("card")));
}

#[test]
fn clip_plays_in_order_then_ends() {
    let mut p = ClipProducer::numbered("a", 2);
    assert_eq!(p.label(), "clip[a]");
    assert_eq!(p.receive(), Some(Frame::picture("a#0")));
    assert_eq!(p.remaining(), 1);
    assert_eq!(p.receive(), Some(Frame::picture("a#1")));
    assert_eq!(p.receive(), None);
    assert_eq!(p.receive(), None);
    assert!(p.following_producer().is_none());
}

#[test]
fn clip_exposes_its_successor() {
    let next = share(ClipProducer::numbered("b", 1));
    let p = ClipProducer::numbered("a", 0).with_following(next.clone());
    let following = p.following_producer().unwrap();
    assert!(std::sync::Arc::ptr_eq(&following, &next));
    assert_eq!(lock(&following).label(), "clip[b]");
}

#[test]
fn last_frame_tracks_what_was_handed_out() {
    let mut clip = ClipProducer::numbered("a", 2);
    assert!(clip.last_frame().is_none());
    clip.receive();
    clip.receive();
    clip.receive();
    assert_eq!(clip.last_frame(), Some(Frame::picture("a#1")));

    let still = StillProducer::new(Frame::picture("card"));
    assert_eq!(still.last_frame(), Some(Frame::picture("card")));
    assert!(EmptyProducer.last_frame().is_none());
}
