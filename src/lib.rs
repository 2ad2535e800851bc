//! segue produces field-accurate transitions between two frame producers.
//!
//! A [`TransitionProducer`] sits between an outgoing (source) producer and an incoming
//! (destination) producer. Every output tick it:
//!
//! 1. pulls one frame from each side concurrently (`rayon::join`), repeating the last
//!    frame of a side that has run out ([`FollowingReceiver`]);
//! 2. samples the configured [`Tween`] twice, once per interlaced field;
//! 3. drives opacity, translation, key scale and audio gain according to the
//!    [`TransitionType`];
//! 4. weaves field variants together only when they differ, then stacks the
//!    destination above the source.
//!
//! After `duration` frames the transition ends and the orchestrator (for example a
//! [`Layer`]) moves on to the destination producer.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod frame;
mod producer;
mod transition;

pub use animation::tween::{Tween, TweenFn};
pub use foundation::core::{Vec2, VideoMode};
pub use foundation::error::{SegueError, SegueResult};
pub use frame::content::{Frame, FrameContent, ResolvedLayer};
pub use frame::transform::{AudioTransform, ImageTransform};
pub use producer::basic::{ClipProducer, EmptyProducer, StillProducer};
pub use producer::layer::Layer;
pub use producer::receiver::{FollowingReceiver, MAX_FOLLOW_HOPS};
pub use producer::{FrameProducer, SharedProducer, share};
pub use transition::engine::{FetchMode, TransitionProducer, compose, field_deltas};
pub use transition::spec::{
    TransitionConfig, TransitionDirection, TransitionSpec, TransitionType,
};
