//! Decay physics for the FM dial
//!
//! A fling has no fixed target: it starts with a release velocity and
//! decelerates until it comes to rest. This crate turns that velocity into a
//! position/velocity curve over time; scheduling frames is the host's job.

mod decay_spec;

pub use decay_spec::*;
