//! Shared gesture constants for drag and fling handling.
//!
//! Values are in pixels and pixels per second. Hosts on dense displays scale
//! them through `GestureConfig` rather than editing these defaults.

/// Maximum fling velocity in pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Release speed in pixels per second below which a drag settles instead of flinging.
///
/// Matches ViewConfiguration's minimum fling velocity on a baseline density.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Speed in pixels per second below which a running fling is considered at rest.
pub const FLING_STOP_VELOCITY: f32 = 1.0;

/// Only samples this recent (in milliseconds) contribute to the release velocity.
pub const VELOCITY_HORIZON_MS: i64 = 100;

/// A gap this long (in milliseconds) between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;
