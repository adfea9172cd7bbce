use fmdial_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer sample delivered by the host.
///
/// `position` is in the dial's local coordinates and `uptime_ms` is a
/// monotonic timestamp in milliseconds. Cancel events carry no meaningful
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_ms)
    }

    pub fn moved(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_ms)
    }

    pub fn up(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_ms)
    }

    pub fn cancel(uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, uptime_ms)
    }

    /// Tags the event with a pointer id.
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
