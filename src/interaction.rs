//! Pointer interaction state machine shared by the wheels and sliders.
//!
//! A pointer-down on any canvas starts a drag for that canvas's endpoint and
//! samples immediately. Moves sample only while dragging. Pointer-up and
//! pointer-leave always return to idle.

/// Which gradient color a canvas edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        }
    }
}

/// The kind of canvas a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasKind {
    Wheel,
    Brightness,
}

/// Pointer position in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// Session-scoped drag state. `Dragging` always carries its endpoint, so a
/// drag can never exist without an active endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(Endpoint),
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging(_))
    }

    pub fn active_endpoint(&self) -> Option<Endpoint> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(e) => Some(*e),
        }
    }

    /// Whether `event` can change anything. Only a pointer-down does work
    /// while idle; moves, releases and leaves are no-ops then.
    pub fn accepts(&self, event: &PointerEvent) -> bool {
        matches!(event, PointerEvent::Down(_)) || self.is_dragging()
    }

    /// Apply `event` from a canvas owned by `endpoint`.
    ///
    /// Returns the endpoint and position to sample, if this event should
    /// produce a color update.
    pub fn handle(&mut self, endpoint: Endpoint, event: PointerEvent) -> Option<(Endpoint, Point)> {
        match event {
            PointerEvent::Down(pos) => {
                if *self != Interaction::Dragging(endpoint) {
                    log::debug!("drag start on {} endpoint", endpoint.name());
                }
                *self = Interaction::Dragging(endpoint);
                Some((endpoint, pos))
            }
            PointerEvent::Move(pos) => {
                let active = self.active_endpoint()?;
                log::trace!("drag {} endpoint to ({}, {})", active.name(), pos.x, pos.y);
                Some((active, pos))
            }
            PointerEvent::Up | PointerEvent::Leave => {
                if let Interaction::Dragging(active) = *self {
                    log::debug!("drag end on {} endpoint", active.name());
                }
                *self = Interaction::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_starts_drag_and_samples() {
        let mut state = Interaction::default();
        let sample = state.handle(Endpoint::End, PointerEvent::Down(Point::new(3.0, 4.0)));
        assert_eq!(sample, Some((Endpoint::End, Point::new(3.0, 4.0))));
        assert_eq!(state, Interaction::Dragging(Endpoint::End));
        assert!(state.is_dragging());
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut state = Interaction::Idle;
        assert_eq!(
            state.handle(Endpoint::Start, PointerEvent::Move(Point::new(1.0, 1.0))),
            None
        );
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn move_while_dragging_samples_active_endpoint() {
        let mut state = Interaction::Dragging(Endpoint::Start);
        let sample = state.handle(Endpoint::Start, PointerEvent::Move(Point::new(9.0, 2.0)));
        assert_eq!(sample, Some((Endpoint::Start, Point::new(9.0, 2.0))));
    }

    #[test]
    fn up_and_leave_reset() {
        for event in [PointerEvent::Up, PointerEvent::Leave] {
            let mut state = Interaction::Dragging(Endpoint::End);
            assert_eq!(state.handle(Endpoint::End, event), None);
            assert_eq!(state, Interaction::Idle);
            assert_eq!(state.active_endpoint(), None);
        }
    }

    #[test]
    fn idle_accepts_only_pointer_down() {
        let idle = Interaction::Idle;
        assert!(idle.accepts(&PointerEvent::Down(Point::new(0.0, 0.0))));
        assert!(!idle.accepts(&PointerEvent::Move(Point::new(0.0, 0.0))));
        assert!(!idle.accepts(&PointerEvent::Up));
        assert!(!idle.accepts(&PointerEvent::Leave));

        let dragging = Interaction::Dragging(Endpoint::Start);
        for event in [
            PointerEvent::Down(Point::new(1.0, 1.0)),
            PointerEvent::Move(Point::new(1.0, 1.0)),
            PointerEvent::Up,
            PointerEvent::Leave,
        ] {
            assert!(dragging.accepts(&event));
        }
    }

    #[test]
    fn leave_while_idle_stays_idle() {
        let mut state = Interaction::Idle;
        assert_eq!(state.handle(Endpoint::Start, PointerEvent::Leave), None);
        assert_eq!(state, Interaction::Idle);
    }
}
