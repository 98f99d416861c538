//! Ordered event queue

use crate::event::GalaxyEvent;

/// Producers push, the frame loop drains in arrival order
pub struct EventBus {
    events: Vec<GalaxyEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GalaxyEvent) {
        self.events.push(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<GalaxyEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_animation::TransitionKind;
    use galaxy_core::GalaxyParams;

    #[test]
    fn test_drain_keeps_arrival_order() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.push(GalaxyEvent::TransitionRequested(TransitionKind::Collapse));
        bus.push(GalaxyEvent::ParamsCommitted(GalaxyParams::default()));
        bus.push(GalaxyEvent::TransitionRequested(TransitionKind::Scatter));
        assert_eq!(bus.len(), 3);

        let events = bus.drain();
        assert_eq!(
            events[0],
            GalaxyEvent::TransitionRequested(TransitionKind::Collapse)
        );
        assert!(matches!(events[1], GalaxyEvent::ParamsCommitted(_)));
        assert_eq!(
            events[2],
            GalaxyEvent::TransitionRequested(TransitionKind::Scatter)
        );
        assert!(bus.is_empty());
    }

    #[test]
    fn test_drain_clears() {
        let mut bus = EventBus::new();
        bus.push(GalaxyEvent::Resized {
            width: 800,
            height: 600,
        });
        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }
}
