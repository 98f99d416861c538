//! Single authority over when a frame gets drawn

/// How the loop decides to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedrawMode {
    /// Draw every frame, like a browser animation loop
    #[default]
    Continuous,
    /// Draw only after something asked for it
    OnDemand,
}

/// Collects redraw requests from anywhere in the app.
///
/// Any number of requests between two frames coalesce into one redraw.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    mode: RedrawMode,
    pending: bool,
    frames: u64,
}

impl RedrawScheduler {
    pub fn new(mode: RedrawMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> RedrawMode {
        self.mode
    }

    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Whether the next frame should be drawn
    pub fn should_redraw(&self) -> bool {
        self.mode == RedrawMode::Continuous || self.pending
    }

    /// Consume the pending request. Returns `true` if a frame should be drawn.
    pub fn take(&mut self) -> bool {
        let draw = self.should_redraw();
        if draw {
            self.pending = false;
            self.frames += 1;
        }
        draw
    }

    /// Frames granted by `take`
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_always_draws() {
        let mut scheduler = RedrawScheduler::new(RedrawMode::Continuous);
        assert!(scheduler.take());
        assert!(scheduler.take());
        assert_eq!(scheduler.frame_count(), 2);
    }

    #[test]
    fn on_demand_waits_for_request() {
        let mut scheduler = RedrawScheduler::new(RedrawMode::OnDemand);
        assert!(!scheduler.should_redraw());
        assert!(!scheduler.take());

        scheduler.request();
        assert!(scheduler.take());
        assert!(!scheduler.take());
    }

    #[test]
    fn requests_coalesce() {
        let mut scheduler = RedrawScheduler::new(RedrawMode::OnDemand);
        scheduler.request();
        scheduler.request();
        scheduler.request();
        assert!(scheduler.take());
        assert!(!scheduler.take());
        assert_eq!(scheduler.frame_count(), 1);
    }
}
