//! Render statistics panel: FPS, frame time and what is being drawn

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks rendering performance metrics
pub struct RenderStats {
    frame_times: VecDeque<Instant>,
    fps: f32,
    last_update: Instant,
}

impl Default for RenderStats {
    fn default() -> Self {
        Self {
            frame_times: VecDeque::new(),
            fps: 0.0,
            last_update: Instant::now(),
        }
    }
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a frame was rendered
    pub fn record_frame(&mut self) {
        self.record_frame_at(Instant::now());
    }

    fn record_frame_at(&mut self, now: Instant) {
        self.frame_times.push_back(now);

        // Keep only frames from the last second
        if let Some(cutoff) = now.checked_sub(Duration::from_secs(1)) {
            while self.frame_times.front().is_some_and(|&t| t < cutoff) {
                self.frame_times.pop_front();
            }
        }

        if now.duration_since(self.last_update) > Duration::from_millis(250) {
            self.fps = self.frame_times.len() as f32;
            self.last_update = now;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn ui(&self, ui: &mut egui::Ui, particles: u64, animating: bool) {
        ui.monospace(format!("FPS: {:.0}", self.fps));
        if self.fps > 0.0 {
            ui.monospace(format!("Frame: {:.1}ms", 1000.0 / self.fps));
        }
        ui.monospace(format!("Particles: {particles}"));
        if animating {
            ui.monospace("Transition running");
        }
    }
}
