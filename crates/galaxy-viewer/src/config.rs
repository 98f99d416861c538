//! Startup configuration: preset plus command-line overrides

use galaxy_runtime::RedrawMode;
use galaxy_scene::GalaxyPreset;

/// Everything the app needs before the window exists
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub preset: GalaxyPreset,
    /// Fixed random seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub fullscreen: bool,
    pub redraw_mode: RedrawMode,
}

impl ViewerConfig {
    pub fn new(preset: GalaxyPreset) -> Self {
        Self {
            preset,
            seed: None,
            fullscreen: false,
            redraw_mode: RedrawMode::Continuous,
        }
    }

    /// Apply a particle count from the command line. The result is clamped
    /// to the panel bounds like any other edit.
    pub fn with_count(mut self, count: Option<u32>) -> Self {
        if let Some(count) = count {
            self.preset.galaxy.count = count;
        }
        self.preset.galaxy = self.preset.galaxy.clamped();
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_on_demand(mut self, on_demand: bool) -> Self {
        self.redraw_mode = if on_demand {
            RedrawMode::OnDemand
        } else {
            RedrawMode::Continuous
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_override_wins_over_preset() {
        let preset = GalaxyPreset::from_toml_str("[galaxy]\ncount = 5000").unwrap();
        let config = ViewerConfig::new(preset).with_count(Some(20_000));
        assert_eq!(config.preset.galaxy.count, 20_000);
    }

    #[test]
    fn count_override_is_clamped() {
        let config = ViewerConfig::new(GalaxyPreset::default()).with_count(Some(5_000_050));
        assert_eq!(config.preset.galaxy.count, 1_000_000);
        let config = ViewerConfig::new(GalaxyPreset::default()).with_count(Some(12_345));
        assert_eq!(config.preset.galaxy.count, 12_300);
    }

    #[test]
    fn flags_map_onto_config() {
        let config = ViewerConfig::new(GalaxyPreset::default())
            .with_count(None)
            .with_seed(Some(7))
            .with_fullscreen(true)
            .with_on_demand(true);
        assert_eq!(config.preset.galaxy.count, 100_000);
        assert_eq!(config.seed, Some(7));
        assert!(config.fullscreen);
        assert_eq!(config.redraw_mode, RedrawMode::OnDemand);
    }
}
