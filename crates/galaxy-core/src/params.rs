//! Galaxy generation parameters and the bounds of their debug controls

use crate::error::{GalaxyError, Result};
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Bounds and step of one numeric control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and snap onto the step grid anchored at `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Bounds check for a `f32` field, done in `f32` so that a value written
    /// as `0.1` in a preset matches a bound written as `0.1`
    fn contains_f32(&self, value: f32) -> bool {
        (self.min as f32..=self.max as f32).contains(&value)
    }

    fn out_of_range(&self, field: &str, value: f64) -> GalaxyError {
        GalaxyError::ValueOutOfRange {
            field: field.to_string(),
            min: self.min,
            max: self.max,
            value,
        }
    }

    fn check(&self, field: &str, value: u32) -> Result<()> {
        if self.contains(value as f64) {
            Ok(())
        } else {
            Err(self.out_of_range(field, value as f64))
        }
    }

    fn check_f32(&self, field: &str, value: f32) -> Result<()> {
        if self.contains_f32(value) {
            Ok(())
        } else {
            Err(self.out_of_range(field, value as f64))
        }
    }
}

/// How overlapping points combine with what is already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointBlending {
    /// Source-alpha over destination
    #[default]
    Custom,
    /// Colors add up where points overlap
    Additive,
}

impl PointBlending {
    pub const ALL: [PointBlending; 2] = [PointBlending::Custom, PointBlending::Additive];

    pub fn label(&self) -> &'static str {
        match self {
            PointBlending::Custom => "custom",
            PointBlending::Additive => "additive",
        }
    }
}

/// Inputs of galaxy generation.
///
/// `count` fixes the length of every generated buffer (`count * 3` floats);
/// any change to it invalidates all buffers built before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyParams {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub length: f32,
    pub strings: u32,
    pub curl: f32,
    /// Exposed for tuning; the current layouts don't consume it.
    pub randomness: f32,
    /// Exposed for tuning; the current layouts don't consume it.
    pub randomness_power: f32,
    pub inside_color: Color,
    pub outside_color: Color,
    pub blending: PointBlending,
}

impl GalaxyParams {
    pub const COUNT: ParamRange = ParamRange::new(100.0, 1_000_000.0, 100.0);
    pub const SIZE: ParamRange = ParamRange::new(0.001, 0.1, 0.001);
    pub const RADIUS: ParamRange = ParamRange::new(0.01, 20.0, 0.01);
    pub const LENGTH: ParamRange = ParamRange::new(0.01, 20.0, 0.01);
    pub const STRINGS: ParamRange = ParamRange::new(2.0, 20.0, 1.0);
    pub const CURL: ParamRange = ParamRange::new(-5.0, 5.0, 0.001);
    pub const RANDOMNESS: ParamRange = ParamRange::new(0.0, 2.0, 0.001);
    pub const RANDOMNESS_POWER: ParamRange = ParamRange::new(1.0, 10.0, 0.001);

    /// Copy with every numeric field clamped and snapped to its control bounds
    pub fn clamped(&self) -> Self {
        Self {
            count: Self::COUNT.clamp(self.count as f64) as u32,
            size: Self::SIZE.clamp(self.size as f64) as f32,
            radius: Self::RADIUS.clamp(self.radius as f64) as f32,
            length: Self::LENGTH.clamp(self.length as f64) as f32,
            strings: Self::STRINGS.clamp(self.strings as f64) as u32,
            curl: Self::CURL.clamp(self.curl as f64) as f32,
            randomness: Self::RANDOMNESS.clamp(self.randomness as f64) as f32,
            randomness_power: Self::RANDOMNESS_POWER.clamp(self.randomness_power as f64) as f32,
            ..self.clone()
        }
    }

    /// Reject any field outside its control bounds
    pub fn validate(&self) -> Result<()> {
        Self::COUNT.check("count", self.count)?;
        Self::SIZE.check_f32("size", self.size)?;
        Self::RADIUS.check_f32("radius", self.radius)?;
        Self::LENGTH.check_f32("length", self.length)?;
        Self::STRINGS.check("strings", self.strings)?;
        Self::CURL.check_f32("curl", self.curl)?;
        Self::RANDOMNESS.check_f32("randomness", self.randomness)?;
        Self::RANDOMNESS_POWER.check_f32("randomness_power", self.randomness_power)?;
        Ok(())
    }

    /// Number of floats in each generated buffer
    pub fn buffer_len(&self) -> usize {
        self.count as usize * 3
    }
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.017,
            radius: 5.0,
            length: 5.0,
            strings: 3,
            curl: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: Color::from_hex(0xff6030),
            outside_color: Color::from_hex(0x1b3984),
            blending: PointBlending::Custom,
        }
    }
}
