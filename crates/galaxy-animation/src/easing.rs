//! Easing curves, addressed by name

use galaxy_core::GalaxyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which end of the curve the acceleration sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

/// Maps linear progress in [0, 1] onto eased progress in [0, 1].
///
/// Names follow the common tweening convention: `"powerN"` (N in 1..=4) is
/// shorthand for `"powerN.out"`; `.in` and `.inOut` select the other shapes.
/// `"none"`, `"linear"` and `"power0"` are linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    Power { degree: u8, direction: EaseDirection },
}

impl Ease {
    pub const POWER1: Ease = Ease::Power {
        degree: 1,
        direction: EaseDirection::Out,
    };
    pub const POWER3: Ease = Ease::Power {
        degree: 3,
        direction: EaseDirection::Out,
    };

    /// Eased value of `progress` (clamped to [0, 1])
    pub fn apply(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => p,
            Ease::Power { degree, direction } => {
                let e = degree as i32 + 1;
                match direction {
                    EaseDirection::In => p.powi(e),
                    EaseDirection::Out => 1.0 - (1.0 - p).powi(e),
                    EaseDirection::InOut => {
                        if p < 0.5 {
                            (2.0 * p).powi(e) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - p)).powi(e) / 2.0
                        }
                    }
                }
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::POWER1
    }
}

impl FromStr for Ease {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GalaxyError::AnimationError(format!("Unknown ease: {s}"));

        let name = s.trim();
        if matches!(name, "none" | "linear" | "power0") {
            return Ok(Ease::Linear);
        }

        let (base, suffix) = match name.split_once('.') {
            Some((base, suffix)) => (base, Some(suffix)),
            None => (name, None),
        };
        let degree: u8 = base
            .strip_prefix("power")
            .and_then(|d| d.parse().ok())
            .ok_or_else(unknown)?;
        if degree == 0 && suffix.is_some() {
            return Ok(Ease::Linear);
        }
        if !(1..=4).contains(&degree) {
            return Err(unknown());
        }
        let direction = match suffix {
            None | Some("out") => EaseDirection::Out,
            Some("in") => EaseDirection::In,
            Some("inOut") => EaseDirection::InOut,
            Some(_) => return Err(unknown()),
        };
        Ok(Ease::Power { degree, direction })
    }
}

impl TryFrom<String> for Ease {
    type Error = GalaxyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => write!(f, "none"),
            Ease::Power { degree, direction } => {
                let suffix = match direction {
                    EaseDirection::In => "in",
                    EaseDirection::Out => "out",
                    EaseDirection::InOut => "inOut",
                };
                write!(f, "power{degree}.{suffix}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [EaseDirection; 3] =
        [EaseDirection::In, EaseDirection::Out, EaseDirection::InOut];

    #[test]
    fn endpoints_are_fixed() {
        for degree in 1..=4 {
            for direction in ALL_DIRECTIONS {
                let ease = Ease::Power { degree, direction };
                assert!(ease.apply(0.0).abs() < 1e-6, "{ease} at 0");
                assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease} at 1");
            }
        }
    }

    #[test]
    fn power_out_front_loads_progress() {
        // power3.out = 1 - (1 - p)^4
        let v = Ease::POWER3.apply(0.5);
        assert!((v - 0.9375).abs() < 1e-6);
        // power1.out = 1 - (1 - p)^2
        let v = Ease::POWER1.apply(0.5);
        assert!((v - 0.75).abs() < 1e-6);
    }

    #[test]
    fn in_out_is_symmetric() {
        let ease: Ease = "power2.inOut".parse().unwrap();
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
        let a = ease.apply(0.2);
        let b = ease.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Ease::Linear.apply(-1.0), 0.0);
        assert_eq!(Ease::POWER3.apply(3.0), 1.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("power3".parse::<Ease>().unwrap(), Ease::POWER3);
        assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::POWER3);
        assert_eq!("power1".parse::<Ease>().unwrap(), Ease::POWER1);
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
        assert_eq!("power0".parse::<Ease>().unwrap(), Ease::Linear);
        assert_eq!(
            "power4.in".parse::<Ease>().unwrap(),
            Ease::Power {
                degree: 4,
                direction: EaseDirection::In
            }
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("bounce".parse::<Ease>().is_err());
        assert!("power9".parse::<Ease>().is_err());
        assert!("power2.sideways".parse::<Ease>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for name in ["none", "power1.out", "power3.in", "power2.inOut"] {
            let ease: Ease = name.parse().unwrap();
            assert_eq!(ease.to_string(), name);
        }
    }
}
