//! Walking-speed presets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three walking-speed presets offered to the user.
///
/// The route engine itself is speed-agnostic and takes a raw km/h
/// value; a typical caller computes one itinerary per preset for the
/// same origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkingSpeed {
    Slow,
    Normal,
    Fast,
}

impl WalkingSpeed {
    /// All presets, in the order they are presented.
    pub const ALL: [WalkingSpeed; 3] =
        [WalkingSpeed::Slow, WalkingSpeed::Normal, WalkingSpeed::Fast];

    /// The walking speed in km/h.
    pub fn km_per_hour(&self) -> f64 {
        match self {
            WalkingSpeed::Slow => 3.0,
            WalkingSpeed::Normal => 4.0,
            WalkingSpeed::Fast => 5.0,
        }
    }

    /// Display label as shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            WalkingSpeed::Slow => "ゆっくり (3km/h)",
            WalkingSpeed::Normal => "普通 (4km/h)",
            WalkingSpeed::Fast => "速い (5km/h)",
        }
    }
}

impl fmt::Display for WalkingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkingSpeed::Slow => f.write_str("slow"),
            WalkingSpeed::Normal => f.write_str("normal"),
            WalkingSpeed::Fast => f.write_str("fast"),
        }
    }
}
