//! Station and zone types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two topological segments of the line.
///
/// The Oedo Line is shaped like a "6": a linear branch from 光が丘 down
/// to 都庁前, and a loop through central Tokyo that starts and ends at
/// 都庁前. Every station belongs to exactly one zone, except the
/// junction itself, which appears in both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Linear,
    Circular,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Linear => f.write_str("linear"),
            Zone::Circular => f.write_str("circular"),
        }
    }
}

/// A station entry in a topology sequence.
///
/// `next_km` is the distance to the next entry of the same sequence in
/// traversal order. The terminal entry of the linear sequence and the
/// loop-closing entry of the circular sequence carry 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: &'static str,
    pub zone: Zone,
    pub next_km: f64,
}

impl Station {
    pub const fn new(name: &'static str, zone: Zone, next_km: f64) -> Self {
        Self {
            name,
            zone,
            next_km,
        }
    }
}
