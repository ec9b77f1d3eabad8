//! The fixed Oedo Line topology.
//!
//! The line has two zones joined at the single junction station 都庁前:
//! a linear branch (光が丘 to 都庁前) and a loop through central Tokyo.
//! The circular sequence starts at the junction, proceeds clockwise,
//! and repeats the junction as its final entry to close the loop. This
//! is immutable reference data; the route engine only reads it.

use crate::domain::{Station, Zone};

/// The junction station present in both zones.
pub const JUNCTION: &str = "都庁前";

/// Rest durations offered to the user, in minutes.
pub const REST_MINUTE_OPTIONS: [u32; 3] = [15, 30, 60];

/// The immutable station topology.
#[derive(Debug, Clone)]
pub struct Topology {
    linear: Vec<Station>,
    circular: Vec<Station>,
}

impl Topology {
    /// The real Toei Oedo Line data.
    ///
    /// Distances are inter-station walking distances in km; each
    /// entry's distance applies to the hop onto the next entry of the
    /// same sequence.
    pub fn oedo_line() -> Self {
        use Zone::{Circular, Linear};

        let linear = vec![
            Station::new("光が丘", Linear, 1.1),
            Station::new("練馬春日町", Linear, 0.9),
            Station::new("豊島園", Linear, 1.2),
            Station::new("練馬", Linear, 1.1),
            Station::new("新江古田", Linear, 1.3),
            Station::new("落合南長崎", Linear, 1.0),
            Station::new("中井", Linear, 0.8),
            Station::new("東中野", Linear, 1.1),
            Station::new("中野坂上", Linear, 1.0),
            Station::new("西新宿五丁目", Linear, 0.9),
            Station::new(JUNCTION, Linear, 0.0),
        ];

        let circular = vec![
            Station::new(JUNCTION, Circular, 0.7),
            Station::new("新宿西口", Circular, 0.8),
            Station::new("東新宿", Circular, 1.1),
            Station::new("若松河田", Circular, 0.9),
            Station::new("牛込柳町", Circular, 0.8),
            Station::new("牛込神楽坂", Circular, 1.0),
            Station::new("飯田橋", Circular, 1.2),
            Station::new("春日", Circular, 0.9),
            Station::new("本郷三丁目", Circular, 1.1),
            Station::new("上野御徒町", Circular, 1.0),
            Station::new("新御徒町", Circular, 0.9),
            Station::new("蔵前", Circular, 1.0),
            Station::new("両国", Circular, 0.8),
            Station::new("森下", Circular, 0.9),
            Station::new("清澄白河", Circular, 1.0),
            Station::new("門前仲町", Circular, 1.1),
            Station::new("月島", Circular, 0.8),
            Station::new("勝どき", Circular, 0.9),
            Station::new("築地市場", Circular, 1.0),
            Station::new("汐留", Circular, 0.9),
            Station::new("大門", Circular, 0.8),
            Station::new("赤羽橋", Circular, 0.9),
            Station::new("麻布十番", Circular, 1.0),
            Station::new("六本木", Circular, 0.8),
            Station::new("青山一丁目", Circular, 0.9),
            Station::new("国立競技場", Circular, 1.1),
            Station::new("代々木", Circular, 0.8),
            Station::new("新宿", Circular, 0.9),
            Station::new(JUNCTION, Circular, 0.0),
        ];

        Self { linear, circular }
    }

    /// The linear sequence, from 光が丘 to the junction inclusive.
    pub fn linear(&self) -> &[Station] {
        &self.linear
    }

    /// The circular sequence, junction first and last.
    pub fn circular(&self) -> &[Station] {
        &self.circular
    }

    /// The junction station name.
    pub fn junction(&self) -> &'static str {
        JUNCTION
    }

    /// Index of a station in the linear sequence.
    pub fn linear_index(&self, name: &str) -> Option<usize> {
        self.linear.iter().position(|s| s.name == name)
    }

    /// Index of a station in the circular sequence (first occurrence,
    /// so the junction resolves to 0).
    pub fn circular_index(&self, name: &str) -> Option<usize> {
        self.circular.iter().position(|s| s.name == name)
    }

    /// Whether the name appears in either sequence.
    pub fn contains(&self, name: &str) -> bool {
        self.linear_index(name).is_some() || self.circular_index(name).is_some()
    }

    /// The selectable station list: every station exactly once. The
    /// circular sequence contributes its interior entries only, since
    /// both of its junction rows duplicate the linear terminus.
    pub fn station_options(&self) -> Vec<&Station> {
        let interior = &self.circular[1..self.circular.len() - 1];
        self.linear.iter().chain(interior.iter()).collect()
    }
}
