//! Station-graph traversal across the two zones.
//!
//! A route falls into one of four topological cases, decided up front
//! from index lookups: both endpoints linear, both circular, or one of
//! the two cross-zone cases spliced at the junction. Each case runs one
//! or two pure sub-route walks; the clock, distance, and running hop
//! counter continue unbroken across a splice.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::domain::{Direction, RouteError, RouteResult, RouteStation, Station};
use crate::topology::Topology;

/// Rest rule: every fifth hop pauses, unless it lands on the route's
/// final destination.
const REST_EVERY_HOPS: u32 = 5;

/// Compute a walking itinerary between two stations.
///
/// `direction` applies only where the route touches the circular zone;
/// a purely linear route takes its direction from the endpoints.
///
/// # Errors
///
/// `RouteError::InvalidSpeed` if `speed_kmh` is not a positive finite
/// number, `RouteError::UnknownStation` if either name is in neither
/// sequence. No partial route is ever returned.
pub fn compute_route(
    topology: &Topology,
    origin: &str,
    destination: &str,
    speed_kmh: f64,
    start: NaiveDateTime,
    direction: Direction,
    rest_minutes: u32,
) -> Result<RouteResult, RouteError> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(RouteError::InvalidSpeed(speed_kmh));
    }

    let case = classify(topology, origin, destination)?;
    debug!(?case, origin, destination, speed_kmh, %direction, "planning route");

    let route = match case {
        RouteCase::Linear { from, to } => walk_linear(
            topology.linear(),
            from,
            to,
            speed_kmh,
            start,
            rest_minutes,
            0,
            true,
        )
        .into_result(),

        RouteCase::Circular { from, to } => walk_circular(
            topology.circular(),
            from,
            to,
            direction,
            speed_kmh,
            start,
            rest_minutes,
            0,
            true,
        )
        .into_result(),

        RouteCase::LinearToCircular { from, to } => {
            let junction = topology.linear().len() - 1;
            let first = walk_linear(
                topology.linear(),
                from,
                junction,
                speed_kmh,
                start,
                rest_minutes,
                0,
                false,
            );
            let second = walk_circular(
                topology.circular(),
                0,
                to,
                direction,
                speed_kmh,
                first.resume_time(),
                rest_minutes,
                first.hops,
                true,
            );
            splice(first, second)
        }

        RouteCase::CircularToLinear { from, to } => {
            let first = walk_circular(
                topology.circular(),
                from,
                0,
                direction,
                speed_kmh,
                start,
                rest_minutes,
                0,
                false,
            );
            let junction = topology.linear().len() - 1;
            let second = walk_linear(
                topology.linear(),
                junction,
                to,
                speed_kmh,
                first.resume_time(),
                rest_minutes,
                first.hops,
                true,
            );
            splice(first, second)
        }
    };

    Ok(route)
}

/// The four mutually exclusive topological cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteCase {
    Linear { from: usize, to: usize },
    Circular { from: usize, to: usize },
    LinearToCircular { from: usize, to: usize },
    CircularToLinear { from: usize, to: usize },
}

/// Resolve both endpoints and pick the topological case.
///
/// The arms are tried in a fixed order, so an endpoint at the junction
/// (present in both sequences) plans in the linear zone whenever the
/// other endpoint allows it.
fn classify(
    topology: &Topology,
    origin: &str,
    destination: &str,
) -> Result<RouteCase, RouteError> {
    let from_linear = topology.linear_index(origin);
    let from_circular = topology.circular_index(origin);
    if from_linear.is_none() && from_circular.is_none() {
        return Err(RouteError::UnknownStation(origin.to_string()));
    }

    let to_linear = topology.linear_index(destination);
    let to_circular = topology.circular_index(destination);
    if to_linear.is_none() && to_circular.is_none() {
        return Err(RouteError::UnknownStation(destination.to_string()));
    }

    let case = if let (Some(from), Some(to)) = (from_linear, to_linear) {
        RouteCase::Linear { from, to }
    } else if let (Some(from), Some(to)) = (from_circular, to_circular) {
        RouteCase::Circular { from, to }
    } else if let (Some(from), Some(to)) = (from_linear, to_circular) {
        RouteCase::LinearToCircular { from, to }
    } else if let (Some(from), Some(to)) = (from_circular, to_linear) {
        RouteCase::CircularToLinear { from, to }
    } else {
        // Both endpoints resolved above, so one of the four pairs matched.
        unreachable!("endpoints validated against both sequences")
    };

    Ok(case)
}

/// One sub-route walk in progress: the stations recorded so far, the
/// distance walked, and the running hop counter (continued across
/// splices, never reset).
struct SubRoute {
    stations: Vec<RouteStation>,
    total_km: f64,
    hops: u32,
}

impl SubRoute {
    /// Seed a walk with its origin entry. The origin records departure
    /// equal to arrival.
    fn seeded(origin: &Station, start: NaiveDateTime, prior_hops: u32) -> Self {
        Self {
            stations: vec![RouteStation {
                name: origin.name.to_string(),
                arrival: start,
                departure: Some(start),
                is_rest_station: false,
            }],
            total_km: 0.0,
            hops: prior_hops,
        }
    }

    /// The time the walk continues from: the last station's departure
    /// if it rested there, its arrival otherwise.
    fn resume_time(&self) -> NaiveDateTime {
        // Safe: seeded with the origin entry at construction.
        self.stations.last().unwrap().leaves_at()
    }

    /// Record arrival at the next station after a hop of `km`.
    ///
    /// `ends_route` marks the arrival as the whole route's final
    /// destination, which is never a rest station.
    fn record_hop(
        &mut self,
        station: &Station,
        km: f64,
        speed_kmh: f64,
        rest_minutes: u32,
        ends_route: bool,
    ) {
        let arrival = self.resume_time() + hop_duration(km, speed_kmh);
        self.hops += 1;

        let rests = self.hops % REST_EVERY_HOPS == 0 && !ends_route;
        let departure = rests.then(|| arrival + Duration::minutes(i64::from(rest_minutes)));

        self.stations.push(RouteStation {
            name: station.name.to_string(),
            arrival,
            departure,
            is_rest_station: rests,
        });
        self.total_km += km;
    }

    fn into_result(self) -> RouteResult {
        RouteResult {
            stations: self.stations,
            total_distance_km: self.total_km,
        }
    }
}

/// Walking time for one hop at millisecond resolution.
fn hop_duration(km: f64, speed_kmh: f64) -> Duration {
    Duration::milliseconds((km / speed_kmh * 3_600_000.0).round() as i64)
}

/// Join two sub-routes at the junction, dropping the second walk's
/// seed entry (the junction is already recorded by the first walk).
fn splice(mut first: SubRoute, second: SubRoute) -> RouteResult {
    first.stations.extend(second.stations.into_iter().skip(1));
    RouteResult {
        stations: first.stations,
        total_distance_km: first.total_km + second.total_km,
    }
}

/// Walk the linear sequence from `from` to `to`.
///
/// Direction is implied by the indices. Walking down the array takes
/// each hop's distance from the entry being stepped onto rather than
/// the entry being left; both resolve to the same physical edge.
#[allow(clippy::too_many_arguments)]
fn walk_linear(
    stations: &[Station],
    from: usize,
    to: usize,
    speed_kmh: f64,
    start: NaiveDateTime,
    rest_minutes: u32,
    prior_hops: u32,
    ends_route: bool,
) -> SubRoute {
    let mut walk = SubRoute::seeded(&stations[from], start, prior_hops);
    let ascending = from < to;
    let mut cur = from;

    while cur != to {
        let next = if ascending { cur + 1 } else { cur - 1 };
        let km = if ascending {
            stations[cur].next_km
        } else {
            stations[next].next_km
        };
        cur = next;
        walk.record_hop(
            &stations[cur],
            km,
            speed_kmh,
            rest_minutes,
            ends_route && cur == to,
        );
    }

    walk
}

/// Walk the circular sequence from `from` to `to` in `direction`.
///
/// Indices step modulo the sequence length, so a clockwise walk to a
/// lower index runs through the loop-closing terminal entry. Equal
/// indices request a full loop: the walk circles all the way around
/// back to the origin index, covering the whole perimeter in the
/// requested direction.
#[allow(clippy::too_many_arguments)]
fn walk_circular(
    stations: &[Station],
    from: usize,
    to: usize,
    direction: Direction,
    speed_kmh: f64,
    start: NaiveDateTime,
    rest_minutes: u32,
    prior_hops: u32,
    ends_route: bool,
) -> SubRoute {
    let len = stations.len();
    let full_loop = from == to;
    let mut walk = SubRoute::seeded(&stations[from], start, prior_hops);
    let mut cur = from;

    if full_loop {
        loop {
            let next = direction.step(cur, len);
            let km = hop_km(stations, cur, next, direction);
            cur = next;
            let at_end = cur == from;
            walk.record_hop(
                &stations[cur],
                km,
                speed_kmh,
                rest_minutes,
                ends_route && at_end,
            );
            if at_end {
                break;
            }
        }
    } else {
        while cur != to {
            let next = direction.step(cur, len);
            let km = hop_km(stations, cur, next, direction);
            cur = next;
            walk.record_hop(
                &stations[cur],
                km,
                speed_kmh,
                rest_minutes,
                ends_route && cur == to,
            );
        }
    }

    // Path-closure special case: a full loop whose destination resolved
    // to the leading junction entry additionally records the terminal
    // entry, closing the loop as an explicit final station.
    if full_loop && to == 0 {
        let km = match direction {
            Direction::Clockwise => stations[len - 1].next_km,
            Direction::Counterclockwise => stations[0].next_km,
        };
        let arrival = walk.resume_time() + hop_duration(km, speed_kmh);
        walk.stations.push(RouteStation {
            name: stations[len - 1].name.to_string(),
            arrival,
            departure: None,
            is_rest_station: false,
        });
        walk.total_km += km;
    }

    walk
}

/// Distance for a circular hop: the array attaches each distance to the
/// lower-order entry of the edge, so a backward step reads it from the
/// entry being stepped onto.
fn hop_km(stations: &[Station], cur: usize, next: usize, direction: Direction) -> f64 {
    match direction {
        Direction::Clockwise => stations[cur].next_km,
        Direction::Counterclockwise => stations[next].next_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format_clock_time;
    use chrono::NaiveDate;

    fn topo() -> Topology {
        Topology::oedo_line()
    }

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn ts_s(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn plan(
        origin: &str,
        destination: &str,
        direction: Direction,
        rest_minutes: u32,
    ) -> RouteResult {
        compute_route(
            &topo(),
            origin,
            destination,
            4.0,
            ts(9, 0),
            direction,
            rest_minutes,
        )
        .unwrap()
    }

    /// Independently recompute the distance of one recorded hop from
    /// the topology, resolving junction-name ambiguity by trying every
    /// occurrence.
    pub(super) fn recomputed_hop_km(topology: &Topology, a: &str, b: &str) -> f64 {
        if let (Some(i), Some(j)) = (topology.linear_index(a), topology.linear_index(b)) {
            if i.abs_diff(j) == 1 {
                return topology.linear()[i.min(j)].next_km;
            }
        }

        let circ = topology.circular();
        let len = circ.len();
        let positions = |name: &str| -> Vec<usize> {
            circ.iter()
                .enumerate()
                .filter(|(_, s)| s.name == name)
                .map(|(i, _)| i)
                .collect()
        };

        for &i in &positions(a) {
            for &j in &positions(b) {
                if j == (i + 1) % len {
                    return circ[i].next_km;
                }
                if i == (j + 1) % len {
                    return circ[j].next_km;
                }
            }
        }

        panic!("stations {a} and {b} are not adjacent in the topology");
    }

    fn assert_distance_conserved(topology: &Topology, route: &RouteResult) {
        let recomputed: f64 = route
            .stations
            .windows(2)
            .map(|pair| recomputed_hop_km(topology, &pair[0].name, &pair[1].name))
            .sum();
        assert!(
            (recomputed - route.total_distance_km).abs() < 1e-9,
            "total {} differs from recomputed {}",
            route.total_distance_km,
            recomputed
        );
    }

    fn assert_clock_monotonic(route: &RouteResult) {
        for pair in route.stations.windows(2) {
            assert!(
                pair[1].arrival >= pair[0].leaves_at(),
                "clock went backwards between {} and {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    fn assert_rest_periodicity(route: &RouteResult, rest_minutes: u32) {
        let last = route.stations.len() - 1;
        for (i, station) in route.stations.iter().enumerate() {
            let expect_rest = i > 0 && i % 5 == 0 && i != last;
            assert_eq!(
                station.is_rest_station, expect_rest,
                "station {} at hop {i}",
                station.name
            );
            if expect_rest {
                let expected =
                    station.arrival + Duration::minutes(i64::from(rest_minutes));
                assert_eq!(station.departure, Some(expected));
            } else if i > 0 {
                assert_eq!(station.departure, None, "station {}", station.name);
            }
        }
    }

    // Linear zone

    #[test]
    fn single_linear_hop() {
        let route = plan("光が丘", "練馬春日町", Direction::Clockwise, 30);

        assert_eq!(route.stations.len(), 2);
        assert_eq!(route.stations[0].name, "光が丘");
        assert_eq!(route.stations[0].departure, Some(ts(9, 0)));
        assert_eq!(route.stations[1].name, "練馬春日町");
        // 1.1 km at 4 km/h is 16.5 minutes.
        assert_eq!(route.stations[1].arrival, ts_s(9, 16, 30));
        assert_eq!(format_clock_time(route.stations[1].arrival), "09:16");
        assert!(!route.stations[1].is_rest_station);
        assert!((route.total_distance_km - 1.1).abs() < 1e-9);
    }

    #[test]
    fn rest_inserted_every_fifth_hop() {
        // 光が丘 to 中井 is six hops; the fifth lands on 落合南長崎.
        let route = plan("光が丘", "中井", Direction::Clockwise, 30);

        assert_eq!(route.stations.len(), 7);
        let rest = &route.stations[5];
        assert_eq!(rest.name, "落合南長崎");
        assert!(rest.is_rest_station);
        // 5.6 km at 4 km/h is 84 minutes.
        assert_eq!(rest.arrival, ts(10, 24));
        assert_eq!(rest.departure, Some(ts(10, 54)));

        let dest = route.destination().unwrap();
        assert_eq!(dest.name, "中井");
        assert!(!dest.is_rest_station);
        // One more kilometre after the rest.
        assert_eq!(dest.arrival, ts(11, 9));

        assert!((route.total_distance_km - 6.6).abs() < 1e-9);
        // 84 min walking to the rest, 30 min rest, 15 min walking on.
        assert!((route.total_elapsed_hours() - 2.15).abs() < 1e-9);
    }

    #[test]
    fn rest_skipped_when_fifth_hop_is_destination() {
        // Exactly five hops: 光が丘 to 落合南長崎.
        let route = plan("光が丘", "落合南長崎", Direction::Clockwise, 30);

        assert_eq!(route.stations.len(), 6);
        let dest = route.destination().unwrap();
        assert!(!dest.is_rest_station);
        assert_eq!(dest.departure, None);
    }

    #[test]
    fn linear_descending_walks_whole_branch() {
        let route = plan("都庁前", "光が丘", Direction::Clockwise, 30);

        assert_eq!(route.stations.len(), 11);
        assert_eq!(route.stations[0].name, "都庁前");
        assert_eq!(route.destination().unwrap().name, "光が丘");
        assert!((route.total_distance_km - 10.4).abs() < 1e-9);
        assert!(route.stations[5].is_rest_station);

        assert_clock_monotonic(&route);
        assert_distance_conserved(&topo(), &route);
        assert_rest_periodicity(&route, 30);
    }

    #[test]
    fn junction_to_junction_is_a_single_station() {
        // The junction resolves in the linear zone first; equal indices
        // mean no hops at all.
        let route = plan("都庁前", "都庁前", Direction::Clockwise, 30);

        assert_eq!(route.stations.len(), 1);
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.total_elapsed_hours(), 0.0);
    }

    // Circular zone

    #[test]
    fn clockwise_wrap_to_junction() {
        // 東新宿 is index 2; walking clockwise to the junction wraps
        // through the end of the array, recording both junction rows.
        let topology = topo();
        let route = plan("東新宿", "都庁前", Direction::Clockwise, 0);

        assert_eq!(route.stations.len(), 28);
        let names: Vec<&str> = route.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names[0], "東新宿");
        assert_eq!(names[26], "都庁前");
        assert_eq!(names[27], "都庁前");

        // Distances come from the wrap segment only.
        let expected: f64 = topology.circular()[2..]
            .iter()
            .map(|s| s.next_km)
            .sum();
        assert!((route.total_distance_km - expected).abs() < 1e-9);

        assert_clock_monotonic(&route);
        assert_distance_conserved(&topology, &route);
    }

    #[test]
    fn counterclockwise_direct_walk() {
        // 若松河田 (index 3) counter-clockwise to 新宿西口 (index 1).
        let route = plan("若松河田", "新宿西口", Direction::Counterclockwise, 30);

        let names: Vec<&str> = route.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["若松河田", "東新宿", "新宿西口"]);
        // Backward hops read the stepped-onto entry's distance.
        assert!((route.total_distance_km - (1.1 + 0.8)).abs() < 1e-9);
        assert_distance_conserved(&topo(), &route);
    }

    #[test]
    fn full_loop_covers_whole_perimeter() {
        let topology = topo();
        let perimeter: f64 = topology.circular().iter().map(|s| s.next_km).sum();

        for direction in [Direction::Clockwise, Direction::Counterclockwise] {
            let route = plan("月島", "月島", direction, 0);

            assert_eq!(route.stations.len(), 30, "origin plus 29 hops");
            assert_eq!(route.stations[0].name, "月島");
            assert_eq!(route.destination().unwrap().name, "月島");
            assert!(
                (route.total_distance_km - perimeter).abs() < 1e-9,
                "{direction} loop distance"
            );
            assert_eq!(
                route
                    .stations
                    .iter()
                    .filter(|s| s.name == topology.junction())
                    .count(),
                2,
                "both junction rows are recorded"
            );

            assert_clock_monotonic(&route);
            assert_distance_conserved(&topology, &route);
            assert_rest_periodicity(&route, 0);
        }
    }

    #[test]
    fn full_loop_from_junction_closes_onto_terminal_entry() {
        // The path-closure special case, exercised at the walker level:
        // a full-loop walk whose destination is the leading junction
        // entry appends the terminal entry as an explicit final station.
        let topology = topo();
        let circ = topology.circular();
        let perimeter: f64 = circ.iter().map(|s| s.next_km).sum();

        let walk = walk_circular(
            circ,
            0,
            0,
            Direction::Clockwise,
            4.0,
            ts(9, 0),
            0,
            0,
            true,
        );

        // Origin, 29 loop hops, plus the appended terminal entry.
        assert_eq!(walk.stations.len(), 31);
        let last = walk.stations.last().unwrap();
        assert_eq!(last.name, "都庁前");
        assert_eq!(last.departure, None);
        assert!(!last.is_rest_station);
        // The clockwise closing hop carries the terminal's 0 km.
        assert_eq!(last.arrival, walk.stations[29].arrival);
        assert!((walk.total_km - perimeter).abs() < 1e-9);
    }

    // Cross-zone splices

    #[test]
    fn linear_to_circular_splices_at_junction() {
        let route = plan("練馬", "春日", Direction::Clockwise, 30);

        let names: Vec<&str> = route.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names[0], "練馬");
        assert_eq!(*names.last().unwrap(), "春日");
        assert_eq!(
            names.iter().filter(|n| **n == "都庁前").count(),
            1,
            "the junction appears exactly once at the boundary"
        );

        // The running counter continues across the splice: rests at
        // hops 5 (中野坂上) and 10 (若松河田).
        assert!(route.stations[5].is_rest_station);
        assert_eq!(route.stations[5].name, "中野坂上");
        assert!(route.stations[10].is_rest_station);
        assert_eq!(route.stations[10].name, "若松河田");

        assert_clock_monotonic(&route);
        assert_distance_conserved(&topo(), &route);
        assert_rest_periodicity(&route, 30);
    }

    #[test]
    fn junction_can_rest_mid_route() {
        // 落合南長崎 is five linear hops from the junction, so the
        // junction itself is the fifth hop of this cross-zone route.
        let route = plan("落合南長崎", "飯田橋", Direction::Clockwise, 15);

        let junction = &route.stations[5];
        assert_eq!(junction.name, "都庁前");
        assert!(junction.is_rest_station);
        let departure = junction.departure.unwrap();
        assert_eq!(departure, junction.arrival + Duration::minutes(15));

        // The circular sub-route continues from the junction's departure.
        let next = &route.stations[6];
        assert_eq!(next.name, "新宿西口");
        assert_eq!(next.arrival, departure + hop_duration(0.7, 4.0));

        assert_rest_periodicity(&route, 15);
    }

    #[test]
    fn circular_to_linear_splices_at_junction() {
        // 新宿 (index 27) clockwise reaches the junction through the
        // terminal entry, then continues down the linear branch.
        let route = plan("新宿", "中野坂上", Direction::Clockwise, 30);

        let names: Vec<&str> = route.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["新宿", "都庁前", "都庁前", "西新宿五丁目", "中野坂上"]
        );
        assert!((route.total_distance_km - (0.9 + 0.0 + 0.9 + 1.0)).abs() < 1e-9);

        assert_clock_monotonic(&route);
        assert_distance_conserved(&topo(), &route);
    }

    #[test]
    fn circular_to_linear_counterclockwise() {
        let route = plan("飯田橋", "西新宿五丁目", Direction::Counterclockwise, 30);

        let names: Vec<&str> = route.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "飯田橋",
                "牛込神楽坂",
                "牛込柳町",
                "若松河田",
                "東新宿",
                "新宿西口",
                "都庁前",
                "西新宿五丁目"
            ]
        );
        // The counter-clockwise junction approach avoids the terminal row.
        assert_eq!(names.iter().filter(|n| **n == "都庁前").count(), 1);

        assert_clock_monotonic(&route);
        assert_distance_conserved(&topo(), &route);
        assert_rest_periodicity(&route, 30);
    }

    // Contract violations

    #[test]
    fn unknown_station_rejected() {
        let err = compute_route(
            &topo(),
            "渋谷",
            "春日",
            4.0,
            ts(9, 0),
            Direction::Clockwise,
            30,
        )
        .unwrap_err();
        assert_eq!(err, RouteError::UnknownStation("渋谷".to_string()));

        let err = compute_route(
            &topo(),
            "春日",
            "渋谷",
            4.0,
            ts(9, 0),
            Direction::Clockwise,
            30,
        )
        .unwrap_err();
        assert_eq!(err, RouteError::UnknownStation("渋谷".to_string()));
    }

    #[test]
    fn non_positive_speed_rejected() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = compute_route(
                &topo(),
                "光が丘",
                "練馬",
                speed,
                ts(9, 0),
                Direction::Clockwise,
                30,
            )
            .unwrap_err();
            assert!(matches!(err, RouteError::InvalidSpeed(_)), "{speed}");
        }
    }

    #[test]
    fn speed_checked_before_station_lookup() {
        let err = compute_route(
            &topo(),
            "渋谷",
            "渋谷",
            0.0,
            ts(9, 0),
            Direction::Clockwise,
            30,
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::InvalidSpeed(_)));
    }

    #[test]
    fn zero_rest_minutes_still_marks_rest_stations() {
        let route = plan("光が丘", "中井", Direction::Clockwise, 0);
        let rest = &route.stations[5];
        assert!(rest.is_rest_station);
        assert_eq!(rest.departure, Some(rest.arrival));
    }
}
