//! Random-walk path finder.
//!
//! Starting from a city, the walk repeatedly takes a uniformly random
//! outgoing road until every city in the map has been *arrived at* once.
//! It is not self-avoiding and makes no attempt to be short; the only
//! guarantee is coverage, which holds with probability 1 on a connected map.
//!
//! The start city is not counted as visited on entry: it only counts once the
//! walk comes back to it along a road.
//!
//! # Early exits
//!
//! [`WalkLimits`] can stop a walk once its distance exceeds a cap or after a
//! number of steps.  Both return `Ok(None)`, which callers should read as "no
//! path within budget" rather than as a failure.

use std::fmt;
use std::time::{Duration, Instant, SystemTime};

use rw_core::{CityId, StepPicker, WalkLimits};

use crate::map::Map;
use crate::{GraphError, GraphResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A completed walk.
#[derive(Debug, Clone)]
pub struct Path {
    /// Where the walk started.
    pub start: CityId,
    /// Name of the start city at the time of the walk.
    pub start_name: String,
    /// Every city in the order it was reached, starting with `start`.
    /// Repeats are kept.
    pub route: Vec<CityId>,
    /// Sum of the distances of every road taken.
    pub distance: f64,
    /// Wall-clock time the walk took.
    pub elapsed: Duration,
    /// When the walk completed.
    pub found_at: SystemTime,
}

impl Path {
    /// Number of entries in the route, the start included.
    pub fn visits(&self) -> usize {
        self.route.len()
    }

    /// Number of roads travelled.
    pub fn steps(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "started at {}, made {} visits, distance {:.6}, took {:?} to discover",
            self.start_name,
            self.visits(),
            self.distance,
            self.elapsed,
        )
    }
}

// ── Path finding ──────────────────────────────────────────────────────────────

impl Map {
    /// Walk from `start` until every city has been reached.
    ///
    /// `distance_cap <= 0.0` means unlimited.  See
    /// [`find_random_path_with`](Self::find_random_path_with).
    pub fn find_random_path<P: StepPicker + ?Sized>(
        &self,
        start: CityId,
        distance_cap: f64,
        picker: &mut P,
    ) -> GraphResult<Option<Path>> {
        self.find_random_path_with(start, &WalkLimits::capped(distance_cap), picker)
    }

    /// Walk from `start` under `limits`, choosing each road with `picker`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::RoadsNotBuilt`] if roads were never built, or a city
    ///   was registered after the last build.
    /// - [`GraphError::NotAllReachable`] if the last build left the map
    ///   disconnected.
    /// - [`GraphError::CityNotFound`] for an unknown `start`.
    ///
    /// Holds the map's read lock for the whole walk.  With
    /// `limits.max_steps == None` on a map where coverage is unlikely, that
    /// can be a long time.
    pub fn find_random_path_with<P: StepPicker + ?Sized>(
        &self,
        start: CityId,
        limits: &WalkLimits,
        picker: &mut P,
    ) -> GraphResult<Option<Path>> {
        let state = self.read();
        if !state.roads_built {
            return Err(GraphError::RoadsNotBuilt);
        }
        if !state.all_reachable {
            return Err(GraphError::NotAllReachable);
        }
        let start_name = state.city(start)?.name.clone();

        let t0 = Instant::now();
        let city_count = state.cities.len();
        let mut seen = vec![false; city_count];
        let mut seen_count = 0usize;
        let mut route = vec![start];
        let mut distance = 0.0f64;
        let mut steps = 0u64;
        let mut current = start;

        loop {
            let roads = &state.cities[current.index()].roads;
            if roads.is_empty() {
                return Err(GraphError::NotAllReachable);
            }

            let road = roads[picker.pick(roads.len())];
            current = road.to;
            distance += road.distance;
            steps += 1;
            route.push(current);
            if !seen[current.index()] {
                seen[current.index()] = true;
                seen_count += 1;
            }
            log::trace!("step {steps}: → {current}, distance {distance}");

            if limits.distance_exceeded(distance) {
                log::debug!(
                    "walk from {start_name:?} capped out after {steps} steps ({distance} > {})",
                    limits.distance_cap
                );
                return Ok(None);
            }
            if seen_count == city_count {
                let path = Path {
                    start,
                    start_name,
                    route,
                    distance,
                    elapsed: t0.elapsed(),
                    found_at: SystemTime::now(),
                };
                log::debug!("walk {path}");
                return Ok(Some(path));
            }
            if limits.steps_exhausted(steps) {
                log::debug!(
                    "walk from {start_name:?} gave up after {steps} steps, {seen_count}/{city_count} cities seen"
                );
                return Ok(None);
            }
        }
    }
}
