//! Road construction: k-nearest primary roads, symmetrization, reachability.
//!
//! # Passes
//!
//! ```text
//! ① Primary   — for every city (registration order) stream every other city
//!               through a NearestSet of capacity k and REPLACE the city's
//!               road list with what it retains.
//! ② Symmetry  — for every primary road c → n install n → c with the same
//!               distance (additive; a city may end up with more than k).
//! ③ Reach     — record every city holding a road, then BFS the symmetric
//!               graph from the first city.
//! ```
//!
//! The whole build runs under the map's write lock.  With the `parallel`
//! feature pass ① runs on Rayon's thread pool; results are installed in
//! registration order so the output is identical either way.

use std::collections::VecDeque;

use rw_core::CityId;

use crate::map::{City, Map, MapState, Road};
use crate::nearest::NearestSet;

impl Map {
    /// Connect every city to its `k` nearest neighbours and make every road
    /// two-way.
    ///
    /// Fully recomputes roads and both flags on every call; calling it again
    /// with a smaller `k` can turn a connected map into a disconnected one.
    /// Cost is O(n² · k) and the registry is locked for all of it.
    pub fn build_roads(&self, k: usize) {
        let mut state = self.write();
        build(&mut state, k);
    }
}

fn build(state: &mut MapState, k: usize) {
    let primary = primary_roads(&state.cities, k);

    for (city, roads) in state.cities.iter_mut().zip(&primary) {
        city.roads.clear();
        city.roads.extend_from_slice(roads);
    }

    let mut connected = vec![false; state.cities.len()];
    let mut reverse_added = 0usize;
    for (from, roads) in primary.iter().enumerate() {
        for road in roads {
            if state.cities[road.to.index()].upsert_road(CityId(from as u32), road.distance) {
                reverse_added += 1;
            }
            connected[road.to.index()] = true;
            connected[from] = true;
        }
    }

    let every_city_has_road = connected.iter().all(|&c| c);
    state.roads_built = true;
    state.all_reachable = every_city_has_road && is_connected(&state.cities);

    log::info!(
        "built roads: {} cities, k = {k}, {} primary + {reverse_added} reverse roads, all reachable = {}",
        state.cities.len(),
        primary.iter().map(Vec::len).sum::<usize>(),
        state.all_reachable,
    );
}

// ── Pass ①: nearest neighbours ────────────────────────────────────────────────

fn primary_roads(cities: &[City], k: usize) -> Vec<Vec<Road>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..cities.len())
            .into_par_iter()
            .map(|i| nearest_roads(cities, i, k))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..cities.len()).map(|i| nearest_roads(cities, i, k)).collect()
    }
}

fn nearest_roads(cities: &[City], pivot: usize, k: usize) -> Vec<Road> {
    let origin = cities[pivot].pos;
    let mut nearest = NearestSet::new(k);

    for (j, other) in cities.iter().enumerate() {
        if j == pivot {
            continue;
        }
        nearest.add(CityId(j as u32), origin.distance_to(other.pos));
    }

    nearest
        .into_pairs()
        .map(|(to, distance)| Road { to, distance })
        .collect()
}

// ── Pass ③: reachability ──────────────────────────────────────────────────────

/// `true` if a breadth-first search from the first city reaches every city.
/// An empty map is trivially connected.
fn is_connected(cities: &[City]) -> bool {
    if cities.is_empty() {
        return true;
    }

    let mut seen = vec![false; cities.len()];
    let mut queue = VecDeque::from([0usize]);
    seen[0] = true;
    let mut reached = 1usize;

    while let Some(cur) = queue.pop_front() {
        for road in &cities[cur].roads {
            let next = road.to.index();
            if !seen[next] {
                seen[next] = true;
                reached += 1;
                queue.push_back(next);
            }
        }
    }

    reached == cities.len()
}
