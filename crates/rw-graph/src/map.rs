//! City registry and the lock that guards it.
//!
//! # Data layout
//!
//! Cities live in a `Vec<City>` in registration order and are addressed by
//! [`CityId`] (their position in that vector).  Each city carries its own
//! ordered list of outgoing [`Road`]s keyed by `CityId`, so the road graph is
//! an adjacency list over an arena with no reference cycles.
//!
//! # Locking
//!
//! One `RwLock` covers the city list, every road list and both readiness
//! flags.  [`Map::add_city`] and [`Map::build_roads`] hold the write side for
//! their whole duration; path searches hold the read side, so a walk never
//! observes a graph that is halfway through a rebuild.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rw_core::{CityId, Point};

use crate::{GraphError, GraphResult};

// ── Road ──────────────────────────────────────────────────────────────────────

/// A directed road to `to`, weighted by Euclidean distance.
///
/// After [`Map::build_roads`] every road has a twin pointing back with the
/// same distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Road {
    pub to:       CityId,
    pub distance: f64,
}

// ── City ──────────────────────────────────────────────────────────────────────

/// A named point plus its outgoing roads.
#[derive(Clone, Debug)]
pub struct City {
    pub name: String,
    pub pos:  Point,
    pub(crate) roads: Vec<Road>,
}

impl City {
    fn new(name: String, pos: Point) -> Self {
        Self { name, pos, roads: Vec::new() }
    }

    /// Outgoing roads in their enumeration order (primary neighbours first,
    /// then reverse roads in the order they were installed).
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Weight of the road to `other`, if one exists.
    pub fn road_to(&self, other: CityId) -> Option<f64> {
        self.roads.iter().find(|r| r.to == other).map(|r| r.distance)
    }

    /// Install a road, overwriting the distance if `to` is already a
    /// neighbour.  Returns `true` if the road is new.
    pub(crate) fn upsert_road(&mut self, to: CityId, distance: f64) -> bool {
        match self.roads.iter_mut().find(|r| r.to == to) {
            Some(road) => {
                road.distance = distance;
                false
            }
            None => {
                self.roads.push(Road { to, distance });
                true
            }
        }
    }
}

// ── MapState ──────────────────────────────────────────────────────────────────

/// Everything the map lock protects.
#[derive(Debug, Default)]
pub(crate) struct MapState {
    pub(crate) cities:        Vec<City>,
    pub(crate) roads_built:   bool,
    pub(crate) all_reachable: bool,
}

impl MapState {
    pub(crate) fn city(&self, id: CityId) -> GraphResult<&City> {
        self.cities.get(id.index()).ok_or(GraphError::CityNotFound(id))
    }
}

// ── Map ───────────────────────────────────────────────────────────────────────

/// The road graph: an ordered registry of cities plus the roads between them.
///
/// All methods take `&self`; share a `Map` between threads with `Arc<Map>`.
///
/// # Example
///
/// ```
/// use rw_graph::Map;
///
/// let map = Map::new();
/// let a = map.add_city("a", 0.0, 1.0).unwrap();
/// let b = map.add_city("b", 0.0, 2.0).unwrap();
/// map.build_roads(1);
/// assert_eq!(map.road_between(a, b), Some(1.0));
/// assert!(map.all_reachable());
/// ```
#[derive(Debug, Default)]
pub struct Map {
    state: RwLock<MapState>,
}

impl Map {
    /// An empty registry.  Both readiness flags start out `false`.
    pub fn new() -> Self {
        Self::default()
    }

    // Mutators validate before writing, so a poisoned lock still guards
    // consistent data.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, MapState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, MapState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a city at `(x, y)` and return its handle.
    ///
    /// Fails with [`GraphError::InvalidCoordinate`] for negative or
    /// non-finite coordinates and with [`GraphError::DuplicateLocation`] when
    /// another city already sits on exactly the same point.  Names are not
    /// required to be unique.
    ///
    /// A successful registration clears `roads_built` and `all_reachable`:
    /// the new city has no roads until the next [`build_roads`](Self::build_roads).
    pub fn add_city(&self, name: impl Into<String>, x: f64, y: f64) -> GraphResult<CityId> {
        let name = name.into();
        let pos = Point::new(x, y);
        if !pos.is_on_plane() {
            log::debug!("rejected city {name:?}: invalid coordinates {pos}");
            return Err(GraphError::InvalidCoordinate { x, y });
        }

        let mut state = self.write();

        if let Some(existing) = state.cities.iter().find(|c| c.pos == pos) {
            log::debug!("rejected city {name:?}: {pos} is taken by {:?}", existing.name);
            return Err(GraphError::DuplicateLocation {
                existing: existing.name.clone(),
                x,
                y,
            });
        }

        let id = CityId::try_from(state.cities.len())
            .ok()
            .filter(|id| *id != CityId::INVALID)
            .ok_or(GraphError::RegistryFull(state.cities.len()))?;

        log::debug!("registered city {name:?} at {pos} as {id}");
        state.cities.push(City::new(name, pos));
        state.roads_built = false;
        state.all_reachable = false;
        Ok(id)
    }

    /// Handle of the first city registered under `name`.
    pub fn find_city(&self, name: &str) -> Option<CityId> {
        self.read()
            .cities
            .iter()
            .position(|c| c.name == name)
            .map(|i| CityId(i as u32))
    }

    // ── Dimensions & flags ────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.read().cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().cities.is_empty()
    }

    /// `true` once [`build_roads`](Self::build_roads) has run since the last
    /// registration.
    pub fn roads_built(&self) -> bool {
        self.read().roads_built
    }

    /// `true` when the last build connected every city into one component.
    pub fn all_reachable(&self) -> bool {
        self.read().all_reachable
    }

    // ── City accessors ────────────────────────────────────────────────────

    pub fn city_name(&self, id: CityId) -> GraphResult<String> {
        Ok(self.read().city(id)?.name.clone())
    }

    pub fn position(&self, id: CityId) -> GraphResult<Point> {
        Ok(self.read().city(id)?.pos)
    }

    /// Snapshot of `id`'s outgoing roads in enumeration order.
    pub fn roads(&self, id: CityId) -> GraphResult<Vec<Road>> {
        Ok(self.read().city(id)?.roads.clone())
    }

    /// Weight of the road `a → b`, or `None` if there is none (or either
    /// handle is unknown).
    pub fn road_between(&self, a: CityId, b: CityId) -> Option<f64> {
        self.read().city(a).ok()?.road_to(b)
    }

    /// Snapshot of a whole city, roads included.
    pub fn city(&self, id: CityId) -> GraphResult<City> {
        Ok(self.read().city(id)?.clone())
    }

    /// Euclidean distance between two registered cities.
    pub fn distance_to(&self, a: CityId, b: CityId) -> GraphResult<f64> {
        let state = self.read();
        Ok(state.city(a)?.pos.distance_to(state.city(b)?.pos))
    }
}
