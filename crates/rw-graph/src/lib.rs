//! `rw-graph` — city registry, k-nearest road builder, and random walks.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`map`]     | `Map` (locked city registry), `City`, `Road`                |
//! | [`nearest`] | `NearestSet`, the bounded selector behind road building     |
//! | [`roads`]   | `Map::build_roads`: primary roads, symmetry, reachability   |
//! | [`walk`]    | `Map::find_random_path`, `Path`                             |
//! | [`loader`]  | `load_cities_csv`, `load_cities_reader`                     |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Order of operations
//!
//! ```text
//! add_city … → build_roads(k) → find_random_path(start, cap, picker) …
//! ```
//!
//! Registering a city after a build clears the readiness flags; the next walk
//! fails with `RoadsNotBuilt` until roads are rebuilt.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the nearest-neighbour pass on Rayon's thread pool.   |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `rw-core` types.     |

pub mod error;
pub mod loader;
pub mod map;
pub mod nearest;
pub mod roads;
pub mod walk;


pub use error::{GraphError, GraphResult};
pub use loader::{load_cities_csv, load_cities_reader};
pub use map::{City, Map, Road};
pub use nearest::NearestSet;
pub use walk::Path;
