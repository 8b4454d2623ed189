//! `rw-core` — foundational types for the `roadwalk` city graph.
//!
//! This crate is a dependency of every other `rw-*` crate.  It intentionally
//! has no `rw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `CityId`                                              |
//! | [`geo`]      | `Point`, Euclidean distance                           |
//! | [`config`]   | `WalkConfig`, `WalkLimits`                            |
//! | [`rng`]      | `StepPicker` trait, `WalkRng` (seeded default)        |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{WalkConfig, WalkLimits};
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::CityId;
pub use rng::{StepPicker, WalkRng};
